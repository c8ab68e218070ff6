//! Lazy reward-per-token accrual.
//!
//! Nothing runs on a clock: every stake, withdraw, claim or notify first
//! brings `reward_per_token_stored` up to the current timestamp and then
//! settles the touched account. All divisions round down, so the sum of
//! payouts never exceeds what was funded.
//!
//! `reward_rate` carries the gift's `scale` as a fixed-point multiplier:
//!
//! ```text
//! reward_rate      = amount * scale / duration
//! reward_per_token = stored + (min(now, finish) - last_update) * rate / total_supply
//! earned           = balance * (reward_per_token - paid) / scale + rewards
//! ```

use lpfarm_farming_interface::TokenRewards;

use crate::errors::FarmingError;

pub fn last_time_reward_applicable(gift: &TokenRewards, now: u64) -> u64 {
    now.min(gift.period_finish)
}

/// Accrual freezes while nothing is staked.
pub fn reward_per_token(
    gift: &TokenRewards,
    now: u64,
    total_supply: i128,
) -> Result<i128, FarmingError> {
    if total_supply == 0 {
        return Ok(gift.reward_per_token_stored);
    }
    let elapsed = last_time_reward_applicable(gift, now).saturating_sub(gift.last_update_time);
    let accrued = (elapsed as i128)
        .checked_mul(gift.reward_rate)
        .ok_or(FarmingError::Overflow)?
        / total_supply;
    gift.reward_per_token_stored
        .checked_add(accrued)
        .ok_or(FarmingError::Overflow)
}

pub fn earned(
    balance: i128,
    reward_per_token: i128,
    paid: i128,
    rewards: i128,
    scale: i128,
) -> Result<i128, FarmingError> {
    let pending = balance
        .checked_mul(reward_per_token - paid)
        .ok_or(FarmingError::Overflow)?
        / scale;
    pending.checked_add(rewards).ok_or(FarmingError::Overflow)
}

/// Brings the stored accumulator of `gift` up to `now`.
pub fn checkpoint(
    gift: &mut TokenRewards,
    now: u64,
    total_supply: i128,
) -> Result<(), FarmingError> {
    gift.reward_per_token_stored = reward_per_token(gift, now, total_supply)?;
    gift.last_update_time = last_time_reward_applicable(gift, now);
    Ok(())
}

/// New rate after `amount` is added at `now`.
///
/// An active period is blended: the undistributed remainder is rolled into
/// the new amount and the whole is spread over a fresh `duration`.
pub fn next_reward_rate(gift: &TokenRewards, now: u64, amount: i128) -> Result<i128, FarmingError> {
    let duration = gift.duration as i128;
    let total = if now >= gift.period_finish {
        amount
    } else {
        let remaining = (gift.period_finish - now) as i128;
        let leftover = remaining
            .checked_mul(gift.reward_rate)
            .ok_or(FarmingError::Overflow)?
            / gift.scale;
        amount.checked_add(leftover).ok_or(FarmingError::Overflow)?
    };
    let rate = total.checked_mul(gift.scale).ok_or(FarmingError::Overflow)? / duration;
    if rate == 0 {
        return Err(FarmingError::RewardTooSmall);
    }
    Ok(rate)
}

/// Highest rate the distributor's own `balance` of the gift token can back.
pub fn max_reward_rate(gift: &TokenRewards, balance: i128) -> Result<i128, FarmingError> {
    Ok(balance.checked_mul(gift.scale).ok_or(FarmingError::Overflow)? / gift.duration as i128)
}
