#![no_std]

mod errors;
mod events;
mod rewards;
mod storage;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, log, token::TokenClient, Address, Env, Vec};

pub use errors::FarmingError;
pub use lpfarm_farming_interface::TokenRewards;
pub use storage::FarmingConfig;

use events::FarmingEvents;
use storage::{
    extend_instance_ttl, get_balance, get_config, get_gift, get_gift_count, get_rewards,
    get_total_supply, get_user_paid, set_balance, set_gift, set_gift_count, set_rewards,
    set_total_supply, set_user_paid,
};

/// Upper bound on reward streams; every stake, withdraw and claim walks all of them.
pub const MAX_GIFTS: u32 = 8;

/// Multi-token staking distributor.
///
/// Stakers deposit a single staking token (typically pool shares) and earn
/// each configured gift token pro rata to stake and time.
#[contract]
pub struct FarmingRewards;

#[contractimpl]
impl FarmingRewards {
    /// Sets the owner and staking token and registers gift 0.
    pub fn initialize(
        env: Env,
        owner: Address,
        staking_token: Address,
        gift_token: Address,
        duration: u64,
        reward_distribution: Address,
        scale: i128,
    ) -> Result<(), FarmingError> {
        if storage::has_config(&env) {
            return Err(FarmingError::AlreadyInitialized);
        }
        storage::set_config(&env, &FarmingConfig { owner, staking_token });
        push_gift(&env, gift_token, duration, reward_distribution, scale)?;
        extend_instance_ttl(&env);
        Ok(())
    }

    /// Registers another reward stream. Returns its index.
    pub fn add_gift(
        env: Env,
        owner: Address,
        gift_token: Address,
        duration: u64,
        reward_distribution: Address,
        scale: i128,
    ) -> Result<u32, FarmingError> {
        require_owner(&env, &owner)?;
        let index = push_gift(&env, gift_token, duration, reward_distribution, scale)?;
        extend_instance_ttl(&env);
        Ok(index)
    }

    // -----------------------------------------------------------------------
    // Staking
    // -----------------------------------------------------------------------

    /// Pulls `amount` of the staking token from `caller` (allowance based).
    pub fn stake(env: Env, caller: Address, amount: i128) -> Result<(), FarmingError> {
        caller.require_auth();
        if amount <= 0 {
            return Err(FarmingError::ZeroAmount);
        }
        let config = get_config(&env).ok_or(FarmingError::NotInitialized)?;

        update_reward(&env, Some(&caller))?;

        let balance = get_balance(&env, &caller)
            .checked_add(amount)
            .ok_or(FarmingError::Overflow)?;
        let total = get_total_supply(&env)
            .checked_add(amount)
            .ok_or(FarmingError::Overflow)?;
        set_balance(&env, &caller, balance);
        set_total_supply(&env, total);

        let this = env.current_contract_address();
        TokenClient::new(&env, &config.staking_token).transfer_from(&this, &caller, &this, &amount);

        log!(&env, "stake", caller, amount, total);
        FarmingEvents::staked(&env, &caller, amount);
        extend_instance_ttl(&env);
        Ok(())
    }

    pub fn withdraw(env: Env, caller: Address, amount: i128) -> Result<(), FarmingError> {
        caller.require_auth();
        let config = get_config(&env).ok_or(FarmingError::NotInitialized)?;
        withdraw_stake(&env, &config, &caller, amount)?;
        extend_instance_ttl(&env);
        Ok(())
    }

    /// Pays out everything `caller` has accrued, one entry per gift.
    pub fn get_reward(env: Env, caller: Address) -> Result<Vec<i128>, FarmingError> {
        caller.require_auth();
        get_config(&env).ok_or(FarmingError::NotInitialized)?;
        update_reward(&env, Some(&caller))?;
        let paid = pay_rewards(&env, &caller)?;
        extend_instance_ttl(&env);
        Ok(paid)
    }

    /// Withdraws the full stake and claims every gift in one step.
    pub fn exit(env: Env, caller: Address) -> Result<Vec<i128>, FarmingError> {
        caller.require_auth();
        let config = get_config(&env).ok_or(FarmingError::NotInitialized)?;
        let balance = get_balance(&env, &caller);
        if balance == 0 {
            return Err(FarmingError::NoStake);
        }

        withdraw_stake(&env, &config, &caller, balance)?;
        let paid = pay_rewards(&env, &caller)?;

        FarmingEvents::exit(&env, &caller, balance);
        extend_instance_ttl(&env);
        Ok(paid)
    }

    // -----------------------------------------------------------------------
    // Funding
    // -----------------------------------------------------------------------

    /// Starts a new period for `gift_index`, or blends `amount` into the
    /// active one. The gift tokens must already be held by this contract.
    pub fn notify_reward_amount(
        env: Env,
        caller: Address,
        gift_index: u32,
        amount: i128,
    ) -> Result<(), FarmingError> {
        caller.require_auth();
        let gift = get_gift(&env, gift_index).ok_or(FarmingError::GiftNotFound)?;
        if caller != gift.reward_distribution {
            return Err(FarmingError::Unauthorized);
        }
        if amount <= 0 {
            return Err(FarmingError::ZeroAmount);
        }

        update_reward(&env, None)?;
        let mut gift = get_gift(&env, gift_index).ok_or(FarmingError::GiftNotFound)?;

        let now = env.ledger().timestamp();
        let rate = rewards::next_reward_rate(&gift, now, amount)?;
        let held = TokenClient::new(&env, &gift.gift_token)
            .balance(&env.current_contract_address());
        if rate > rewards::max_reward_rate(&gift, held)? {
            return Err(FarmingError::RewardTooBig);
        }

        gift.reward_rate = rate;
        gift.last_update_time = now;
        gift.period_finish = now.checked_add(gift.duration).ok_or(FarmingError::Overflow)?;
        set_gift(&env, gift_index, &gift);

        log!(&env, "notify", gift_index, amount, rate, gift.period_finish);
        FarmingEvents::reward_added(&env, gift_index, amount, rate, gift.period_finish);
        extend_instance_ttl(&env);
        Ok(())
    }

    /// Changes the period length for the next notification. Only the gift's
    /// distributor may call it, and only once the current period is over.
    pub fn set_duration(
        env: Env,
        caller: Address,
        gift_index: u32,
        duration: u64,
    ) -> Result<(), FarmingError> {
        caller.require_auth();
        let mut gift = get_gift(&env, gift_index).ok_or(FarmingError::GiftNotFound)?;
        if caller != gift.reward_distribution {
            return Err(FarmingError::Unauthorized);
        }
        if env.ledger().timestamp() < gift.period_finish {
            return Err(FarmingError::RewardsPeriodNotFinished);
        }
        if duration == 0 {
            return Err(FarmingError::InvalidDuration);
        }
        gift.duration = duration;
        set_gift(&env, gift_index, &gift);
        Ok(())
    }

    pub fn set_reward_distribution(
        env: Env,
        owner: Address,
        gift_index: u32,
        reward_distribution: Address,
    ) -> Result<(), FarmingError> {
        require_owner(&env, &owner)?;
        let mut gift = get_gift(&env, gift_index).ok_or(FarmingError::GiftNotFound)?;
        gift.reward_distribution = reward_distribution;
        set_gift(&env, gift_index, &gift);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------------

    pub fn owner(env: Env) -> Result<Address, FarmingError> {
        get_config(&env).map(|c| c.owner).ok_or(FarmingError::NotInitialized)
    }

    pub fn staking_token(env: Env) -> Result<Address, FarmingError> {
        get_config(&env).map(|c| c.staking_token).ok_or(FarmingError::NotInitialized)
    }

    pub fn balance_of(env: Env, account: Address) -> i128 {
        get_balance(&env, &account)
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    pub fn gift_count(env: Env) -> u32 {
        get_gift_count(&env)
    }

    pub fn token_rewards(env: Env, gift_index: u32) -> Result<TokenRewards, FarmingError> {
        get_gift(&env, gift_index).ok_or(FarmingError::GiftNotFound)
    }

    pub fn period_finish(env: Env, gift_index: u32) -> Result<u64, FarmingError> {
        get_gift(&env, gift_index)
            .map(|g| g.period_finish)
            .ok_or(FarmingError::GiftNotFound)
    }

    pub fn last_time_reward_applicable(env: Env, gift_index: u32) -> Result<u64, FarmingError> {
        let gift = get_gift(&env, gift_index).ok_or(FarmingError::GiftNotFound)?;
        Ok(rewards::last_time_reward_applicable(&gift, env.ledger().timestamp()))
    }

    pub fn reward_per_token(env: Env, gift_index: u32) -> Result<i128, FarmingError> {
        let gift = get_gift(&env, gift_index).ok_or(FarmingError::GiftNotFound)?;
        rewards::reward_per_token(&gift, env.ledger().timestamp(), get_total_supply(&env))
    }

    pub fn earned(env: Env, gift_index: u32, account: Address) -> Result<i128, FarmingError> {
        let gift = get_gift(&env, gift_index).ok_or(FarmingError::GiftNotFound)?;
        let rpt =
            rewards::reward_per_token(&gift, env.ledger().timestamp(), get_total_supply(&env))?;
        rewards::earned(
            get_balance(&env, &account),
            rpt,
            get_user_paid(&env, gift_index, &account),
            get_rewards(&env, gift_index, &account),
            gift.scale,
        )
    }
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), FarmingError> {
    caller.require_auth();
    let config = get_config(env).ok_or(FarmingError::NotInitialized)?;
    if *caller != config.owner {
        return Err(FarmingError::Unauthorized);
    }
    Ok(())
}

fn push_gift(
    env: &Env,
    gift_token: Address,
    duration: u64,
    reward_distribution: Address,
    scale: i128,
) -> Result<u32, FarmingError> {
    let index = get_gift_count(env);
    if index >= MAX_GIFTS {
        return Err(FarmingError::TooManyGifts);
    }
    if duration == 0 {
        return Err(FarmingError::InvalidDuration);
    }
    if scale <= 0 {
        return Err(FarmingError::InvalidScale);
    }

    let gift = TokenRewards {
        gift_token,
        scale,
        duration,
        reward_distribution,
        period_finish: 0,
        reward_rate: 0,
        last_update_time: 0,
        reward_per_token_stored: 0,
    };
    set_gift(env, index, &gift);
    set_gift_count(env, index + 1);

    FarmingEvents::gift_added(
        env,
        index,
        &gift.gift_token,
        duration,
        &gift.reward_distribution,
        scale,
    );
    Ok(index)
}

/// Checkpoints every gift and, when `account` is given, settles what it has
/// earned so far. Must run before any balance or rate change.
fn update_reward(env: &Env, account: Option<&Address>) -> Result<(), FarmingError> {
    let now = env.ledger().timestamp();
    let total = get_total_supply(env);
    let balance = account.map(|a| get_balance(env, a)).unwrap_or(0);

    for index in 0..get_gift_count(env) {
        let mut gift = get_gift(env, index).ok_or(FarmingError::GiftNotFound)?;
        rewards::checkpoint(&mut gift, now, total)?;
        set_gift(env, index, &gift);

        if let Some(account) = account {
            let earned = rewards::earned(
                balance,
                gift.reward_per_token_stored,
                get_user_paid(env, index, account),
                get_rewards(env, index, account),
                gift.scale,
            )?;
            set_rewards(env, index, account, earned);
            set_user_paid(env, index, account, gift.reward_per_token_stored);
        }
    }
    Ok(())
}

fn withdraw_stake(
    env: &Env,
    config: &FarmingConfig,
    caller: &Address,
    amount: i128,
) -> Result<(), FarmingError> {
    if amount <= 0 {
        return Err(FarmingError::ZeroAmount);
    }
    let balance = get_balance(env, caller);
    if balance == 0 {
        return Err(FarmingError::NoStake);
    }
    if amount > balance {
        return Err(FarmingError::InsufficientBalance);
    }

    update_reward(env, Some(caller))?;

    let remaining = balance - amount;
    let total = get_total_supply(env) - amount;
    set_balance(env, caller, remaining);
    set_total_supply(env, total);
    if remaining == 0 {
        // With no stake the paid checkpoint no longer affects `earned`.
        for index in 0..get_gift_count(env) {
            set_user_paid(env, index, caller, 0);
        }
    }

    TokenClient::new(env, &config.staking_token).transfer(
        &env.current_contract_address(),
        caller,
        &amount,
    );

    log!(env, "withdraw", caller, amount, total);
    FarmingEvents::withdrawn(env, caller, amount);
    Ok(())
}

/// Transfers and clears the settled rewards of `caller`. Expects
/// `update_reward` to have run for `caller` in this invocation.
fn pay_rewards(env: &Env, caller: &Address) -> Result<Vec<i128>, FarmingError> {
    let this = env.current_contract_address();
    let mut paid = Vec::new(env);
    for index in 0..get_gift_count(env) {
        let reward = get_rewards(env, index, caller);
        if reward > 0 {
            let gift = get_gift(env, index).ok_or(FarmingError::GiftNotFound)?;
            set_rewards(env, index, caller, 0);
            TokenClient::new(env, &gift.gift_token).transfer(&this, caller, &reward);
            FarmingEvents::reward_paid(env, index, caller, reward);
        }
        paid.push_back(reward);
    }
    Ok(paid)
}
