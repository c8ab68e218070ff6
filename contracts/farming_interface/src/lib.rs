#![no_std]

use soroban_sdk::{contractclient, contracttype, Address, Env};

/// Per-gift reward stream as stored by the distributor.
///
/// `reward_rate` and `reward_per_token_stored` are both multiplied by
/// `scale`; `earned` divides by it once per account.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenRewards {
    pub gift_token: Address,
    pub scale: i128,
    pub duration: u64,
    pub reward_distribution: Address,
    pub period_finish: u64,
    pub reward_rate: i128,
    pub last_update_time: u64,
    pub reward_per_token_stored: i128,
}

/// Distributor surface used by the rewards manager.
///
/// The farming contract implements these entry points; the manager only
/// ever talks to it through the generated `FarmingRewardsClient`.
/// Errors raised by the distributor abort the calling invocation.
#[contractclient(name = "FarmingRewardsClient")]
pub trait FarmingRewardsInterface {
    fn token_rewards(env: Env, gift_index: u32) -> TokenRewards;

    fn period_finish(env: Env, gift_index: u32) -> u64;

    /// Starts or tops up the stream for `gift_index`. The gift tokens must
    /// already sit in the distributor.
    fn notify_reward_amount(env: Env, caller: Address, gift_index: u32, amount: i128);

    fn set_duration(env: Env, caller: Address, gift_index: u32, duration: u64);
}
