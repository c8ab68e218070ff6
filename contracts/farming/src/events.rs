use soroban_sdk::{symbol_short, Address, Env};

pub struct FarmingEvents;

impl FarmingEvents {
    /// Topics: `("staked", user)`, data: `amount`.
    pub fn staked(env: &Env, user: &Address, amount: i128) {
        env.events().publish((symbol_short!("staked"), user), amount);
    }

    /// Topics: `("withdrawn", user)`, data: `amount`.
    pub fn withdrawn(env: &Env, user: &Address, amount: i128) {
        env.events().publish((symbol_short!("withdrawn"), user), amount);
    }

    /// Published after the withdraw and claim events of a full exit.
    pub fn exit(env: &Env, user: &Address, amount: i128) {
        env.events().publish((symbol_short!("exit"), user), amount);
    }

    /// Topics: `("paid", gift_index, user)`, data: `amount`.
    pub fn reward_paid(env: &Env, gift_index: u32, user: &Address, amount: i128) {
        env.events()
            .publish((symbol_short!("paid"), gift_index, user), amount);
    }

    /// Topics: `("funded", gift_index)`, data: `(amount, reward_rate, period_finish)`.
    pub fn reward_added(
        env: &Env,
        gift_index: u32,
        amount: i128,
        reward_rate: i128,
        period_finish: u64,
    ) {
        env.events().publish(
            (symbol_short!("funded"), gift_index),
            (amount, reward_rate, period_finish),
        );
    }

    pub fn gift_added(
        env: &Env,
        gift_index: u32,
        gift_token: &Address,
        duration: u64,
        reward_distribution: &Address,
        scale: i128,
    ) {
        env.events().publish(
            (symbol_short!("gift_add"), gift_index),
            (gift_token.clone(), duration, reward_distribution.clone(), scale),
        );
    }
}
