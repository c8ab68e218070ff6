use soroban_sdk::{symbol_short, Address, Env};

pub struct PoolEvents;

impl PoolEvents {
    /// Emits a `deposit` event after shares were issued.
    ///
    /// Topics: `("deposit", provider)`
    /// Data:   `(amount0, amount1, shares)`
    ///
    /// The SEP-41 `mint` event for the same shares is published separately by
    /// the share ledger.
    pub fn deposit(env: &Env, provider: &Address, amount0: i128, amount1: i128, shares: i128) {
        env.events()
            .publish((symbol_short!("deposit"), provider), (amount0, amount1, shares));
    }

    /// Emits a `withdraw` event after shares were burned.
    ///
    /// Topics: `("withdraw", provider)`
    /// Data:   `(amount0, amount1, shares)`
    pub fn withdraw(env: &Env, provider: &Address, amount0: i128, amount1: i128, shares: i128) {
        env.events()
            .publish((symbol_short!("withdraw"), provider), (amount0, amount1, shares));
    }
}
