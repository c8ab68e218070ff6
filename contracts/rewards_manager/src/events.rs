use soroban_sdk::{symbol_short, Address, Env};

pub struct ManagerEvents;

impl ManagerEvents {
    /// Topics: `("started", gift_index)`, data: amount handed to the distributor.
    pub fn period_started(env: &Env, gift_index: u32, amount: i128) {
        env.events()
            .publish((symbol_short!("started"), gift_index), amount);
    }

    /// Topics: `("recovered", token)`, data: `(amount, recipient)`.
    pub fn token_recovered(env: &Env, token: &Address, amount: i128, recipient: &Address) {
        env.events().publish(
            (symbol_short!("recovered"), token),
            (amount, recipient.clone()),
        );
    }

    /// `previous` is `None` only for the event published at initialize.
    pub fn ownership_transferred(env: &Env, previous: Option<Address>, new_owner: &Address) {
        env.events().publish(
            (symbol_short!("own_xfer"),),
            (previous, new_owner.clone()),
        );
    }

    pub fn rewards_contract_set(env: &Env, rewards_contract: &Address) {
        env.events()
            .publish((symbol_short!("rwd_set"),), rewards_contract.clone());
    }
}
