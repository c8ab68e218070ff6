use soroban_sdk::{contracttype, Address, Env};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers
const BALANCE_LIFETIME_THRESHOLD: u32 = 17280;
const BALANCE_BUMP_AMOUNT: u32 = 518400;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    pub token0: Address,
    pub token1: Address,
    pub reserve0: i128,
    pub reserve1: i128,
    pub total_shares: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ReentrancyGuard {
    pub locked: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct AllowanceEntry {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    PoolState,
    ReentrancyGuard,
    Balance(Address),
    Allowance(Address, Address),
}

pub fn has_pool_state(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::PoolState)
}

pub fn get_pool_state(env: &Env) -> Option<PoolState> {
    env.storage().instance().get(&DataKey::PoolState)
}

pub fn set_pool_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&DataKey::PoolState, state);
}

pub fn get_reentrancy_guard(env: &Env) -> ReentrancyGuard {
    env.storage()
        .instance()
        .get(&DataKey::ReentrancyGuard)
        .unwrap_or(ReentrancyGuard { locked: false })
}

pub fn set_reentrancy_guard(env: &Env, guard: &ReentrancyGuard) {
    env.storage().instance().set(&DataKey::ReentrancyGuard, guard);
}

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
            balance
        }
        None => 0,
    }
}

/// Zero balances are removed rather than stored.
pub fn set_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        env.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    }
}

/// Allowances live in temporary storage and expire with their ledger bound.
pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceEntry {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    match env.storage().temporary().get::<_, AllowanceEntry>(&key) {
        Some(entry) if entry.expiration_ledger >= env.ledger().sequence() => entry,
        Some(entry) => AllowanceEntry { amount: 0, expiration_ledger: entry.expiration_ledger },
        None => AllowanceEntry { amount: 0, expiration_ledger: 0 },
    }
}

pub fn set_allowance(env: &Env, from: &Address, spender: &Address, entry: &AllowanceEntry) {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    env.storage().temporary().set(&key, entry);
    if entry.amount > 0 {
        let live_for = entry
            .expiration_ledger
            .saturating_sub(env.ledger().sequence());
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
