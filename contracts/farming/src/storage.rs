use lpfarm_farming_interface::TokenRewards;
use soroban_sdk::{contracttype, Address, Env};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 17280;
const PERSISTENT_BUMP_AMOUNT: u32 = 518400;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FarmingConfig {
    pub owner: Address,
    pub staking_token: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Config,
    TotalSupply,
    GiftCount,
    Gift(u32),
    Balance(Address),
    UserRewardPerTokenPaid(u32, Address),
    Rewards(u32, Address),
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<FarmingConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &FarmingConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

pub fn set_total_supply(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &total);
}

pub fn get_gift_count(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::GiftCount).unwrap_or(0)
}

pub fn set_gift_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::GiftCount, &count);
}

pub fn get_gift(env: &Env, index: u32) -> Option<TokenRewards> {
    read_persistent(env, &DataKey::Gift(index))
}

pub fn set_gift(env: &Env, index: u32, gift: &TokenRewards) {
    let key = DataKey::Gift(index);
    env.storage().persistent().set(&key, gift);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    read_persistent(env, &DataKey::Balance(id.clone())).unwrap_or(0)
}

pub fn set_balance(env: &Env, id: &Address, amount: i128) {
    write_amount(env, &DataKey::Balance(id.clone()), amount);
}

pub fn get_user_paid(env: &Env, index: u32, id: &Address) -> i128 {
    read_persistent(env, &DataKey::UserRewardPerTokenPaid(index, id.clone())).unwrap_or(0)
}

pub fn set_user_paid(env: &Env, index: u32, id: &Address, value: i128) {
    write_amount(env, &DataKey::UserRewardPerTokenPaid(index, id.clone()), value);
}

pub fn get_rewards(env: &Env, index: u32, id: &Address) -> i128 {
    read_persistent(env, &DataKey::Rewards(index, id.clone())).unwrap_or(0)
}

pub fn set_rewards(env: &Env, index: u32, id: &Address, amount: i128) {
    write_amount(env, &DataKey::Rewards(index, id.clone()), amount);
}

fn read_persistent<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = env.storage().persistent().get::<_, V>(key);
    if value.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    value
}

/// Per-account entries are dropped as soon as they return to zero.
fn write_amount(env: &Env, key: &DataKey, amount: i128) {
    if amount == 0 {
        env.storage().persistent().remove(key);
    } else {
        env.storage().persistent().set(key, &amount);
        env.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
