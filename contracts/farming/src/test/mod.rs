#![cfg(test)]

// ---------------------------------------------------------------------------
// FarmingRewards test suite
//
// 1. accrual : pure reward-per-token / rate math
// 2. gifts   : initialize, add_gift, administration
// 3. staking : stake / withdraw / exit guards and token movement
// 4. rewards : accrual scenarios against real token contracts
// 5. events  : FarmingEvents emission
// ---------------------------------------------------------------------------


use soroban_sdk::{
    testutils::{Address as _, Events as _, Ledger as _},
    token::{StellarAssetClient, TokenClient},
    Address, Env, Val, Vec,
};

use crate::{FarmingRewards, FarmingRewardsClient};

pub const START: u64 = 1_000_000;
pub const DURATION: u64 = 100;
pub const SCALE: i128 = 1_000_000_000;
pub const EXPIRATION_LEDGER: u32 = 1_000;

pub struct Setup<'a> {
    pub env: Env,
    pub farming: FarmingRewardsClient<'a>,
    pub staking: TokenClient<'a>,
    pub gift: TokenClient<'a>,
    pub owner: Address,
    pub distributor: Address,
}

/// Staking token, one gift token and a farming contract with gift 0 set to
/// `DURATION` / `SCALE`, distributed by `distributor`.
pub fn setup<'a>() -> Setup<'a> {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = START);

    let admin = Address::generate(&env);
    let owner = Address::generate(&env);
    let distributor = Address::generate(&env);
    let staking = env.register_stellar_asset_contract_v2(admin.clone()).address();
    let gift = env.register_stellar_asset_contract_v2(admin).address();

    let farming = FarmingRewardsClient::new(&env, &env.register_contract(None, FarmingRewards));
    farming.initialize(&owner, &staking, &gift, &DURATION, &distributor, &SCALE);

    Setup {
        staking: TokenClient::new(&env, &staking),
        gift: TokenClient::new(&env, &gift),
        farming,
        owner,
        distributor,
        env,
    }
}

impl<'a> Setup<'a> {
    /// Account holding `amount` staking tokens with the farm approved for them.
    pub fn staker(&self, amount: i128) -> Address {
        let user = Address::generate(&self.env);
        StellarAssetClient::new(&self.env, &self.staking.address).mint(&user, &amount);
        self.staking
            .approve(&user, &self.farming.address, &amount, &EXPIRATION_LEDGER);
        user
    }

    pub fn stake(&self, amount: i128) -> Address {
        let user = self.staker(amount);
        self.farming.stake(&user, &amount);
        user
    }

    /// Sends `amount` gift tokens to the farm and notifies gift 0.
    pub fn fund(&self, amount: i128) {
        self.fund_gift(&self.gift.address, 0, amount);
    }

    pub fn fund_gift(&self, token: &Address, gift_index: u32, amount: i128) {
        StellarAssetClient::new(&self.env, token).mint(&self.farming.address, &amount);
        self.farming
            .notify_reward_amount(&self.distributor, &gift_index, &amount);
    }

    pub fn advance(&self, seconds: u64) {
        let now = self.env.ledger().timestamp();
        self.env.ledger().with_mut(|li| li.timestamp = now + seconds);
    }

    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    /// The trailing `n` events, oldest first.
    pub fn last_events(&self, n: u32) -> Vec<(Address, Vec<Val>, Val)> {
        let all = self.env.events().all();
        all.slice(all.len().saturating_sub(n)..)
    }
}
