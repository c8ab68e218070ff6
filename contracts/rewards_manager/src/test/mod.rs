#![cfg(test)]

mod funding;

use lpfarm_farming::{FarmingRewards, FarmingRewardsClient};
use soroban_sdk::{
    testutils::{Address as _, Events as _, Ledger as _},
    token::{StellarAssetClient, TokenClient},
    Address, Env, Val, Vec,
};

use crate::{RewardsManager, RewardsManagerClient};

pub const START: u64 = 1_700_000_000;
pub const DURATION: u64 = 100;
pub const SCALE: i128 = 1_000_000_000;
pub const EXPIRATION_LEDGER: u32 = 1_000;

pub struct Setup<'a> {
    pub env: Env,
    pub manager: RewardsManagerClient<'a>,
    pub farming: FarmingRewardsClient<'a>,
    pub reward_token: TokenClient<'a>,
    pub owner: Address,
}

/// Farming contract whose gift 0 is distributed by a manager owned by
/// `owner`. The staking token is `staking_token`.
pub fn setup_with_staking<'a>(env: Env, staking_token: &Address) -> Setup<'a> {
    let admin = Address::generate(&env);
    let owner = Address::generate(&env);
    let reward_token = env.register_stellar_asset_contract_v2(admin).address();

    let manager_id = env.register_contract(None, RewardsManager);
    let farming_id = env.register_contract(None, FarmingRewards);

    let farming = FarmingRewardsClient::new(&env, &farming_id);
    farming.initialize(&owner, staking_token, &reward_token, &DURATION, &manager_id, &SCALE);

    let manager = RewardsManagerClient::new(&env, &manager_id);
    manager.initialize(&owner, &farming_id, &reward_token, &0);

    Setup {
        reward_token: TokenClient::new(&env, &reward_token),
        manager,
        farming,
        owner,
        env,
    }
}

pub fn setup<'a>() -> Setup<'a> {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = START);

    let admin = Address::generate(&env);
    let staking = env.register_stellar_asset_contract_v2(admin).address();
    setup_with_staking(env, &staking)
}

impl<'a> Setup<'a> {
    /// Delivers reward tokens to the manager, as the external voting process would.
    pub fn deliver(&self, amount: i128) {
        StellarAssetClient::new(&self.env, &self.reward_token.address)
            .mint(&self.manager.address, &amount);
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
