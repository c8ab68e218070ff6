#![cfg(test)]

// ---------------------------------------------------------------------------
// Pool test suite
//
// 1. quote      : pure deposit/withdraw math, no token contracts
// 2. deposit    : lifecycle guards, first and subsequent deposits
// 3. withdraw   : proportional burns, full exit, slippage
// 4. invariants : conservation and price invariance over mixed sequences
// 5. share      : SEP-41 surface of the share token
// 6. events     : PoolEvents emission
// ---------------------------------------------------------------------------


use soroban_sdk::{
    testutils::{Address as _, Events as _},
    token::{StellarAssetClient, TokenClient},
    Address, Env, String, Val, Vec,
};

use crate::{Pool, PoolClient};

pub const EXPIRATION_LEDGER: u32 = 1_000;

pub struct Setup<'a> {
    pub env: Env,
    pub pool: PoolClient<'a>,
    pub token0: TokenClient<'a>,
    pub token1: TokenClient<'a>,
    pub admin: Address,
}

/// Registers two Stellar Asset Contracts and an initialized pool over them.
pub fn setup<'a>() -> Setup<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let token0 = env.register_stellar_asset_contract_v2(admin.clone()).address();
    let token1 = env.register_stellar_asset_contract_v2(admin.clone()).address();

    let pool_id = env.register_contract(None, Pool);
    let pool = PoolClient::new(&env, &pool_id);
    pool.initialize(
        &token0,
        &token1,
        &String::from_str(&env, "stETH-DAI Liquidity Pool Token"),
        &String::from_str(&env, "LP"),
    );

    Setup {
        token0: TokenClient::new(&env, &token0),
        token1: TokenClient::new(&env, &token1),
        pool,
        admin,
        env,
    }
}

impl<'a> Setup<'a> {
    /// Generates a provider holding `amount0`/`amount1` with the pool
    /// approved for the full balances.
    pub fn provider(&self, amount0: i128, amount1: i128) -> Address {
        let user = Address::generate(&self.env);
        StellarAssetClient::new(&self.env, &self.token0.address).mint(&user, &amount0);
        StellarAssetClient::new(&self.env, &self.token1.address).mint(&user, &amount1);
        self.token0
            .approve(&user, &self.pool.address, &amount0, &EXPIRATION_LEDGER);
        self.token1
            .approve(&user, &self.pool.address, &amount1, &EXPIRATION_LEDGER);
        user
    }

    /// Pool balances held in the external token contracts.
    pub fn custody(&self) -> (i128, i128) {
        (
            self.token0.balance(&self.pool.address),
            self.token1.balance(&self.pool.address),
        )
    }

    /// The trailing `n` events, oldest first.
    pub fn last_events(&self, n: u32) -> Vec<(Address, Vec<Val>, Val)> {
        let all = self.env.events().all();
        all.slice(all.len().saturating_sub(n)..)
    }
}
