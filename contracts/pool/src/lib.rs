#![no_std]

mod errors;
mod events;
mod liquidity;
mod math;
mod reentrancy;
mod share;
mod storage;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, log, token::TokenClient, Address, Env, String};
use soroban_token_sdk::TokenUtils;

pub use errors::PoolError;
pub use storage::PoolState;

use events::PoolEvents;
use storage::{extend_instance_ttl, get_allowance, get_balance, get_pool_state, set_pool_state};

/// Two-asset liquidity pool that is also the SEP-41 token for its shares.
#[contract]
pub struct Pool;

#[contractimpl]
impl Pool {
    /// Fixes the two underlying tokens for the lifetime of the pool and sets
    /// the share token metadata.
    pub fn initialize(
        env: Env,
        token0: Address,
        token1: Address,
        name: String,
        symbol: String,
    ) -> Result<(), PoolError> {
        if storage::has_pool_state(&env) {
            return Err(PoolError::AlreadyInitialized);
        }
        if token0 == token1 {
            return Err(PoolError::IdenticalTokens);
        }

        set_pool_state(
            &env,
            &PoolState { token0, token1, reserve0: 0, reserve1: 0, total_shares: 0 },
        );
        share::write_metadata(&env, name, symbol);
        extend_instance_ttl(&env);
        Ok(())
    }

    /// Deposits up to `max_amounts` of (token0, token1) and issues shares to
    /// `caller`.
    ///
    /// Only the amounts computed by the binding ratio are pulled with
    /// `transfer_from`, so the caller must have approved the pool for at
    /// least those; any allowance above them stays with the caller.
    ///
    /// # Flow
    /// 1. **Quote**: amounts taken and shares issued (`liquidity::quote_deposit`).
    /// 2. **Lock**: reentrancy guard acquired.
    /// 3. **Effects**: reserves, total shares and the caller's balance updated.
    /// 4. **Interactions**: both tokens pulled from the caller.
    /// 5. **Emit + unlock**.
    pub fn deposit(
        env: Env,
        caller: Address,
        max_amounts: (i128, i128),
        min_amounts: (i128, i128),
    ) -> Result<i128, PoolError> {
        caller.require_auth();

        let mut state = get_pool_state(&env).ok_or(PoolError::NotInitialized)?;
        let quote = liquidity::quote_deposit(&state, max_amounts, min_amounts)?;

        reentrancy::acquire(&env)?;

        state.reserve0 = state.reserve0.checked_add(quote.amount0).ok_or(PoolError::Overflow)?;
        state.reserve1 = state.reserve1.checked_add(quote.amount1).ok_or(PoolError::Overflow)?;
        state.total_shares = state
            .total_shares
            .checked_add(quote.shares)
            .ok_or(PoolError::Overflow)?;
        set_pool_state(&env, &state);
        share::mint(&env, &caller, quote.shares)?;

        let pool = env.current_contract_address();
        TokenClient::new(&env, &state.token0).transfer_from(&pool, &caller, &pool, &quote.amount0);
        TokenClient::new(&env, &state.token1).transfer_from(&pool, &caller, &pool, &quote.amount1);

        log!(&env, "deposit", caller, quote.amount0, quote.amount1, quote.shares);
        PoolEvents::deposit(&env, &caller, quote.amount0, quote.amount1, quote.shares);

        reentrancy::release(&env);
        extend_instance_ttl(&env);
        Ok(quote.shares)
    }

    /// Burns `share_amount` of the caller's shares and sends back the
    /// proportional part of both reserves.
    pub fn withdraw(
        env: Env,
        caller: Address,
        share_amount: i128,
        min_amounts: (i128, i128),
    ) -> Result<(i128, i128), PoolError> {
        caller.require_auth();

        let mut state = get_pool_state(&env).ok_or(PoolError::NotInitialized)?;
        if share_amount > get_balance(&env, &caller) {
            return Err(PoolError::InsufficientBalance);
        }
        let (amount0, amount1) = liquidity::quote_withdraw(&state, share_amount, min_amounts)?;

        reentrancy::acquire(&env)?;

        share::burn(&env, &caller, share_amount)?;
        state.reserve0 -= amount0;
        state.reserve1 -= amount1;
        state.total_shares -= share_amount;
        set_pool_state(&env, &state);

        let pool = env.current_contract_address();
        TokenClient::new(&env, &state.token0).transfer(&pool, &caller, &amount0);
        TokenClient::new(&env, &state.token1).transfer(&pool, &caller, &amount1);

        log!(&env, "withdraw", caller, amount0, amount1, share_amount);
        PoolEvents::withdraw(&env, &caller, amount0, amount1, share_amount);

        reentrancy::release(&env);
        extend_instance_ttl(&env);
        Ok((amount0, amount1))
    }

    pub fn token0(env: Env) -> Result<Address, PoolError> {
        get_pool_state(&env).map(|s| s.token0).ok_or(PoolError::NotInitialized)
    }

    pub fn token1(env: Env) -> Result<Address, PoolError> {
        get_pool_state(&env).map(|s| s.token1).ok_or(PoolError::NotInitialized)
    }

    pub fn get_reserves(env: Env) -> Result<(i128, i128), PoolError> {
        get_pool_state(&env)
            .map(|s| (s.reserve0, s.reserve1))
            .ok_or(PoolError::NotInitialized)
    }

    pub fn get_state(env: Env) -> Result<PoolState, PoolError> {
        get_pool_state(&env).ok_or(PoolError::NotInitialized)
    }

    pub fn total_supply(env: Env) -> Result<i128, PoolError> {
        get_pool_state(&env)
            .map(|s| s.total_shares)
            .ok_or(PoolError::NotInitialized)
    }

    // -----------------------------------------------------------------------
    // Share token (SEP-41)
    // -----------------------------------------------------------------------

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        get_allowance(&env, &from, &spender).amount
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), PoolError> {
        from.require_auth();
        share::check_nonnegative(amount)?;

        share::approve(&env, &from, &spender, amount, expiration_ledger)?;
        TokenUtils::new(&env)
            .events()
            .approve(from, spender, amount, expiration_ledger);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), PoolError> {
        from.require_auth();
        share::check_nonnegative(amount)?;

        share::move_balance(&env, &from, &to, amount)?;
        TokenUtils::new(&env).events().transfer(from, to, amount);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), PoolError> {
        spender.require_auth();
        share::check_nonnegative(amount)?;

        share::spend_allowance(&env, &from, &spender, amount)?;
        share::move_balance(&env, &from, &to, amount)?;
        TokenUtils::new(&env).events().transfer(from, to, amount);
        Ok(())
    }

    pub fn decimals(env: Env) -> u32 {
        share::read_metadata(&env).decimal
    }

    pub fn name(env: Env) -> String {
        share::read_metadata(&env).name
    }

    pub fn symbol(env: Env) -> String {
        share::read_metadata(&env).symbol
    }
}
