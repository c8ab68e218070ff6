//! Pool-share ledger.
//!
//! The pool contract is its own SEP-41 share token: balances live in
//! persistent storage, allowances in temporary storage, and metadata is
//! handled by `soroban-token-sdk` so wallets and indexers see a regular token.

use soroban_sdk::{Address, Env, String};
use soroban_token_sdk::{metadata::TokenMetadata, TokenUtils};

use crate::{
    errors::PoolError,
    storage::{get_allowance, get_balance, set_allowance, set_balance, AllowanceEntry},
};

/// Stellar assets use 7 decimals; shares follow suit.
pub const SHARE_DECIMALS: u32 = 7;

pub fn write_metadata(env: &Env, name: String, symbol: String) {
    TokenUtils::new(env).metadata().set_metadata(&TokenMetadata {
        decimal: SHARE_DECIMALS,
        name,
        symbol,
    });
}

pub fn read_metadata(env: &Env) -> TokenMetadata {
    TokenUtils::new(env).metadata().get_metadata()
}

pub fn check_nonnegative(amount: i128) -> Result<(), PoolError> {
    if amount < 0 {
        return Err(PoolError::NegativeAmount);
    }
    Ok(())
}

/// Credits freshly issued shares. The caller owns `total_shares` bookkeeping.
pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), PoolError> {
    let balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(PoolError::Overflow)?;
    set_balance(env, to, balance);
    TokenUtils::new(env)
        .events()
        .mint(env.current_contract_address(), to.clone(), amount);
    Ok(())
}

pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), PoolError> {
    let balance = get_balance(env, from);
    if balance < amount {
        return Err(PoolError::InsufficientBalance);
    }
    set_balance(env, from, balance - amount);
    TokenUtils::new(env).events().burn(from.clone(), amount);
    Ok(())
}

pub fn move_balance(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), PoolError> {
    let from_balance = get_balance(env, from);
    if from_balance < amount {
        return Err(PoolError::InsufficientBalance);
    }
    set_balance(env, from, from_balance - amount);
    let to_balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(PoolError::Overflow)?;
    set_balance(env, to, to_balance);
    Ok(())
}

pub fn approve(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), PoolError> {
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(PoolError::InvalidExpiration);
    }
    set_allowance(env, from, spender, &AllowanceEntry { amount, expiration_ledger });
    Ok(())
}

pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), PoolError> {
    let allowance = get_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(PoolError::InsufficientAllowance);
    }
    if amount > 0 {
        set_allowance(
            env,
            from,
            spender,
            &AllowanceEntry {
                amount: allowance.amount - amount,
                expiration_ledger: allowance.expiration_ledger,
            },
        );
    }
    Ok(())
}
