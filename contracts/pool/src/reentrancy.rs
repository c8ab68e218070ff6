use soroban_sdk::Env;

use crate::{
    errors::PoolError,
    storage::{get_reentrancy_guard, set_reentrancy_guard, ReentrancyGuard},
};

/// Acquires the pool lock. Reverts with `Locked` if already held.
///
/// Taken by `deposit` and `withdraw` before any token leaves or enters the
/// pool. Because Soroban rolls back all state on a failed invocation, the
/// lock is cleared automatically if the outer call reverts.
pub fn acquire(env: &Env) -> Result<(), PoolError> {
    let guard = get_reentrancy_guard(env);
    if guard.locked {
        return Err(PoolError::Locked);
    }
    set_reentrancy_guard(env, &ReentrancyGuard { locked: true });
    Ok(())
}

/// Releases the lock once the token transfers have settled.
pub fn release(env: &Env) {
    set_reentrancy_guard(env, &ReentrancyGuard { locked: false });
}
