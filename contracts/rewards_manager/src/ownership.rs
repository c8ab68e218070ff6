use soroban_sdk::{Address, Env, String};

use crate::{
    errors::ManagerError,
    storage::{get_config, ManagerConfig},
};

/// Strkey of the all-zero ed25519 account. Nobody holds its key, so it
/// stands in for "no address".
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub fn zero_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
}

pub fn is_zero_address(env: &Env, address: &Address) -> bool {
    *address == zero_address(env)
}

/// Authenticates `caller` and checks it is the recorded owner. Returns the
/// config so setters can update it in place.
pub fn require_owner(env: &Env, caller: &Address) -> Result<ManagerConfig, ManagerError> {
    caller.require_auth();
    let config = get_config(env).ok_or(ManagerError::NotInitialized)?;
    if *caller != config.owner {
        return Err(ManagerError::Unauthorized);
    }
    Ok(config)
}
