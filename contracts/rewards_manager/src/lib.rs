#![no_std]

mod errors;
mod events;
mod ownership;
mod storage;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test;

use lpfarm_farming_interface::FarmingRewardsClient;
use soroban_sdk::{contract, contractimpl, log, token::TokenClient, Address, Env};

pub use errors::ManagerError;
pub use ownership::ZERO_ACCOUNT;
pub use storage::ManagerConfig;

use events::ManagerEvents;
use ownership::{is_zero_address, require_owner};
use storage::{extend_instance_ttl, get_config, set_config};

/// Funding controller for one gift of a farming distributor.
///
/// Reward tokens are delivered here by an external process; anyone may then
/// forward the whole balance to the distributor, but only once the previous
/// period has run out.
#[contract]
pub struct RewardsManager;

#[contractimpl]
impl RewardsManager {
    /// `rewards_contract` must list this contract as the distribution
    /// address of `gift_index`, otherwise every funding attempt fails.
    pub fn initialize(
        env: Env,
        owner: Address,
        rewards_contract: Address,
        reward_token: Address,
        gift_index: u32,
    ) -> Result<(), ManagerError> {
        if storage::has_config(&env) {
            return Err(ManagerError::AlreadyInitialized);
        }
        if is_zero_address(&env, &rewards_contract) || is_zero_address(&env, &reward_token) {
            return Err(ManagerError::ZeroAddress);
        }

        set_config(
            &env,
            &ManagerConfig {
                owner: owner.clone(),
                rewards_contract: rewards_contract.clone(),
                reward_token,
                gift_index,
            },
        );
        ManagerEvents::ownership_transferred(&env, None, &owner);
        ManagerEvents::rewards_contract_set(&env, &rewards_contract);
        extend_instance_ttl(&env);
        Ok(())
    }

    /// Hands the entire reward-token balance to the distributor and starts a
    /// new period. Callable by anyone. Returns the amount forwarded.
    pub fn start_next_rewards_period(env: Env) -> Result<i128, ManagerError> {
        let config = get_config(&env).ok_or(ManagerError::NotInitialized)?;
        let this = env.current_contract_address();
        let token = TokenClient::new(&env, &config.reward_token);

        let amount = token.balance(&this);
        if amount == 0 {
            return Err(ManagerError::ZeroTokenBalance);
        }

        let farming = FarmingRewardsClient::new(&env, &config.rewards_contract);
        if env.ledger().timestamp() < farming.period_finish(&config.gift_index) {
            return Err(ManagerError::RewardsPeriodNotFinished);
        }

        token.transfer(&this, &config.rewards_contract, &amount);
        farming.notify_reward_amount(&this, &config.gift_index, &amount);

        log!(&env, "start", config.gift_index, amount);
        ManagerEvents::period_started(&env, config.gift_index, amount);
        extend_instance_ttl(&env);
        Ok(amount)
    }

    pub fn is_reward_period_finished(env: Env) -> Result<bool, ManagerError> {
        let finish = Self::period_finish(env.clone())?;
        Ok(env.ledger().timestamp() >= finish)
    }

    pub fn period_finish(env: Env) -> Result<u64, ManagerError> {
        let config = get_config(&env).ok_or(ManagerError::NotInitialized)?;
        let farming = FarmingRewardsClient::new(&env, &config.rewards_contract);
        Ok(farming.period_finish(&config.gift_index))
    }

    /// Timestamp at which streaming stops if the current balance is
    /// forwarded as soon as allowed.
    pub fn out_of_funding_date(env: Env) -> Result<u64, ManagerError> {
        let config = get_config(&env).ok_or(ManagerError::NotInitialized)?;
        let farming = FarmingRewardsClient::new(&env, &config.rewards_contract);
        let gift = farming.token_rewards(&config.gift_index);

        let held = TokenClient::new(&env, &config.reward_token)
            .balance(&env.current_contract_address());
        if held == 0 {
            return Ok(gift.period_finish);
        }
        env.ledger()
            .timestamp()
            .max(gift.period_finish)
            .checked_add(gift.duration)
            .ok_or(ManagerError::Overflow)
    }

    // -----------------------------------------------------------------------
    // Owner operations
    // -----------------------------------------------------------------------

    pub fn set_rewards_contract(
        env: Env,
        caller: Address,
        rewards_contract: Address,
    ) -> Result<(), ManagerError> {
        let mut config = require_owner(&env, &caller)?;
        config.rewards_contract = rewards_contract;
        set_config(&env, &config);
        ManagerEvents::rewards_contract_set(&env, &config.rewards_contract);
        extend_instance_ttl(&env);
        Ok(())
    }

    /// Forwarded to the distributor, which only accepts it between periods.
    pub fn set_rewards_period_duration(
        env: Env,
        caller: Address,
        duration: u64,
    ) -> Result<(), ManagerError> {
        let config = require_owner(&env, &caller)?;
        FarmingRewardsClient::new(&env, &config.rewards_contract).set_duration(
            &env.current_contract_address(),
            &config.gift_index,
            &duration,
        );
        extend_instance_ttl(&env);
        Ok(())
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ManagerError> {
        let mut config = require_owner(&env, &caller)?;
        config.owner = new_owner;
        set_config(&env, &config);
        ManagerEvents::ownership_transferred(&env, Some(caller), &config.owner);
        extend_instance_ttl(&env);
        Ok(())
    }

    /// Sends `amount` of `token` held here to `recipient`. An `amount` of 0
    /// means the whole balance; nothing happens if that balance is 0.
    /// Returns the amount moved.
    pub fn recover_erc20(
        env: Env,
        caller: Address,
        token: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<i128, ManagerError> {
        require_owner(&env, &caller)?;
        if is_zero_address(&env, &token) || is_zero_address(&env, &recipient) {
            return Err(ManagerError::ZeroAddress);
        }
        if amount < 0 {
            return Err(ManagerError::InvalidAmount);
        }

        let this = env.current_contract_address();
        let client = TokenClient::new(&env, &token);
        let balance = client.balance(&this);
        let amount = if amount == 0 { balance } else { amount };
        if balance < amount {
            return Err(ManagerError::InsufficientBalance);
        }
        if amount == 0 {
            return Ok(0);
        }

        client.transfer(&this, &recipient, &amount);
        log!(&env, "recover", token, amount, recipient);
        ManagerEvents::token_recovered(&env, &token, amount, &recipient);
        Ok(amount)
    }

    // -----------------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------------

    pub fn owner(env: Env) -> Result<Address, ManagerError> {
        get_config(&env).map(|c| c.owner).ok_or(ManagerError::NotInitialized)
    }

    pub fn rewards_contract(env: Env) -> Result<Address, ManagerError> {
        get_config(&env)
            .map(|c| c.rewards_contract)
            .ok_or(ManagerError::NotInitialized)
    }

    pub fn reward_token(env: Env) -> Result<Address, ManagerError> {
        get_config(&env).map(|c| c.reward_token).ok_or(ManagerError::NotInitialized)
    }

    pub fn gift_index(env: Env) -> Result<u32, ManagerError> {
        get_config(&env).map(|c| c.gift_index).ok_or(ManagerError::NotInitialized)
    }
}
