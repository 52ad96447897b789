//! Token movements between stakers and the pool.
//!
//! The contract address holds both the staked tokens and the rewards vault.
//! Balances are checked before each transfer so shortfalls surface as
//! contract errors instead of a host trap inside the token contract.

use soroban_sdk::{token, Address, Env};

use crate::state::PoolState;
use crate::ContractError;

pub struct Custody<'a> {
    env: &'a Env,
    staking: token::Client<'a>,
    rewards: token::Client<'a>,
}

impl<'a> Custody<'a> {
    pub fn new(env: &'a Env, pool: &PoolState) -> Self {
        Self {
            env,
            staking: token::Client::new(env, &pool.staking_asset),
            rewards: token::Client::new(env, &pool.rewards_asset),
        }
    }

    /// Pull `amount` staking tokens from `holder` into pool custody.
    pub fn debit_stake(&self, holder: &Address, amount: i128) -> Result<(), ContractError> {
        if self.staking.balance(holder) < amount {
            return Err(ContractError::InsufficientTokenBalance);
        }
        self.staking
            .transfer(holder, &self.env.current_contract_address(), &amount);
        Ok(())
    }

    /// Return `amount` staking tokens from pool custody to `holder`.
    pub fn credit_stake(&self, holder: &Address, amount: i128) -> Result<(), ContractError> {
        let pool = self.env.current_contract_address();
        if self.staking.balance(&pool) < amount {
            return Err(ContractError::InsufficientTokenBalance);
        }
        self.staking.transfer(&pool, holder, &amount);
        Ok(())
    }

    /// Pay `amount` reward tokens out of the rewards vault to `holder`.
    pub fn credit_rewards(&self, holder: &Address, amount: i128) -> Result<(), ContractError> {
        let pool = self.env.current_contract_address();
        if self.rewards.balance(&pool) < amount {
            return Err(ContractError::RewardsVaultDepleted);
        }
        self.rewards.transfer(&pool, holder, &amount);
        Ok(())
    }
}
