use soroban_sdk::{contracttype, Address};

use crate::{rewards, ContractError};

/// Global configuration and accrual state of the pool.
///
/// Exactly one record exists per contract instance, created by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    pub owner: Address,
    pub staking_asset: Address,
    pub rewards_asset: Address,
    /// Reward units emitted per second across all stakers.
    pub reward_rate: i128,
    /// Length of the reward period in seconds.
    pub duration: u64,
    pub period_finish: u64,
    pub last_update_time: u64,
    /// Cumulative rewards per staked unit, scaled by `rewards::PRECISION`.
    pub reward_per_token_stored: i128,
    pub total_staked: i128,
}

impl PoolState {
    /// Validate the pool parameters and build the opening state at `now`.
    pub fn new(
        owner: Address,
        staking_asset: Address,
        rewards_asset: Address,
        reward_rate: i128,
        duration: u64,
        now: u64,
    ) -> Result<Self, ContractError> {
        if reward_rate <= 0 || duration == 0 || staking_asset == rewards_asset {
            return Err(ContractError::InvalidParameter);
        }
        rewards::check_emission_bounds(reward_rate, duration)?;
        let period_finish = now
            .checked_add(duration)
            .ok_or(ContractError::ArithmeticOverflow)?;

        Ok(Self {
            owner,
            staking_asset,
            rewards_asset,
            reward_rate,
            duration,
            period_finish,
            last_update_time: now,
            reward_per_token_stored: 0,
            total_staked: 0,
        })
    }
}

/// A participant's position in the pool.
///
/// Created on first stake and kept after the balance returns to zero so
/// unclaimed rewards and the settlement snapshot survive.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakerAccount {
    pub owner: Address,
    pub staked_amount: i128,
    pub reward_per_token_paid: i128,
    pub rewards_earned: i128,
}

impl StakerAccount {
    pub fn empty(owner: Address) -> Self {
        Self {
            owner,
            staked_amount: 0,
            reward_per_token_paid: 0,
            rewards_earned: 0,
        }
    }
}
