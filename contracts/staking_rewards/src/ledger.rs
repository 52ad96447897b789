//! Balance mutations for stake, unstake and claim.
//!
//! Each function assumes `rewards::update_reward` has already settled the
//! account at the current timestamp, and writes nothing unless it succeeds.

use crate::state::{PoolState, StakerAccount};
use crate::ContractError;

pub fn require_positive(amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    Ok(())
}

/// Credit `amount` to the account and the pool total.
pub fn apply_stake(
    pool: &mut PoolState,
    account: &mut StakerAccount,
    amount: i128,
) -> Result<(), ContractError> {
    require_positive(amount)?;

    let staked = account
        .staked_amount
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    let total = pool
        .total_staked
        .checked_add(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;

    account.staked_amount = staked;
    pool.total_staked = total;
    Ok(())
}

/// Debit `amount` from the account and the pool total.
pub fn apply_unstake(
    pool: &mut PoolState,
    account: &mut StakerAccount,
    amount: i128,
) -> Result<(), ContractError> {
    require_positive(amount)?;
    if amount > account.staked_amount {
        return Err(ContractError::InsufficientStake);
    }

    let staked = account
        .staked_amount
        .checked_sub(amount)
        .ok_or(ContractError::ArithmeticOverflow)?;
    let total = pool
        .total_staked
        .checked_sub(amount)
        .filter(|t| *t >= 0)
        .ok_or(ContractError::ArithmeticOverflow)?;

    account.staked_amount = staked;
    pool.total_staked = total;
    Ok(())
}

/// Zero the account's earned balance and return what it held.
pub fn take_rewards(account: &mut StakerAccount) -> i128 {
    let earned = account.rewards_earned;
    account.rewards_earned = 0;
    earned
}
