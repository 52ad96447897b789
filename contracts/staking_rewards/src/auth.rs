use soroban_sdk::{Address, Env};

use crate::state::PoolState;
use crate::{storage, ContractError};

/// Guard: revert if the pool already exists.
pub fn require_uninitialized(env: &Env) -> Result<(), ContractError> {
    if storage::has_pool(env) {
        return Err(ContractError::AlreadyInitialized);
    }
    Ok(())
}

/// Guard: revert if `caller` is not the pool owner.
///
/// The caller must have already been authenticated via `require_auth()`.
pub fn require_owner(pool: &PoolState, caller: &Address) -> Result<(), ContractError> {
    if *caller != pool.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Guard: revert unless `candidate` is the proposed owner.
pub fn require_pending_owner(env: &Env, candidate: &Address) -> Result<(), ContractError> {
    let pending = storage::pending_owner(env).ok_or(ContractError::NoPendingOwner)?;
    if *candidate != pending {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}
