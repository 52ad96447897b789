use soroban_sdk::{contracttype, Address, Env};

use crate::state::{PoolState, StakerAccount};
use crate::ContractError;

const DAY_IN_LEDGERS: u32 = 17_280;
const TTL_EXTEND_TO: u32 = 30 * DAY_IN_LEDGERS;
const TTL_THRESHOLD: u32 = TTL_EXTEND_TO - DAY_IN_LEDGERS;

// ── Storage keys ─────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    /// Instance storage: the pool record.
    Pool,
    /// Instance storage: owner proposed by `propose_owner`.
    PendingOwner,
    /// Persistent storage: one account per staker.
    Staker(Address),
}

// ── Pool ─────────────────────────────────────────────────────────────────────

pub fn has_pool(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Pool)
}

pub fn load_pool(env: &Env) -> Result<PoolState, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Pool)
        .ok_or(ContractError::NotInitialized)
}

pub fn save_pool(env: &Env, pool: &PoolState) {
    env.storage().instance().set(&DataKey::Pool, pool);
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Staker accounts ──────────────────────────────────────────────────────────

pub fn load_staker(env: &Env, owner: &Address) -> Option<StakerAccount> {
    let key = DataKey::Staker(owner.clone());
    let account: Option<StakerAccount> = env.storage().persistent().get(&key);
    if account.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    account
}

/// Existing account for `owner`, or a zeroed one if they have never staked.
pub fn load_or_new_staker(env: &Env, owner: &Address) -> StakerAccount {
    load_staker(env, owner).unwrap_or_else(|| StakerAccount::empty(owner.clone()))
}

pub fn save_staker(env: &Env, account: &StakerAccount) {
    let key = DataKey::Staker(account.owner.clone());
    env.storage().persistent().set(&key, account);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Ownership transfer ───────────────────────────────────────────────────────

pub fn pending_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PendingOwner)
}

pub fn set_pending_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::PendingOwner, owner);
}

pub fn clear_pending_owner(env: &Env) {
    env.storage().instance().remove(&DataKey::PendingOwner);
}
