#![no_std]

pub mod auth;
pub mod custody;
pub mod events;
pub mod ledger;
pub mod rewards;
pub mod state;
pub mod storage;

use soroban_sdk::{contract, contractimpl, Address, Env};

use custody::Custody;
pub use state::{PoolState, StakerAccount};

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidParameter = 4,
    InvalidAmount = 5,
    InsufficientStake = 6,
    InsufficientTokenBalance = 7,
    RewardsVaultDepleted = 8,
    ArithmeticOverflow = 9,
    NoPendingOwner = 10,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingRewardsContract;

#[contractimpl]
impl StakingRewardsContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Create the pool.
    ///
    /// * `staking_asset` – SAC address of the token users stake.
    /// * `rewards_asset` – SAC address of the token distributed as rewards.
    /// * `reward_rate`   – tokens emitted **per second** across all stakers.
    /// * `duration`      – seconds from now until emission stops.
    pub fn initialize(
        env: Env,
        owner: Address,
        staking_asset: Address,
        rewards_asset: Address,
        reward_rate: i128,
        duration: u64,
    ) -> Result<PoolState, ContractError> {
        auth::require_uninitialized(&env)?;
        owner.require_auth();

        let pool = PoolState::new(
            owner,
            staking_asset,
            rewards_asset,
            reward_rate,
            duration,
            env.ledger().timestamp(),
        )?;
        storage::save_pool(&env, &pool);

        events::publish_initialized(
            &env,
            pool.owner.clone(),
            pool.staking_asset.clone(),
            pool.rewards_asset.clone(),
            pool.reward_rate,
            pool.duration,
            pool.period_finish,
        );

        Ok(pool)
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` staking tokens.
    ///
    /// The accumulator is settled first so the staker does not retroactively
    /// earn rewards on the newly deposited tokens.
    pub fn stake(env: Env, staker: Address, amount: i128) -> Result<StakerAccount, ContractError> {
        ledger::require_positive(amount)?;
        let mut pool = storage::load_pool(&env)?;
        staker.require_auth();

        // Accounts are keyed by owner, so `require_auth` above is the ownership check.
        let mut account = storage::load_or_new_staker(&env, &staker);

        rewards::update_reward(&mut pool, env.ledger().timestamp(), Some(&mut account))?;
        ledger::apply_stake(&mut pool, &mut account, amount)?;

        Custody::new(&env, &pool).debit_stake(&staker, amount)?;

        storage::save_pool(&env, &pool);
        storage::save_staker(&env, &account);

        events::publish_staked(&env, staker, amount, pool.total_staked);

        Ok(account)
    }

    /// Withdraw `amount` staking tokens back to the staker.
    pub fn unstake(
        env: Env,
        staker: Address,
        amount: i128,
    ) -> Result<StakerAccount, ContractError> {
        ledger::require_positive(amount)?;
        let mut pool = storage::load_pool(&env)?;
        staker.require_auth();

        let mut account = storage::load_or_new_staker(&env, &staker);

        rewards::update_reward(&mut pool, env.ledger().timestamp(), Some(&mut account))?;
        ledger::apply_unstake(&mut pool, &mut account, amount)?;

        Custody::new(&env, &pool).credit_stake(&staker, amount)?;

        storage::save_pool(&env, &pool);
        storage::save_staker(&env, &account);

        events::publish_unstaked(&env, staker, amount, pool.total_staked);

        Ok(account)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Claim all accumulated rewards for `staker`, returning the amount paid.
    ///
    /// Rewards are paid from the contract's reward-token balance; how that
    /// balance gets funded is outside this contract.
    pub fn claim_rewards(env: Env, staker: Address) -> Result<i128, ContractError> {
        let mut pool = storage::load_pool(&env)?;
        staker.require_auth();

        // Claiming never creates an account; a first-time caller has nothing to settle.
        let Some(mut account) = storage::load_staker(&env, &staker) else {
            return Ok(0);
        };

        rewards::update_reward(&mut pool, env.ledger().timestamp(), Some(&mut account))?;
        let earned = ledger::take_rewards(&mut account);

        if earned > 0 {
            Custody::new(&env, &pool).credit_rewards(&staker, earned)?;
        }

        storage::save_pool(&env, &pool);
        storage::save_staker(&env, &account);

        if earned > 0 {
            events::publish_reward_claimed(&env, staker, earned);
        }

        Ok(earned)
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn get_pool_state(env: Env) -> Result<PoolState, ContractError> {
        storage::load_pool(&env)
    }

    /// Return the persisted account, or `None` if `staker` never staked.
    pub fn get_staker_state(env: Env, staker: Address) -> Option<StakerAccount> {
        storage::load_staker(&env, &staker)
    }

    /// Return real-time pending rewards for a staker without mutating state.
    pub fn get_pending_rewards(env: Env, staker: Address) -> Result<i128, ContractError> {
        let pool = storage::load_pool(&env)?;
        match storage::load_staker(&env, &staker) {
            Some(account) => rewards::pending_rewards(&pool, &account, env.ledger().timestamp()),
            None => Ok(0),
        }
    }

    /// Return the accumulator as it would read if settled now.
    pub fn reward_per_token(env: Env) -> Result<i128, ContractError> {
        let mut pool = storage::load_pool(&env)?;
        rewards::update_pool(&mut pool, env.ledger().timestamp())?;
        Ok(pool.reward_per_token_stored)
    }

    pub fn last_time_reward_applicable(env: Env) -> Result<u64, ContractError> {
        let pool = storage::load_pool(&env)?;
        Ok(rewards::last_time_reward_applicable(
            env.ledger().timestamp(),
            pool.period_finish,
        ))
    }

    pub fn is_initialized(env: Env) -> bool {
        storage::has_pool(&env)
    }

    // ── Owner functions ──────────────────────────────────────────────────────

    /// Update the reward emission rate for the remainder of the period.
    ///
    /// The accumulator is flushed at the current rate *before* the rate
    /// changes, so existing stakers never lose or gain rewards retroactively.
    pub fn set_reward_rate(env: Env, caller: Address, new_rate: i128) -> Result<(), ContractError> {
        let mut pool = storage::load_pool(&env)?;
        caller.require_auth();
        auth::require_owner(&pool, &caller)?;

        if new_rate < 0 {
            return Err(ContractError::InvalidParameter);
        }
        rewards::check_emission_bounds(new_rate, pool.duration)?;

        rewards::update_reward(&mut pool, env.ledger().timestamp(), None)?;
        let old_rate = pool.reward_rate;
        pool.reward_rate = new_rate;
        storage::save_pool(&env, &pool);

        events::publish_reward_rate_set(&env, old_rate, new_rate);

        Ok(())
    }

    // ── Ownership transfer (two-step) ──────────────────────────────────────

    /// Propose a new owner. The new owner must call `accept_owner`.
    pub fn propose_owner(env: Env, caller: Address, new_owner: Address) -> Result<(), ContractError> {
        let pool = storage::load_pool(&env)?;
        caller.require_auth();
        auth::require_owner(&pool, &caller)?;

        storage::set_pending_owner(&env, &new_owner);

        events::publish_owner_transfer_proposed(&env, caller, new_owner);

        Ok(())
    }

    /// Accept the pending ownership transfer. Only the proposed owner can call this.
    pub fn accept_owner(env: Env, new_owner: Address) -> Result<(), ContractError> {
        let mut pool = storage::load_pool(&env)?;
        new_owner.require_auth();
        auth::require_pending_owner(&env, &new_owner)?;

        let old_owner = pool.owner.clone();
        pool.owner = new_owner.clone();
        storage::save_pool(&env, &pool);
        storage::clear_pending_owner(&env);

        events::publish_owner_transfer_accepted(&env, old_owner, new_owner);

        Ok(())
    }

    /// Cancel a pending ownership transfer. Only the current owner can call this.
    pub fn cancel_owner_transfer(env: Env, caller: Address) -> Result<(), ContractError> {
        let pool = storage::load_pool(&env)?;
        caller.require_auth();
        auth::require_owner(&pool, &caller)?;

        let pending = storage::pending_owner(&env).ok_or(ContractError::NoPendingOwner)?;
        storage::clear_pending_owner(&env);

        events::publish_owner_transfer_cancelled(&env, caller, pending);

        Ok(())
    }

    pub fn get_pending_owner(env: Env) -> Option<Address> {
        storage::pending_owner(&env)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_owner;
