use crate::state::{PoolState, StakerAccount};
use crate::ContractError;

/// Fixed-point scaling factor.
///
/// All reward-per-token values are multiplied by this constant before storage
/// to preserve sub-unit precision without floating-point arithmetic.
/// Using 10^12 gives 12 decimal places of precision, which is more than
/// sufficient for token amounts up to 10^18.
pub const PRECISION: i128 = 1_000_000_000_000;

// ── Core reward engine ──────────────────────────────────────────────────────

/// The latest timestamp at which rewards still accrue: `min(now, period_finish)`.
pub fn last_time_reward_applicable(now: u64, period_finish: u64) -> u64 {
    if now < period_finish {
        now
    } else {
        period_finish
    }
}

/// Reject a `reward_rate` whose full-period emission cannot be scaled.
///
/// Accrual never counts more than `duration` seconds, so if
/// `reward_rate × duration × PRECISION` fits in `i128` no later update of
/// the accumulator or of any staker's earnings can overflow.
pub fn check_emission_bounds(reward_rate: i128, duration: u64) -> Result<(), ContractError> {
    reward_rate
        .checked_mul(i128::from(duration))
        .and_then(|v| v.checked_mul(PRECISION))
        .map(|_| ())
        .ok_or(ContractError::InvalidParameter)
}

/// Recompute the global `reward_per_token_stored` value.
///
/// This is the fundamental O(1) accumulation step:
///
/// ```text
/// Δrpt = reward_rate × elapsed_seconds × PRECISION / total_staked
/// new_rpt = stored_rpt + Δrpt
/// ```
///
/// When `total_staked` is zero we return `stored` unchanged — no stakers
/// means no distribution, preventing division-by-zero and orphaned rewards.
/// The division truncates; the dropped remainder is bounded by one unit of
/// `PRECISION` per call.
///
/// # Errors
/// `ArithmeticOverflow` if any intermediate product leaves the `i128` range.
pub fn compute_reward_per_token(
    stored: i128,
    reward_rate: i128,
    elapsed: u64,
    total_staked: i128,
) -> Result<i128, ContractError> {
    if total_staked <= 0 || elapsed == 0 {
        return Ok(stored);
    }

    let delta = reward_rate
        .checked_mul(i128::from(elapsed))
        .and_then(|v| v.checked_mul(PRECISION))
        .and_then(|v| v.checked_div(total_staked))
        .ok_or(ContractError::ArithmeticOverflow)?;

    stored
        .checked_add(delta)
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Calculate the total rewards earned by a single staker.
///
/// ```text
/// earned = staked × (current_rpt − user_rpt_paid) / PRECISION + user_earned
/// ```
///
/// The subtraction `current_rpt − user_rpt_paid` isolates only the
/// accumulation that happened *since the user's last snapshot*, so prior
/// claims/snapshots are never double-counted.
pub fn earned(
    staked: i128,
    current_rpt: i128,
    user_rpt_paid: i128,
    user_earned: i128,
) -> Result<i128, ContractError> {
    let new_rewards = current_rpt
        .checked_sub(user_rpt_paid)
        .and_then(|delta| staked.checked_mul(delta))
        .map(|v| v / PRECISION)
        .ok_or(ContractError::ArithmeticOverflow)?;

    user_earned
        .checked_add(new_rewards)
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Advance the pool accumulator to `now` (clamped at `period_finish`).
///
/// Nothing is written to `pool` unless every step succeeds.
pub fn update_pool(pool: &mut PoolState, now: u64) -> Result<(), ContractError> {
    let effective = last_time_reward_applicable(now, pool.period_finish);
    let elapsed = effective.saturating_sub(pool.last_update_time);

    let rpt = compute_reward_per_token(
        pool.reward_per_token_stored,
        pool.reward_rate,
        elapsed,
        pool.total_staked,
    )?;

    pool.reward_per_token_stored = rpt;
    if effective > pool.last_update_time {
        pool.last_update_time = effective;
    }
    Ok(())
}

/// Move everything `account` has earned since its last snapshot into
/// `rewards_earned` and re-baseline it at the pool's current accumulator.
pub fn settle(pool: &PoolState, account: &mut StakerAccount) -> Result<(), ContractError> {
    let new_earned = earned(
        account.staked_amount,
        pool.reward_per_token_stored,
        account.reward_per_token_paid,
        account.rewards_earned,
    )?;

    account.rewards_earned = new_earned;
    account.reward_per_token_paid = pool.reward_per_token_stored;
    Ok(())
}

/// Full reward flush run ahead of every state-mutating operation.
///
/// 1. Update the global RPT accumulator.
/// 2. Compute everything the user has earned since their last snapshot.
/// 3. Store the updated snapshot so the user's next interaction starts fresh.
///
/// Calling this twice with the same `now` is a no-op the second time.
pub fn update_reward(
    pool: &mut PoolState,
    now: u64,
    account: Option<&mut StakerAccount>,
) -> Result<(), ContractError> {
    update_pool(pool, now)?;
    if let Some(account) = account {
        settle(pool, account)?;
    }
    Ok(())
}

/// Rewards `account` would hold if it were settled at `now`, without
/// mutating either record.
pub fn pending_rewards(
    pool: &PoolState,
    account: &StakerAccount,
    now: u64,
) -> Result<i128, ContractError> {
    let mut projected = pool.clone();
    update_pool(&mut projected, now)?;
    earned(
        account.staked_amount,
        projected.reward_per_token_stored,
        account.reward_per_token_paid,
        account.rewards_earned,
    )
}

// ── Unit tests ──────────────────────────────────────────────────────────────
