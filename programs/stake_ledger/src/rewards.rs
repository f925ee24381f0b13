//! Interval-based reward accrual.
//!
//! Rewards accrue in whole [`REWARD_INTERVAL`] steps:
//!
//! ```text
//! reward = amount * base_rate * multiplier * intervals / (365 * 100 * 100)
//! ```
//!
//! Settlement only consumes whole intervals, so `last_claim_time` moves
//! forward by `intervals * REWARD_INTERVAL` and any sub-interval remainder
//! keeps accruing toward the next settlement.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::state::StakeRecord;

/// Reward owed for the whole intervals elapsed since the last settlement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accrual {
    pub reward: u64,
    pub intervals: u64,
    /// New `last_claim_time` once this accrual is paid.
    pub settled_through: i64,
}

/// Number of whole intervals between `last_claim_time` and `now`.
///
/// A clock reading behind `last_claim_time` counts as zero elapsed time.
pub fn elapsed_intervals(last_claim_time: i64, now: i64) -> u64 {
    let elapsed = now.saturating_sub(last_claim_time).max(0);
    (elapsed / REWARD_INTERVAL) as u64
}

/// Compute the unsettled accrual for `record` at `now` using the current
/// base rate and the record's current multiplier.
pub fn accrue(record: &StakeRecord, base_rate: u8, now: i64) -> Result<Accrual> {
    if !record.is_active() {
        return Ok(Accrual::default());
    }

    let intervals = elapsed_intervals(record.last_claim_time, now);
    if intervals == 0 {
        return Ok(Accrual {
            settled_through: record.last_claim_time,
            ..Accrual::default()
        });
    }

    let denominator = INTERVALS_PER_YEAR
        .checked_mul(PERCENT_SCALE)
        .and_then(|d| d.checked_mul(MULTIPLIER_SCALE))
        .ok_or(StakingError::MathOverflow)?;

    let reward = (record.amount as u128)
        .checked_mul(base_rate as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_mul(record.reward_multiplier as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_mul(intervals as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_div(denominator)
        .ok_or(StakingError::MathOverflow)?;

    let reward = u64::try_from(reward).map_err(|_| StakingError::MathOverflow)?;

    let settled_span = i64::try_from(intervals)
        .ok()
        .and_then(|n| n.checked_mul(REWARD_INTERVAL))
        .ok_or(StakingError::MathOverflow)?;
    let settled_through = record
        .last_claim_time
        .checked_add(settled_span)
        .ok_or(StakingError::MathOverflow)?;

    Ok(Accrual {
        reward,
        intervals,
        settled_through,
    })
}

/// Pending reward for `record` at `now`, without settling it.
pub fn calculate_rewards(record: &StakeRecord, base_rate: u8, now: i64) -> Result<u64> {
    Ok(accrue(record, base_rate, now)?.reward)
}
