//! Read-only queries, returned to the caller as instruction return data.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::rewards;
use crate::state::{reward_multiplier, LedgerConfig, StakeRecord};

#[derive(Accounts)]
pub struct GetStakeInfo<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.principal_mint.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, LedgerConfig>,

    /// Absent for an account that has never deposited.
    pub stake_record: Option<Account<'info, StakeRecord>>,
}

#[derive(Accounts)]
pub struct GetRewardMultiplier {}

/// Snapshot of a stake plus its unsettled reward.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct StakeInfo {
    pub amount: u64,
    pub start_time: i64,
    pub last_claim_time: i64,
    pub lock_period: i64,
    pub reward_multiplier: u64,
    pub pending_rewards: u64,
    pub unlock_time: i64,
}

/// Build the view of `record` at `now`. A missing or empty record yields an
/// all-zero snapshot.
pub fn stake_info(record: Option<&StakeRecord>, base_rate: u8, now: i64) -> Result<StakeInfo> {
    let record = match record {
        Some(record) if record.is_active() => record,
        _ => return Ok(StakeInfo::default()),
    };

    Ok(StakeInfo {
        amount: record.amount,
        start_time: record.start_time,
        last_claim_time: record.last_claim_time,
        lock_period: record.lock_period,
        reward_multiplier: record.reward_multiplier,
        pending_rewards: rewards::calculate_rewards(record, base_rate, now)?,
        unlock_time: record.unlock_time()?,
    })
}

/// Report the caller's stake and unsettled reward.
///
/// # Arguments
/// * `ctx` - GetStakeInfo accounts context, `stake_record` may be omitted
pub fn get_stake_info_handler(ctx: Context<GetStakeInfo>) -> Result<StakeInfo> {
    let clock = Clock::get()?;
    let ledger = &ctx.accounts.ledger;

    let record = ctx.accounts.stake_record.as_deref();
    if let Some(record) = record {
        require_keys_eq!(record.ledger, ledger.key(), StakingError::LedgerMismatch);
    }

    stake_info(record, ledger.base_reward_rate, clock.unix_timestamp)
}

/// Look up the reward multiplier for a lock period.
///
/// # Arguments
/// * `ctx` - GetRewardMultiplier accounts context (no accounts)
/// * `lock_period` - Lock duration in seconds, unknown values read as Short
pub fn get_reward_multiplier_handler(
    _ctx: Context<GetRewardMultiplier>,
    lock_period: i64,
) -> Result<u64> {
    Ok(reward_multiplier(lock_period))
}
