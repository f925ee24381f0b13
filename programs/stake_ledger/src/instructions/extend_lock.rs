//! Extend lock instruction handler.
//!
//! Moves an active stake to a strictly longer tier. Neither the lock start
//! nor the accrual baseline moves, so the new multiplier also applies to the
//! unsettled intervals already elapsed.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::events::LockExtended;
use crate::state::{LedgerConfig, LockTier, StakeRecord};

/// Accounts required for extending a lock.
#[derive(Accounts)]
pub struct ExtendLock<'info> {
    pub staker: Signer<'info>,

    #[account(
        seeds = [LEDGER_SEED, ledger.principal_mint.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, LedgerConfig>,

    #[account(
        mut,
        seeds = [STAKE_RECORD_SEED, ledger.key().as_ref(), staker.key().as_ref()],
        bump = stake_record.bump,
        constraint = stake_record.owner == staker.key() @ StakingError::Unauthorized
    )]
    pub stake_record: Account<'info, StakeRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LockExtension {
    pub previous_lock_period: i64,
    pub lock_period: i64,
    pub reward_multiplier: u64,
}

pub fn process_extend_lock(
    record: &mut StakeRecord,
    new_lock_period: i64,
) -> Result<LockExtension> {
    require!(record.is_active(), StakingError::NoActiveStake);

    let tier = match LockTier::from_lock_period(new_lock_period) {
        Some(tier) => tier,
        None => {
            msg!("Extension requested unknown lock period {}", new_lock_period);
            return err!(StakingError::InvalidLockTier);
        }
    };

    if tier.lock_period() <= record.lock_period {
        msg!(
            "Extension to {} seconds does not exceed current {}",
            new_lock_period,
            record.lock_period
        );
        return err!(StakingError::MustExtendDuration);
    }

    let previous_lock_period = record.lock_period;
    record.set_lock(tier);

    Ok(LockExtension {
        previous_lock_period,
        lock_period: record.lock_period,
        reward_multiplier: record.reward_multiplier,
    })
}

/// Extend the lock of the caller's stake.
///
/// # Arguments
/// * `ctx` - ExtendLock accounts context
/// * `new_lock_period` - Target lock duration in seconds
pub fn handler(ctx: Context<ExtendLock>, new_lock_period: i64) -> Result<()> {
    let extension = process_extend_lock(&mut ctx.accounts.stake_record, new_lock_period)?;

    emit!(LockExtended {
        owner: ctx.accounts.staker.key(),
        previous_lock_period: extension.previous_lock_period,
        lock_period: extension.lock_period,
        reward_multiplier: extension.reward_multiplier,
    });

    msg!(
        "Lock extended from {} to {} seconds",
        extension.previous_lock_period,
        extension.lock_period
    );

    Ok(())
}
