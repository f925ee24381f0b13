//! Withdraw instruction handler.
//!
//! Releases the full principal once the lock has expired, together with any
//! pending reward, and resets the stake record.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::custody::{TokenCustody, VaultCustody};
use crate::error::StakingError;
use crate::events::{RewardsClaimed, Unstaked};
use crate::rewards;
use crate::state::{transact, LedgerConfig, StakeRecord};

/// Accounts required for withdrawing.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// The account withdrawing its stake.
    #[account(mut)]
    pub staker: Signer<'info>,

    /// The ledger.
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.principal_mint.as_ref()],
        bump = ledger.bump,
        has_one = principal_vault @ StakingError::VaultMismatch,
        has_one = reward_vault @ StakingError::VaultMismatch
    )]
    pub ledger: Account<'info, LedgerConfig>,

    /// Staker's record.
    #[account(
        mut,
        seeds = [STAKE_RECORD_SEED, ledger.key().as_ref(), staker.key().as_ref()],
        bump = stake_record.bump,
        constraint = stake_record.owner == staker.key() @ StakingError::Unauthorized
    )]
    pub stake_record: Account<'info, StakeRecord>,

    /// Staker's principal token account.
    #[account(
        mut,
        constraint = staker_principal_account.mint == ledger.principal_mint @ StakingError::MintMismatch,
        constraint = staker_principal_account.owner == staker.key()
    )]
    pub staker_principal_account: Account<'info, TokenAccount>,

    /// Staker's reward token account.
    #[account(
        mut,
        constraint = staker_reward_account.mint == ledger.reward_mint @ StakingError::MintMismatch,
        constraint = staker_reward_account.owner == staker.key()
    )]
    pub staker_reward_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub principal_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Amounts released by a withdrawal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawReceipt {
    pub principal: u64,
    pub reward: u64,
}

/// Close out `record` after its lock has expired.
///
/// The record and ledger totals are final before principal is pushed, and
/// the reward push follows only when the reward is nonzero. A failed reward
/// push pulls the principal back into custody. Any sub-interval remainder is
/// discarded with the record.
pub fn process_withdraw<P, R>(
    ledger: &mut LedgerConfig,
    record: &mut StakeRecord,
    principal: &P,
    reward: &R,
    now: i64,
) -> Result<WithdrawReceipt>
where
    P: TokenCustody + ?Sized,
    R: TokenCustody + ?Sized,
{
    require!(record.is_active(), StakingError::NoActiveStake);

    if !record.is_lock_expired(now)? {
        msg!(
            "Lock of {} seconds runs until {}, now {}",
            record.lock_period,
            record.unlock_time()?,
            now
        );
        return err!(StakingError::LockNotExpired);
    }

    let pending = rewards::calculate_rewards(record, ledger.base_reward_rate, now)?;
    let amount = record.amount;

    transact(ledger, record, |ledger, record| {
        record.total_rewards_claimed = record
            .total_rewards_claimed
            .checked_add(pending)
            .ok_or(StakingError::MathOverflow)?;
        record.clear();

        ledger.total_staked = ledger
            .total_staked
            .checked_sub(amount)
            .ok_or(StakingError::MathOverflow)?;
        ledger.total_rewards_paid = ledger
            .total_rewards_paid
            .checked_add(pending)
            .ok_or(StakingError::MathOverflow)?;
        ledger.staker_count = ledger.staker_count.saturating_sub(1);
        ledger.last_updated = now;

        principal.push(amount)?;
        if pending > 0 {
            if let Err(err) = reward.push(pending) {
                // Take the principal back so custody matches the restored record.
                principal.pull(amount)?;
                return Err(err);
            }
        }

        Ok(WithdrawReceipt {
            principal: amount,
            reward: pending,
        })
    })
}

/// Withdraw the full stake after the lock period.
///
/// # Arguments
/// * `ctx` - Withdraw accounts context
pub fn handler(ctx: Context<Withdraw>) -> Result<()> {
    let clock = Clock::get()?;

    let principal_mint = ctx.accounts.ledger.principal_mint;
    let seeds = &[
        LEDGER_SEED,
        principal_mint.as_ref(),
        &[ctx.accounts.ledger.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let principal = VaultCustody::new(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.principal_vault.to_account_info(),
        ctx.accounts.staker_principal_account.to_account_info(),
        ctx.accounts.staker.to_account_info(),
        ctx.accounts.ledger.to_account_info(),
        signer_seeds,
    );
    let reward = VaultCustody::new(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.staker_reward_account.to_account_info(),
        ctx.accounts.staker.to_account_info(),
        ctx.accounts.ledger.to_account_info(),
        signer_seeds,
    );

    let staker = ctx.accounts.staker.key();
    let accounts = &mut *ctx.accounts;
    let receipt = process_withdraw(
        &mut accounts.ledger,
        &mut accounts.stake_record,
        &principal,
        &reward,
        clock.unix_timestamp,
    )?;

    emit!(Unstaked {
        owner: staker,
        amount: receipt.principal,
        timestamp: clock.unix_timestamp,
    });
    if receipt.reward > 0 {
        emit!(RewardsClaimed {
            owner: staker,
            amount: receipt.reward,
            timestamp: clock.unix_timestamp,
        });
    }

    msg!("Withdrew {} tokens", receipt.principal);
    msg!("Paid {} reward tokens", receipt.reward);
    msg!("Remaining stakers: {}", accounts.ledger.staker_count);

    Ok(())
}
