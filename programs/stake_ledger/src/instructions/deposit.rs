//! Deposit instruction handler.
//!
//! Locks principal under a tier. Topping up an active stake first pays out
//! the pending reward, then restarts the lock clock for the combined amount.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::custody::{TokenCustody, VaultCustody};
use crate::error::StakingError;
use crate::events::{RewardsClaimed, Staked};
use crate::rewards;
use crate::state::{transact, LedgerConfig, LockTier, StakeRecord};

/// Accounts required for depositing.
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// The account depositing tokens.
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

    /// Staker's record (created on first deposit).
    #[account(
        init_if_needed,
        payer = staker,
        space = StakeRecord::LEN,
        seeds = [STAKE_RECORD_SEED, ledger.key().as_ref(), staker.key().as_ref()],
        bump
    )]
    pub stake_record: Account<'info, StakeRecord>,

    /// Staker's principal token account.
    #[account(
        mut,
        constraint = staker_principal_account.mint == ledger.principal_mint @ StakingError::MintMismatch,
        constraint = staker_principal_account.owner == staker.key()
    )]
    pub staker_principal_account: Account<'info, TokenAccount>,

    /// Staker's reward token account, receives rewards settled by a top-up.
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

    pub system_program: Program<'info, System>,

    pub token_program: Program<'info, Token>,
}

/// Result of a successful deposit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepositReceipt {
    pub amount: u64,
    pub total_amount: u64,
    pub lock_period: i64,
    /// Reward paid out because the deposit topped up an active stake.
    pub settled_reward: u64,
    pub first_stake: bool,
}

/// Apply a deposit to `record`.
///
/// Validates the amount and tier, settles any pending reward on an active
/// stake, then pulls `amount` of principal into custody. If the reward push
/// fails after the pull, the principal is refunded before the error returns.
pub fn process_deposit<P, R>(
    ledger: &mut LedgerConfig,
    record: &mut StakeRecord,
    principal: &P,
    reward: &R,
    amount: u64,
    lock_period: i64,
    now: i64,
) -> Result<DepositReceipt>
where
    P: TokenCustody + ?Sized,
    R: TokenCustody + ?Sized,
{
    if !ledger.accepts_deposit(amount) {
        msg!(
            "Deposit of {} outside [{}, {}]",
            amount,
            ledger.min_stake,
            ledger.max_stake
        );
        return err!(StakingError::InvalidAmount);
    }

    let tier = match LockTier::from_lock_period(lock_period) {
        Some(tier) => tier,
        None => {
            msg!("Deposit requested unknown lock period {}", lock_period);
            return err!(StakingError::InvalidLockTier);
        }
    };

    let settled_reward = rewards::calculate_rewards(record, ledger.base_reward_rate, now)?;
    let first_stake = !record.is_active();

    transact(ledger, record, |ledger, record| {
        record.amount = record
            .amount
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        // Lock clock restarts for the combined balance, including on top-ups.
        record.start_time = now;
        record.last_claim_time = now;
        record.set_lock(tier);
        record.total_rewards_claimed = record
            .total_rewards_claimed
            .checked_add(settled_reward)
            .ok_or(StakingError::MathOverflow)?;

        ledger.total_staked = ledger
            .total_staked
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        ledger.total_rewards_paid = ledger
            .total_rewards_paid
            .checked_add(settled_reward)
            .ok_or(StakingError::MathOverflow)?;
        if first_stake {
            ledger.staker_count = ledger.staker_count.saturating_add(1);
        }
        ledger.last_updated = now;

        principal.pull(amount)?;
        if settled_reward > 0 {
            if let Err(err) = reward.push(settled_reward) {
                // Refund the principal so custody matches the restored record.
                principal.push(amount)?;
                return Err(err);
            }
        }

        Ok(DepositReceipt {
            amount,
            total_amount: record.amount,
            lock_period,
            settled_reward,
            first_stake,
        })
    })
}

/// Deposit tokens into the ledger.
///
/// # Arguments
/// * `ctx` - Deposit accounts context
/// * `amount` - Amount of principal to lock
/// * `lock_period` - Lock duration in seconds, one of the tier durations
pub fn handler(ctx: Context<Deposit>, amount: u64, lock_period: i64) -> Result<()> {
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
    let ledger_key = ctx.accounts.ledger.key();
    let record_bump = ctx.bumps.stake_record;

    let accounts = &mut *ctx.accounts;
    let record = &mut accounts.stake_record;
    record.owner = staker;
    record.ledger = ledger_key;
    record.bump = record_bump;

    let receipt = process_deposit(
        &mut accounts.ledger,
        record,
        &principal,
        &reward,
        amount,
        lock_period,
        clock.unix_timestamp,
    )?;

    if receipt.settled_reward > 0 {
        msg!("Settled {} reward tokens before top-up", receipt.settled_reward);
        emit!(RewardsClaimed {
            owner: staker,
            amount: receipt.settled_reward,
            timestamp: clock.unix_timestamp,
        });
    }

    emit!(Staked {
        owner: staker,
        amount,
        total_amount: receipt.total_amount,
        lock_period,
        timestamp: clock.unix_timestamp,
    });

    msg!("Staked {} tokens for {} seconds", amount, lock_period);
    msg!("Total staked by account: {}", receipt.total_amount);

    Ok(())
}
