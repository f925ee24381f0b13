//! Claim rewards instruction handler.
//!
//! Handles claiming accrued rewards without touching principal.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::custody::{TokenCustody, VaultCustody};
use crate::error::StakingError;
use crate::events::RewardsClaimed;
use crate::rewards;
use crate::state::{transact, LedgerConfig, StakeRecord};

/// Accounts required for claiming rewards.
#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    /// The account claiming rewards.
    #[account(mut)]
    pub staker: Signer<'info>,

    /// The ledger.
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.principal_mint.as_ref()],
        bump = ledger.bump,
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

    /// Staker's token account for receiving rewards.
    #[account(
        mut,
        constraint = staker_reward_account.mint == ledger.reward_mint @ StakingError::MintMismatch,
        constraint = staker_reward_account.owner == staker.key()
    )]
    pub staker_reward_account: Account<'info, TokenAccount>,

    /// Ledger's reward vault.
    #[account(mut)]
    pub reward_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Settled reward and the new accrual baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub reward: u64,
    pub settled_through: i64,
}

/// Pay out the whole intervals accrued on `record`.
///
/// `last_claim_time` advances by the settled intervals only, so time past
/// the last whole interval carries into the next claim.
pub fn process_claim<R>(
    ledger: &mut LedgerConfig,
    record: &mut StakeRecord,
    reward: &R,
    now: i64,
) -> Result<ClaimReceipt>
where
    R: TokenCustody + ?Sized,
{
    let accrual = rewards::accrue(record, ledger.base_reward_rate, now)?;
    require!(accrual.reward > 0, StakingError::NoRewardsPending);

    transact(ledger, record, |ledger, record| {
        record.last_claim_time = accrual.settled_through;
        record.total_rewards_claimed = record
            .total_rewards_claimed
            .checked_add(accrual.reward)
            .ok_or(StakingError::MathOverflow)?;

        ledger.total_rewards_paid = ledger
            .total_rewards_paid
            .checked_add(accrual.reward)
            .ok_or(StakingError::MathOverflow)?;
        ledger.last_updated = now;

        reward.push(accrual.reward)?;

        Ok(ClaimReceipt {
            reward: accrual.reward,
            settled_through: accrual.settled_through,
        })
    })
}

/// Claim accrued rewards.
///
/// # Arguments
/// * `ctx` - ClaimRewards accounts context
pub fn handler(ctx: Context<ClaimRewards>) -> Result<()> {
    let clock = Clock::get()?;

    let principal_mint = ctx.accounts.ledger.principal_mint;
    let seeds = &[
        LEDGER_SEED,
        principal_mint.as_ref(),
        &[ctx.accounts.ledger.bump],
    ];
    let signer_seeds = &[&seeds[..]];

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
    let receipt = process_claim(
        &mut accounts.ledger,
        &mut accounts.stake_record,
        &reward,
        clock.unix_timestamp,
    )?;

    emit!(RewardsClaimed {
        owner: staker,
        amount: receipt.reward,
        timestamp: clock.unix_timestamp,
    });

    msg!("Claimed {} reward tokens", receipt.reward);
    msg!(
        "Total rewards claimed by account: {}",
        accounts.stake_record.total_rewards_claimed
    );
    msg!("Total distributed from ledger: {}", accounts.ledger.total_rewards_paid);

    Ok(())
}
