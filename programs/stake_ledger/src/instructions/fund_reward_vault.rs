/// Fund reward vault instruction handler.
///
/// Handles depositing reward tokens into the reward vault.
///
/// ## Security Guarantees
/// - Vault validation ensures correct PDA
/// - Mint validation prevents wrong token deposits
/// - Anyone can fund (no admin restriction)

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::custody::{TokenCustody, VaultCustody};
use crate::error::StakingError;
use crate::events::RewardVaultFunded;
use crate::state::LedgerConfig;

/// Accounts required for funding the reward vault.
///
/// ## Security Notes
/// - Vault must match ledger's reward vault
/// - Funder token account must hold the reward mint
#[derive(Accounts)]
pub struct FundRewardVault<'info> {
    /// The funder (anyone can fund - no admin restriction).
    pub funder: Signer<'info>,

    /// SECURITY: PDA + has_one validations.
    #[account(
        seeds = [LEDGER_SEED, ledger.principal_mint.as_ref()],
        bump = ledger.bump,
        has_one = reward_vault @ StakingError::VaultMismatch
    )]
    pub ledger: Account<'info, LedgerConfig>,

    #[account(
        mut,
        constraint = funder_token_account.mint == ledger.reward_mint @ StakingError::MintMismatch,
        constraint = funder_token_account.owner == funder.key() @ StakingError::Unauthorized
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = reward_vault.owner == ledger.key() @ StakingError::VaultMismatch
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn process_fund<C>(custody: &C, amount: u64) -> Result<()>
where
    C: TokenCustody + ?Sized,
{
    require!(amount > 0, StakingError::ZeroAmount);
    custody.pull(amount)
}

/// Fund the reward vault.
///
/// # Arguments
/// * `ctx` - FundRewardVault accounts context
/// * `amount` - Amount of reward tokens to add
pub fn handler(ctx: Context<FundRewardVault>, amount: u64) -> Result<()> {
    let custody = VaultCustody::new(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.funder_token_account.to_account_info(),
        ctx.accounts.funder.to_account_info(),
        ctx.accounts.ledger.to_account_info(),
        &[],
    );
    process_fund(&custody, amount)?;

    ctx.accounts.reward_vault.reload()?;
    let balance = ctx.accounts.reward_vault.amount;

    emit!(RewardVaultFunded {
        funder: ctx.accounts.funder.key(),
        amount,
    });

    msg!("Reward vault funded with {} tokens", amount);
    msg!("New reward vault balance: {}", balance);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn funding_moves_tokens_into_custody() {
        let custody = MockCustody::funded(0, 1_000);
        process_fund(&custody, 600).unwrap();
        assert_eq!(custody.vault.get(), 600);
        assert_eq!(custody.holder.get(), 400);
    }

    #[test]
    fn zero_funding_is_rejected() {
        let custody = MockCustody::funded(0, 1_000);
        assert_error(process_fund(&custody, 0), StakingError::ZeroAmount);
    }

    #[test]
    fn funder_without_balance_fails() {
        let custody = MockCustody::funded(0, 10);
        assert_error(process_fund(&custody, 11), StakingError::TransferFailed);
    }
}
