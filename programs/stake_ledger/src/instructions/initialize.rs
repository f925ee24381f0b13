/// Initialize instruction handler.
///
/// Creates and configures a new ledger with security validations.
///
/// ## Security Guarantees
/// - Principal and reward vaults are PDAs owned by the ledger
/// - Mint addresses are locked to ledger state permanently
/// - All parameters validated before storage

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::state::LedgerConfig;

/// Runtime parameters chosen at ledger creation.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitializeParams {
    /// Annual base rate in whole percent.
    pub base_reward_rate: u8,
    pub min_stake: u64,
    pub max_stake: u64,
}

impl Default for InitializeParams {
    fn default() -> Self {
        Self {
            base_reward_rate: DEFAULT_REWARD_RATE,
            min_stake: DEFAULT_MIN_STAKE,
            max_stake: DEFAULT_MAX_STAKE,
        }
    }
}

/// Accounts required for ledger initialization.
///
/// ## Security Notes
/// - `principal_vault` and `reward_vault` are PDAs with `ledger` as authority
/// - Seeds ensure these accounts cannot be swapped or replaced
/// - Mints are validated and locked to ledger state
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The controller of the new ledger.
    /// SECURITY: This becomes the admin stored in ledger state.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// SECURITY: PDA derived from LEDGER_SEED + principal mint ensures one ledger per token.
    #[account(
        init,
        payer = authority,
        space = LedgerConfig::LEN,
        seeds = [LEDGER_SEED, principal_mint.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, LedgerConfig>,

    pub principal_mint: Account<'info, Mint>,

    /// May be the same mint as `principal_mint`.
    pub reward_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = authority,
        seeds = [PRINCIPAL_VAULT_SEED, ledger.key().as_ref()],
        bump,
        token::mint = principal_mint,
        token::authority = ledger
    )]
    pub principal_vault: Account<'info, TokenAccount>,

    #[account(
        init,
        payer = authority,
        seeds = [REWARD_VAULT_SEED, ledger.key().as_ref()],
        bump,
        token::mint = reward_mint,
        token::authority = ledger
    )]
    pub reward_vault: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,

    pub token_program: Program<'info, Token>,

    pub rent: Sysvar<'info, Rent>,
}

/// Validate `params` and write the initial ledger configuration.
pub fn configure_ledger(
    ledger: &mut LedgerConfig,
    authority: Pubkey,
    params: &InitializeParams,
    now: i64,
) -> Result<()> {
    LedgerConfig::validate_rate(params.base_reward_rate)?;
    LedgerConfig::validate_limits(params.min_stake, params.max_stake)?;

    ledger.authority = authority;
    ledger.base_reward_rate = params.base_reward_rate;
    ledger.min_stake = params.min_stake;
    ledger.max_stake = params.max_stake;
    ledger.total_staked = 0;
    ledger.staker_count = 0;
    ledger.total_rewards_paid = 0;
    ledger.created_at = now;
    ledger.last_updated = now;
    Ok(())
}

/// Initialize a new ledger.
///
/// # Arguments
/// * `ctx` - Initialize accounts context
/// * `params` - Reward rate and deposit limits
pub fn handler(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
    require!(
        ctx.accounts.principal_vault.owner == ctx.accounts.ledger.key(),
        StakingError::VaultMismatch
    );
    require!(
        ctx.accounts.reward_vault.owner == ctx.accounts.ledger.key(),
        StakingError::VaultMismatch
    );

    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();

    let ledger = &mut ctx.accounts.ledger;
    configure_ledger(ledger, authority, &params, clock.unix_timestamp)?;

    // SECURITY: mints and vaults are set once and never change
    ledger.principal_mint = ctx.accounts.principal_mint.key();
    ledger.reward_mint = ctx.accounts.reward_mint.key();
    ledger.principal_vault = ctx.accounts.principal_vault.key();
    ledger.reward_vault = ctx.accounts.reward_vault.key();

    ledger.bump = ctx.bumps.ledger;
    ledger.principal_vault_bump = ctx.bumps.principal_vault;
    ledger.reward_vault_bump = ctx.bumps.reward_vault;

    msg!("Stake ledger initialized");
    msg!("Admin: {}", authority);
    msg!("Principal mint: {}", ledger.principal_mint);
    msg!("Reward mint: {}", ledger.reward_mint);
    msg!(
        "Base rate: {}%, stake range [{}, {}]",
        params.base_reward_rate,
        params.min_stake,
        params.max_stake
    );

    Ok(())
}
