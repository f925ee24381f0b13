/// Admin instruction handlers.
///
/// Handles controller-only operations on the ledger.
///
/// ## Security Guarantees
/// - Every admin function checks signer == ledger.authority before acting
/// - PDA validation ensures correct ledger
/// - Parameter bounds checking

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::custody::{TokenCustody, VaultCustody};
use crate::error::StakingError;
use crate::events::{
    AuthorityTransferred, EmergencyWithdrawal, RewardRateUpdated, StakeLimitsUpdated,
};
use crate::state::LedgerConfig;

/// Accounts required for admin operations.
///
/// ## Security Notes
/// - Authority must be signer
/// - Authority is compared against ledger.authority by each handler
/// - Ledger PDA validated via seeds
#[derive(Accounts)]
pub struct AdminControl<'info> {
    /// The caller claiming controller rights.
    pub authority: Signer<'info>,

    /// The ledger to modify.
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.principal_mint.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, LedgerConfig>,
}

/// Accounts required for an emergency withdrawal.
///
/// ## Security Notes
/// - `source` may hold any mint but must be owned by the ledger PDA
/// - `destination` must hold the same mint as `source` and belong to the
///   signing controller
#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [LEDGER_SEED, ledger.principal_mint.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, LedgerConfig>,

    /// Ledger-owned token account to drain.
    #[account(
        mut,
        constraint = source.owner == ledger.key() @ StakingError::VaultMismatch
    )]
    pub source: Account<'info, TokenAccount>,

    /// Controller's receiving account.
    #[account(
        mut,
        constraint = destination.mint == source.mint @ StakingError::MintMismatch,
        constraint = destination.owner == authority.key() @ StakingError::Unauthorized
    )]
    pub destination: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Replace the base reward rate. Returns the previous rate.
///
/// Unsettled intervals are priced at whatever rate is current when they are
/// settled, so the new rate applies to them too.
pub fn apply_reward_rate(
    ledger: &mut LedgerConfig,
    caller: &Pubkey,
    new_rate: u8,
    now: i64,
) -> Result<u8> {
    ledger.ensure_authority(caller)?;
    LedgerConfig::validate_rate(new_rate)?;

    let previous = ledger.base_reward_rate;
    ledger.base_reward_rate = new_rate;
    ledger.last_updated = now;
    Ok(previous)
}

pub fn apply_stake_limits(
    ledger: &mut LedgerConfig,
    caller: &Pubkey,
    min_stake: u64,
    max_stake: u64,
    now: i64,
) -> Result<()> {
    ledger.ensure_authority(caller)?;
    LedgerConfig::validate_limits(min_stake, max_stake)?;

    ledger.min_stake = min_stake;
    ledger.max_stake = max_stake;
    ledger.last_updated = now;
    Ok(())
}

/// Hand controller rights to `new_authority`. Returns the previous authority.
pub fn apply_authority_transfer(
    ledger: &mut LedgerConfig,
    caller: &Pubkey,
    new_authority: Pubkey,
    now: i64,
) -> Result<Pubkey> {
    ledger.ensure_authority(caller)?;
    require!(
        new_authority != Pubkey::default(),
        StakingError::Unauthorized
    );

    let previous = ledger.authority;
    ledger.authority = new_authority;
    ledger.last_updated = now;
    Ok(previous)
}

/// Move `amount` out of a ledger-owned account to the controller.
///
/// `destination_owner` is the owner of the receiving token account and must
/// be the controller. Ledger accounting is neither checked nor updated.
pub fn process_emergency_withdraw<C>(
    ledger: &LedgerConfig,
    caller: &Pubkey,
    destination_owner: &Pubkey,
    custody: &C,
    amount: u64,
) -> Result<()>
where
    C: TokenCustody + ?Sized,
{
    ledger.ensure_authority(caller)?;
    require_keys_eq!(
        *destination_owner,
        ledger.authority,
        StakingError::Unauthorized
    );
    custody.push(amount)
}

/// Update the annual base reward rate.
///
/// # Arguments
/// * `ctx` - AdminControl accounts context
/// * `new_rate` - New rate in whole percent, 1..=100
pub fn update_reward_rate_handler(ctx: Context<AdminControl>, new_rate: u8) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();

    let previous = apply_reward_rate(
        &mut ctx.accounts.ledger,
        &authority,
        new_rate,
        clock.unix_timestamp,
    )?;

    emit!(RewardRateUpdated {
        authority,
        previous_rate: previous,
        rate: new_rate,
    });

    msg!("Reward rate updated: {}% -> {}%", previous, new_rate);
    msg!("Admin: {}", authority);

    Ok(())
}

/// Update the per-deposit stake limits.
///
/// # Arguments
/// * `ctx` - AdminControl accounts context
/// * `min_stake` - Smallest accepted deposit
/// * `max_stake` - Largest accepted deposit
pub fn update_stake_limits_handler(
    ctx: Context<AdminControl>,
    min_stake: u64,
    max_stake: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();

    apply_stake_limits(
        &mut ctx.accounts.ledger,
        &authority,
        min_stake,
        max_stake,
        clock.unix_timestamp,
    )?;

    emit!(StakeLimitsUpdated {
        authority,
        min_stake,
        max_stake,
    });

    msg!("Stake limits updated: [{}, {}]", min_stake, max_stake);

    Ok(())
}

/// Transfer controller rights to a new address.
///
/// # Arguments
/// * `ctx` - AdminControl accounts context
/// * `new_authority` - New controller pubkey
pub fn transfer_authority_handler(
    ctx: Context<AdminControl>,
    new_authority: Pubkey,
) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.authority.key();

    let previous = apply_authority_transfer(
        &mut ctx.accounts.ledger,
        &authority,
        new_authority,
        clock.unix_timestamp,
    )?;

    emit!(AuthorityTransferred {
        previous_authority: previous,
        authority: new_authority,
    });

    msg!("Authority transferred: {} -> {}", previous, new_authority);

    Ok(())
}

/// Drain `amount` of any ledger-held token to the controller.
///
/// # Arguments
/// * `ctx` - EmergencyWithdraw accounts context
/// * `amount` - Amount to move out of `source`
pub fn emergency_withdraw_handler(ctx: Context<EmergencyWithdraw>, amount: u64) -> Result<()> {
    let principal_mint = ctx.accounts.ledger.principal_mint;
    let seeds = &[
        LEDGER_SEED,
        principal_mint.as_ref(),
        &[ctx.accounts.ledger.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let custody = VaultCustody::new(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.source.to_account_info(),
        ctx.accounts.destination.to_account_info(),
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.ledger.to_account_info(),
        signer_seeds,
    );

    let authority = ctx.accounts.authority.key();
    process_emergency_withdraw(
        &ctx.accounts.ledger,
        &authority,
        &ctx.accounts.destination.owner,
        &custody,
        amount,
    )?;

    emit!(EmergencyWithdrawal {
        authority,
        mint: ctx.accounts.source.mint,
        amount,
    });

    msg!(
        "Emergency withdrawal of {} tokens of mint {}",
        amount,
        ctx.accounts.source.mint
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::deposit::process_deposit;
    use crate::rewards::calculate_rewards;
    use crate::testing::*;

    #[test]
    fn reward_rate_update_is_gated_and_validated() {
        let mut ledger = ledger();
        let controller = ledger.authority;

        assert_error(
            apply_reward_rate(&mut ledger, &Pubkey::new_unique(), 10, T0),
            StakingError::Unauthorized,
        );
        assert_error(
            apply_reward_rate(&mut ledger, &controller, 0, T0),
            StakingError::InvalidRate,
        );
        assert_error(
            apply_reward_rate(&mut ledger, &controller, 101, T0),
            StakingError::InvalidRate,
        );
        assert_eq!(ledger.base_reward_rate, 5);

        let previous = apply_reward_rate(&mut ledger, &controller, 10, T0).unwrap();
        assert_eq!(previous, 5);
        assert_eq!(ledger.base_reward_rate, 10);
    }

    #[test]
    fn new_rate_prices_unsettled_intervals() {
        let mut ledger = ledger();
        let mut record = record();
        let principal = MockCustody::funded(0, 1_000_000);
        let reward = MockCustody::funded(1_000_000, 0);
        let controller = ledger.authority;

        process_deposit(
            &mut ledger,
            &mut record,
            &principal,
            &reward,
            1_000_000,
            EXTENDED_LOCK_PERIOD,
            T0,
        )
        .unwrap();
        let now = T0 + SECONDS_PER_DAY;
        assert_eq!(
            calculate_rewards(&record, ledger.base_reward_rate, now).unwrap(),
            410
        );

        apply_reward_rate(&mut ledger, &controller, 10, now).unwrap();

        // 1_000_000 * 10 * 300 * 1 / 3_650_000 = 821.9..
        assert_eq!(
            calculate_rewards(&record, ledger.base_reward_rate, now).unwrap(),
            821
        );
    }

    #[test]
    fn stake_limits_update_is_gated_and_validated() {
        let mut ledger = ledger();
        let controller = ledger.authority;

        assert_error(
            apply_stake_limits(&mut ledger, &Pubkey::new_unique(), 1, 2, T0),
            StakingError::Unauthorized,
        );
        assert_error(
            apply_stake_limits(&mut ledger, &controller, 5, 4, T0),
            StakingError::InvalidStakeLimits,
        );

        apply_stake_limits(&mut ledger, &controller, 10, 20, T0).unwrap();
        assert!(ledger.accepts_deposit(10));
        assert!(!ledger.accepts_deposit(21));
    }

    #[test]
    fn authority_transfer_moves_controller_rights() {
        let mut ledger = ledger();
        let controller = ledger.authority;
        let successor = Pubkey::new_unique();

        assert_error(
            apply_authority_transfer(&mut ledger, &controller, Pubkey::default(), T0),
            StakingError::Unauthorized,
        );

        let previous = apply_authority_transfer(&mut ledger, &controller, successor, T0).unwrap();
        assert_eq!(previous, controller);
        assert_error(
            apply_reward_rate(&mut ledger, &controller, 10, T0),
            StakingError::Unauthorized,
        );
        apply_reward_rate(&mut ledger, &successor, 10, T0).unwrap();
    }

    #[test]
    fn emergency_withdraw_ignores_ledger_accounting() {
        let mut ledger = ledger();
        ledger.total_staked = 500;
        let controller = ledger.authority;
        let custody = MockCustody::funded(500, 0);

        assert_error(
            process_emergency_withdraw(&ledger, &Pubkey::new_unique(), &controller, &custody, 500),
            StakingError::Unauthorized,
        );
        assert_eq!(custody.vault.get(), 500);

        process_emergency_withdraw(&ledger, &controller, &controller, &custody, 500).unwrap();
        assert_eq!(custody.vault.get(), 0);
        assert_eq!(custody.holder.get(), 500);
        assert_eq!(ledger.total_staked, 500);
    }

    #[test]
    fn emergency_withdraw_surfaces_transfer_failure() {
        let ledger = ledger();
        let custody = MockCustody::funded(10, 0);

        assert_error(
            process_emergency_withdraw(&ledger, &ledger.authority, &ledger.authority, &custody, 11),
            StakingError::TransferFailed,
        );
    }

    #[test]
    fn emergency_withdraw_only_pays_the_controller() {
        let ledger = ledger();
        let controller = ledger.authority;
        let custody = MockCustody::funded(500, 0);

        assert_error(
            process_emergency_withdraw(&ledger, &controller, &Pubkey::new_unique(), &custody, 500),
            StakingError::Unauthorized,
        );
        assert_eq!(custody.vault.get(), 500);
        assert_eq!(custody.pushes.get(), 0);
    }
}
