//! # Stake Ledger Program
//!
//! A time-locked staking ledger. Accounts lock principal under one of four
//! tiers and earn interval-based rewards scaled by the tier's multiplier:
//!
//! - **Short**: 30-day lock, 1.00x
//! - **Medium**: 90-day lock, 1.50x
//! - **Long**: 180-day lock, 2.00x
//! - **Extended**: 365-day lock, 3.00x
//!
//! ## Features
//! - Whole-day reward accrual at an admin-set annual base rate
//! - Claim rewards without unstaking
//! - Extend a lock to a longer tier
//! - Separate principal and reward vaults (may share a mint)
//! - Emergency withdrawal of any ledger-held token by the controller
//! - Checked arithmetic throughout

use anchor_lang::prelude::*;

declare_id!("5tKzQ3X3mF8vM1aEw2Pp6uYpV9bJ4cRrGd7nHs2LkWqE");

pub mod constants;
pub mod custody;
pub mod error;
pub mod events;
pub mod instructions;
pub mod rewards;
pub mod state;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod testing;

use instructions::*;

#[program]
pub mod stake_ledger {
    use super::*;

    /// Creates the ledger and its principal and reward vaults.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for initialization
    /// * `params` - Base reward rate (whole percent) and deposit limits
    ///
    /// # Errors
    /// Returns an error if the rate is outside 1..=100 or the limits are
    /// zero or inverted.
    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        instructions::initialize::handler(ctx, params)
    }

    /// Deposits principal under a lock tier, settling pending rewards first
    /// when topping up an active stake.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for depositing
    /// * `amount` - Amount of principal to lock
    /// * `lock_period` - Lock duration in seconds (30, 90, 180 or 365 days)
    ///
    /// # Errors
    /// Returns an error if:
    /// - Amount is outside the configured stake range
    /// - Lock period is not a tier
    /// - A token transfer fails
    pub fn deposit(ctx: Context<Deposit>, amount: u64, lock_period: i64) -> Result<()> {
        instructions::deposit::handler(ctx, amount, lock_period)
    }

    /// Withdraws the full principal plus pending rewards after the lock expires.
    ///
    /// # Errors
    /// Returns an error if:
    /// - There is no active stake
    /// - The lock has not expired
    /// - A token transfer fails
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::handler(ctx)
    }

    /// Claims accrued rewards without touching principal.
    ///
    /// # Errors
    /// Returns an error if no reward is pending or the reward transfer fails.
    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::claim_rewards::handler(ctx)
    }

    /// Moves an active stake to a strictly longer lock tier.
    ///
    /// # Errors
    /// Returns an error if:
    /// - There is no active stake
    /// - The target is not a tier
    /// - The target is not longer than the current lock
    pub fn extend_lock_period(ctx: Context<ExtendLock>, new_lock_period: i64) -> Result<()> {
        instructions::extend_lock::handler(ctx, new_lock_period)
    }

    /// Returns the caller's stake and its unsettled reward.
    pub fn get_stake_info(ctx: Context<GetStakeInfo>) -> Result<StakeInfo> {
        instructions::query::get_stake_info_handler(ctx)
    }

    /// Returns the multiplier for a lock period. Unknown periods get the
    /// Short tier's multiplier.
    pub fn get_reward_multiplier(
        ctx: Context<GetRewardMultiplier>,
        lock_period: i64,
    ) -> Result<u64> {
        instructions::query::get_reward_multiplier_handler(ctx, lock_period)
    }

    /// Funds the reward vault. Permissionless.
    ///
    /// # Errors
    /// Returns an error if amount is zero or the transfer fails.
    pub fn fund_reward_vault(ctx: Context<FundRewardVault>, amount: u64) -> Result<()> {
        instructions::fund_reward_vault::handler(ctx, amount)
    }

    /// Admin function to update the annual base reward rate.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the admin
    /// - Rate is outside 1..=100
    pub fn update_reward_rate(ctx: Context<AdminControl>, new_rate: u8) -> Result<()> {
        instructions::admin::update_reward_rate_handler(ctx, new_rate)
    }

    /// Admin function to update the per-deposit stake limits.
    pub fn update_stake_limits(
        ctx: Context<AdminControl>,
        min_stake: u64,
        max_stake: u64,
    ) -> Result<()> {
        instructions::admin::update_stake_limits_handler(ctx, min_stake, max_stake)
    }

    /// Admin function to transfer authority to a new address.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the current admin
    /// - New authority is the default pubkey
    pub fn transfer_authority(ctx: Context<AdminControl>, new_authority: Pubkey) -> Result<()> {
        instructions::admin::transfer_authority_handler(ctx, new_authority)
    }

    /// Admin escape hatch: moves any ledger-held token to the admin without
    /// touching stake accounting.
    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>, amount: u64) -> Result<()> {
        instructions::admin::emergency_withdraw_handler(ctx, amount)
    }
}
