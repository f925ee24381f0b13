//! Error types for the stake ledger.
//!
//! Each error has a unique code and descriptive message. Codes are
//! assigned in declaration order starting at 6000.

use anchor_lang::prelude::*;

/// Custom error codes for the stake ledger.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum StakingError {
    // ========== Input Validation Errors ==========

    /// [6000] Deposit amount is outside the configured `[min_stake, max_stake]` range.
    #[msg("Deposit amount is outside the allowed stake range")]
    InvalidAmount,

    /// [6001] Lock period is not one of the enumerated tiers.
    #[msg("Lock period must be 30, 90, 180 or 365 days")]
    InvalidLockTier,

    /// [6002] Administrative rate update outside (0, 100].
    #[msg("Reward rate must be between 1 and 100 percent")]
    InvalidRate,

    /// [6003] Stake limits are zero or inverted.
    #[msg("Stake limits must satisfy 0 < min_stake <= max_stake")]
    InvalidStakeLimits,

    /// [6004] Cannot fund with zero amount.
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    // ========== Stake State Errors ==========

    /// [6005] Operation requires an active stake but none exists.
    #[msg("No active stake found for this account")]
    NoActiveStake,

    /// [6006] Claim attempted with zero computed reward.
    #[msg("No rewards pending")]
    NoRewardsPending,

    // ========== Time/Lock Errors ==========

    /// [6007] Withdrawal attempted before the lock expired.
    #[msg("Lock period has not expired - cannot withdraw yet")]
    LockNotExpired,

    /// [6008] Extension target is not strictly longer than the current lock.
    #[msg("New lock period must be longer than the current one")]
    MustExtendDuration,

    // ========== Math/Overflow Errors ==========

    /// [6009] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    // ========== Authorization Errors ==========

    /// [6010] Unauthorized - caller is not the ledger controller.
    #[msg("Unauthorized: caller is not the ledger authority")]
    Unauthorized,

    // ========== Account Validation and Transfer Errors ==========

    /// [6011] An external token movement did not succeed.
    #[msg("Token transfer failed")]
    TransferFailed,

    /// [6012] The provided mint does not match the ledger's configured mint.
    #[msg("Token mint mismatch - wrong token for this ledger")]
    MintMismatch,

    /// [6013] The provided vault does not match the ledger's vault.
    #[msg("Vault address mismatch")]
    VaultMismatch,

    /// [6014] Stake record does not belong to this ledger.
    #[msg("Stake record does not belong to this ledger")]
    LedgerMismatch,
}
