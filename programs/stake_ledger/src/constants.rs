//! Program constants for the stake ledger.
//!
//! This module defines the PDA seeds, time units, lock tier table and the
//! bounds applied to runtime configuration.

/// Seed for deriving the ledger PDA
pub const LEDGER_SEED: &[u8] = b"stake_ledger";

/// Seed for deriving per-account stake record PDAs
pub const STAKE_RECORD_SEED: &[u8] = b"stake_record";

/// Seed for deriving the principal vault PDA
pub const PRINCIPAL_VAULT_SEED: &[u8] = b"principal_vault";

/// Seed for deriving the reward vault PDA
pub const REWARD_VAULT_SEED: &[u8] = b"reward_vault";

/// Number of seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Length of one reward accrual step. Rewards only accrue for whole intervals.
pub const REWARD_INTERVAL: i64 = SECONDS_PER_DAY;

/// Number of intervals in a year, used to turn the annual rate into a per-interval rate
pub const INTERVALS_PER_YEAR: u128 = 365;

/// Multipliers are stored scaled by this factor (100 = 1.00x)
pub const MULTIPLIER_SCALE: u128 = 100;

/// Base reward rate is a whole percentage
pub const PERCENT_SCALE: u128 = 100;

/// Lock period for the Short tier in seconds (30 days)
pub const SHORT_LOCK_PERIOD: i64 = 30 * SECONDS_PER_DAY;

/// Lock period for the Medium tier in seconds (90 days)
pub const MEDIUM_LOCK_PERIOD: i64 = 90 * SECONDS_PER_DAY;

/// Lock period for the Long tier in seconds (180 days)
pub const LONG_LOCK_PERIOD: i64 = 180 * SECONDS_PER_DAY;

/// Lock period for the Extended tier in seconds (365 days)
pub const EXTENDED_LOCK_PERIOD: i64 = 365 * SECONDS_PER_DAY;

/// Short tier multiplier (1.00x)
pub const SHORT_MULTIPLIER: u64 = 100;

/// Medium tier multiplier (1.50x)
pub const MEDIUM_MULTIPLIER: u64 = 150;

/// Long tier multiplier (2.00x)
pub const LONG_MULTIPLIER: u64 = 200;

/// Extended tier multiplier (3.00x)
pub const EXTENDED_MULTIPLIER: u64 = 300;

/// Maximum annual base rate in whole percent
pub const MAX_REWARD_RATE: u8 = 100;

/// Default annual base rate (5%)
pub const DEFAULT_REWARD_RATE: u8 = 5;

/// Default minimum deposit, in base units
pub const DEFAULT_MIN_STAKE: u64 = 100;

/// Default maximum deposit, in base units
pub const DEFAULT_MAX_STAKE: u64 = 1_000_000_000_000;
