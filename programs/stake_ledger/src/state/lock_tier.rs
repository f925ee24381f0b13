//! Lock tiers: the enumerated `(duration, multiplier)` pairs a stake can be
//! locked under.

use crate::constants::*;

/// One of the fixed lock durations a stake may select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LockTier {
    /// 30 days, 1.00x
    Short,
    /// 90 days, 1.50x
    Medium,
    /// 180 days, 2.00x
    Long,
    /// 365 days, 3.00x
    Extended,
}

impl LockTier {
    /// All tiers, shortest first.
    pub const ALL: [LockTier; 4] = [
        LockTier::Short,
        LockTier::Medium,
        LockTier::Long,
        LockTier::Extended,
    ];

    /// Resolves a lock period in seconds to its tier.
    ///
    /// Returns `None` for any duration that is not exactly one of the tiers.
    pub fn from_lock_period(lock_period: i64) -> Option<Self> {
        match lock_period {
            SHORT_LOCK_PERIOD => Some(LockTier::Short),
            MEDIUM_LOCK_PERIOD => Some(LockTier::Medium),
            LONG_LOCK_PERIOD => Some(LockTier::Long),
            EXTENDED_LOCK_PERIOD => Some(LockTier::Extended),
            _ => None,
        }
    }

    pub fn lock_period(self) -> i64 {
        match self {
            LockTier::Short => SHORT_LOCK_PERIOD,
            LockTier::Medium => MEDIUM_LOCK_PERIOD,
            LockTier::Long => LONG_LOCK_PERIOD,
            LockTier::Extended => EXTENDED_LOCK_PERIOD,
        }
    }

    pub fn multiplier(self) -> u64 {
        match self {
            LockTier::Short => SHORT_MULTIPLIER,
            LockTier::Medium => MEDIUM_MULTIPLIER,
            LockTier::Long => LONG_MULTIPLIER,
            LockTier::Extended => EXTENDED_MULTIPLIER,
        }
    }
}

/// Multiplier for a lock period in seconds.
///
/// Total over all inputs: anything that is not an enumerated tier maps to the
/// Short tier's multiplier instead of failing.
pub fn reward_multiplier(lock_period: i64) -> u64 {
    LockTier::from_lock_period(lock_period)
        .unwrap_or(LockTier::Short)
        .multiplier()
}
