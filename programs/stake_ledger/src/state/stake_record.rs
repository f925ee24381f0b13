use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::state::LockTier;

/// Per-account stake. `amount == 0` means the record is empty and every
/// time/tier field is zero.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct StakeRecord {
    pub owner: Pubkey,
    pub ledger: Pubkey,

    pub amount: u64,
    pub start_time: i64,
    pub last_claim_time: i64,
    pub lock_period: i64,
    pub reward_multiplier: u64,

    /// Lifetime total, kept across full withdrawals.
    pub total_rewards_claimed: u64,

    pub bump: u8,
}

impl StakeRecord {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 8 + 8 + 8 + 8 + 1;

    pub fn is_active(&self) -> bool {
        self.amount > 0
    }

    pub fn unlock_time(&self) -> Result<i64> {
        self.start_time
            .checked_add(self.lock_period)
            .ok_or_else(|| error!(StakingError::MathOverflow))
    }

    pub fn is_lock_expired(&self, now: i64) -> Result<bool> {
        Ok(now >= self.unlock_time()?)
    }

    /// Sets the lock period and the multiplier bound to it together.
    pub fn set_lock(&mut self, tier: LockTier) {
        self.lock_period = tier.lock_period();
        self.reward_multiplier = tier.multiplier();
    }

    /// Zeroes the stake fields, keeping identity and lifetime counters.
    pub fn clear(&mut self) {
        self.amount = 0;
        self.start_time = 0;
        self.last_claim_time = 0;
        self.lock_period = 0;
        self.reward_multiplier = 0;
    }
}
