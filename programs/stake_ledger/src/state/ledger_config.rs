use anchor_lang::prelude::*;

use crate::constants::MAX_REWARD_RATE;
use crate::error::StakingError;

/// Global ledger state: custody accounts, controller and reward configuration.
#[account]
#[derive(Default, Debug)]
pub struct LedgerConfig {
    pub authority: Pubkey,
    pub principal_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub principal_vault: Pubkey,
    pub reward_vault: Pubkey,

    /// Annual base rate in whole percent.
    pub base_reward_rate: u8,

    pub min_stake: u64,
    pub max_stake: u64,

    pub total_staked: u64,
    pub staker_count: u64,
    pub total_rewards_paid: u64,

    pub created_at: i64,
    pub last_updated: i64,

    pub principal_vault_bump: u8,
    pub reward_vault_bump: u8,
    pub bump: u8,
}

impl LedgerConfig {
    pub const LEN: usize = 8
        + (32 * 5)
        + 1
        + (8 * 2)
        + (8 * 3)
        + (8 * 2)
        + 3;

    pub fn ensure_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.authority, *caller, StakingError::Unauthorized);
        Ok(())
    }

    pub fn validate_rate(rate: u8) -> Result<()> {
        require!(rate > 0 && rate <= MAX_REWARD_RATE, StakingError::InvalidRate);
        Ok(())
    }

    pub fn validate_limits(min_stake: u64, max_stake: u64) -> Result<()> {
        require!(
            min_stake > 0 && min_stake <= max_stake,
            StakingError::InvalidStakeLimits
        );
        Ok(())
    }

    pub fn accepts_deposit(&self, amount: u64) -> bool {
        (self.min_stake..=self.max_stake).contains(&amount)
    }
}
