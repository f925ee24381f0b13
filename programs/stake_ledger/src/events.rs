//! Events emitted for off-chain indexers.

use anchor_lang::prelude::*;

#[event]
pub struct Staked {
    pub owner: Pubkey,
    pub amount: u64,
    pub total_amount: u64,
    pub lock_period: i64,
    pub timestamp: i64,
}

#[event]
pub struct Unstaked {
    pub owner: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct RewardsClaimed {
    pub owner: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct LockExtended {
    pub owner: Pubkey,
    pub previous_lock_period: i64,
    pub lock_period: i64,
    pub reward_multiplier: u64,
}

#[event]
pub struct RewardRateUpdated {
    pub authority: Pubkey,
    pub previous_rate: u8,
    pub rate: u8,
}

#[event]
pub struct StakeLimitsUpdated {
    pub authority: Pubkey,
    pub min_stake: u64,
    pub max_stake: u64,
}

#[event]
pub struct AuthorityTransferred {
    pub previous_authority: Pubkey,
    pub authority: Pubkey,
}

#[event]
pub struct EmergencyWithdrawal {
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RewardVaultFunded {
    pub funder: Pubkey,
    pub amount: u64,
}
