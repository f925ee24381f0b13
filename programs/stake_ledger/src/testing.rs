//! In-memory custody and fixtures for exercising the ledger without a validator.

use std::cell::Cell;

use anchor_lang::prelude::*;

use crate::custody::TokenCustody;
use crate::error::StakingError;
use crate::state::{LedgerConfig, StakeRecord};

pub const T0: i64 = 1_700_000_000;
pub const MIN_STAKE: u64 = 100;
pub const MAX_STAKE: u64 = 1_000_000_000;

/// Token balances on both sides of a vault. Transfers fail when the paying
/// side is short or when `failing` is set.
#[derive(Debug, Default)]
pub struct MockCustody {
    pub vault: Cell<u64>,
    pub holder: Cell<u64>,
    pub failing: Cell<bool>,
    pub pushes: Cell<u32>,
}

impl MockCustody {
    pub fn funded(vault: u64, holder: u64) -> Self {
        Self {
            vault: Cell::new(vault),
            holder: Cell::new(holder),
            ..Default::default()
        }
    }

    pub fn fail(&self) {
        self.failing.set(true);
    }
}

impl TokenCustody for MockCustody {
    fn pull(&self, amount: u64) -> Result<()> {
        if self.failing.get() || self.holder.get() < amount {
            return err!(StakingError::TransferFailed);
        }
        self.holder.set(self.holder.get() - amount);
        self.vault.set(self.vault.get() + amount);
        Ok(())
    }

    fn push(&self, amount: u64) -> Result<()> {
        if self.failing.get() || self.vault.get() < amount {
            return err!(StakingError::TransferFailed);
        }
        self.vault.set(self.vault.get() - amount);
        self.holder.set(self.holder.get() + amount);
        self.pushes.set(self.pushes.get() + 1);
        Ok(())
    }
}

pub fn ledger() -> LedgerConfig {
    LedgerConfig {
        authority: Pubkey::new_unique(),
        principal_mint: Pubkey::new_unique(),
        reward_mint: Pubkey::new_unique(),
        base_reward_rate: 5,
        min_stake: MIN_STAKE,
        max_stake: MAX_STAKE,
        created_at: T0,
        last_updated: T0,
        ..Default::default()
    }
}

pub fn record() -> StakeRecord {
    StakeRecord {
        owner: Pubkey::new_unique(),
        ..Default::default()
    }
}

/// Asserts that `result` failed with `expected`.
pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: StakingError) {
    let expected: anchor_lang::error::Error = expected.into();
    assert_eq!(result.unwrap_err(), expected);
}
