//! State structures for the stake ledger.
//!
//! This module defines all account structures used to store ledger state,
//! plus the lock tier table.

pub mod ledger_config;
pub mod lock_tier;
pub mod stake_record;

pub use ledger_config::*;
pub use lock_tier::*;
pub use stake_record::*;

use anchor_lang::prelude::*;

/// Runs `op` against the ledger and a stake record, restoring both to their
/// prior values if it fails.
///
/// `op` must write its final state before issuing any transfer, so a
/// transfer always observes the post-operation accounts.
pub fn transact<T, F>(ledger: &mut LedgerConfig, record: &mut StakeRecord, op: F) -> Result<T>
where
    F: FnOnce(&mut LedgerConfig, &mut StakeRecord) -> Result<T>,
{
    let ledger_before = ledger.clone();
    let record_before = record.clone();

    op(&mut *ledger, &mut *record).map_err(|err| {
        *ledger = ledger_before;
        *record = record_before;
        err
    })
}
