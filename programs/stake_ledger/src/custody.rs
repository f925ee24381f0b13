//! Token custody.
//!
//! The ledger moves tokens only through [`TokenCustody`]. Principal and
//! reward tokens each get their own custody handle even when they share a
//! mint, so the ledger logic never depends on which vault backs which role.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

use crate::error::StakingError;

/// Moves tokens between a custody vault and one counterparty account.
pub trait TokenCustody {
    /// Pull `amount` from the counterparty into custody.
    fn pull(&self, amount: u64) -> Result<()>;

    /// Push `amount` from custody out to the counterparty.
    fn push(&self, amount: u64) -> Result<()>;
}

/// SPL token vault owned by the ledger PDA.
///
/// Pulls are signed by the counterparty's authority, pushes by the ledger
/// PDA through `signer_seeds`.
pub struct VaultCustody<'a, 'info> {
    token_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    counterparty: AccountInfo<'info>,
    counterparty_authority: AccountInfo<'info>,
    ledger: AccountInfo<'info>,
    signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> VaultCustody<'a, 'info> {
    pub fn new(
        token_program: AccountInfo<'info>,
        vault: AccountInfo<'info>,
        counterparty: AccountInfo<'info>,
        counterparty_authority: AccountInfo<'info>,
        ledger: AccountInfo<'info>,
        signer_seeds: &'a [&'a [&'a [u8]]],
    ) -> Self {
        Self {
            token_program,
            vault,
            counterparty,
            counterparty_authority,
            ledger,
            signer_seeds,
        }
    }
}

impl<'a, 'info> TokenCustody for VaultCustody<'a, 'info> {
    fn pull(&self, amount: u64) -> Result<()> {
        let cpi_accounts = Transfer {
            from: self.counterparty.clone(),
            to: self.vault.clone(),
            authority: self.counterparty_authority.clone(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.clone(), cpi_accounts);
        token::transfer(cpi_ctx, amount).map_err(|err| {
            msg!("Pull of {} tokens into custody failed: {}", amount, err);
            error!(StakingError::TransferFailed)
        })
    }

    fn push(&self, amount: u64) -> Result<()> {
        let cpi_accounts = Transfer {
            from: self.vault.clone(),
            to: self.counterparty.clone(),
            authority: self.ledger.clone(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.clone(),
            cpi_accounts,
            self.signer_seeds,
        );
        token::transfer(cpi_ctx, amount).map_err(|err| {
            msg!("Push of {} tokens out of custody failed: {}", amount, err);
            error!(StakingError::TransferFailed)
        })
    }
}
