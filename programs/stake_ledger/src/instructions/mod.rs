//! Instruction handlers for the stake ledger.
//!
//! Each module pairs an Anchor accounts context and handler with the pure
//! ledger transition it drives.

pub mod admin;
pub mod claim_rewards;
pub mod deposit;
pub mod extend_lock;
pub mod fund_reward_vault;
pub mod initialize;
pub mod query;
pub mod withdraw;

pub use admin::*;
pub use claim_rewards::*;
pub use deposit::*;
pub use extend_lock::*;
pub use fund_reward_vault::*;
pub use initialize::*;
pub use query::*;
pub use withdraw::*;
