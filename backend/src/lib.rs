//! Expense Split Core - Rust Engine
//!
//! Computes the minimal set of pairwise transfers that settles a shared
//! expense paid unevenly by a group of participants.
//!
//! # Architecture
//!
//! - **models**: Domain types (Participant, Transfer, SettlementPlan)
//! - **split**: Balance calculator and greedy settlement matcher
//! - **ledger**: In-memory holder of the most recent settlement plan
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (minor currency units, e.g. cents)
//! 2. Balances sum to `total % n` after calculation (0 when n divides the
//!    total) and every matching step preserves that sum
//! 3. Every emitted transfer has a strictly positive amount and distinct
//!    debtor/creditor
//! 4. n participants never produce more than n - 1 transfers

// Module declarations
pub mod ledger;
pub mod models;
pub mod split;

// Re-exports for convenience
pub use ledger::SplitLedger;
pub use models::{
    participant::Participant,
    plan::SettlementPlan,
    transfer::Transfer,
};
pub use split::{compute_balances, match_balances, split_expense, SplitError};
