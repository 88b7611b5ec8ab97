//! Split Module
//!
//! Implements the core expense-splitting pipeline:
//! - Balance calculation relative to the equal share (with fail-fast
//!   input validation)
//! - Greedy debtor/creditor matching until all debts are zeroed
//! - Packaging of the emitted transfers into a settlement plan
//!
//! Data flows strictly forward: raw input → balances → transfer list.
//! No stage holds state across invocations, so concurrent callers need
//! no coordination.
//!
//! # Critical Invariants
//!
//! 1. **Fail-fast validation**: all input errors are raised before any
//!    matching runs; the matching loop itself cannot fail
//! 2. **Conservation**: every matching step preserves the sum of
//!    balances (`total % n` after calculation, 0 when n divides total)
//! 3. **Bounded output**: n participants produce at most n - 1 transfers
//!
//! # Example
//!
//! ```rust
//! use expense_split_core_rs::split_expense;
//!
//! let participants = ["alice".to_string(), "bob".to_string(), "carol".to_string()];
//! let amounts = [0, 0, 300];
//!
//! let plan = split_expense(&participants, &amounts).unwrap();
//! assert_eq!(plan.transfers().len(), 2);
//! assert_eq!(plan.transfers()[0].to_string(), "alice owes carol 100");
//! assert_eq!(plan.transfers()[1].to_string(), "bob owes carol 100");
//! ```

pub mod balances;
pub mod matcher;

// Re-export public API
pub use balances::{compute_balances, BalanceSheet, SplitError};
pub use matcher::match_balances;

use crate::models::plan::SettlementPlan;

/// Split a shared expense into a settlement plan
///
/// Runs the full pipeline: validate and compute balances, match debtors
/// against creditors, package the transfers.
///
/// # Arguments
///
/// * `participants` - Participant identifiers, pairwise unique
/// * `amounts` - Amount each participant paid (i64 minor units),
///   parallel to `participants`
///
/// # Returns
///
/// - `Ok(SettlementPlan)` with the ordered transfer list
/// - `Err(SplitError)` if the input fails validation
pub fn split_expense(
    participants: &[String],
    amounts: &[i64],
) -> Result<SettlementPlan, SplitError> {
    let sheet = compute_balances(participants, amounts)?;
    let (total_paid, share) = (sheet.total_paid, sheet.share);

    let transfers = match_balances(sheet.participants);

    Ok(SettlementPlan::new(
        transfers,
        participants.len(),
        total_paid,
        share,
    ))
}
