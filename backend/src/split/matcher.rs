//! Greedy Settlement Matcher
//!
//! Repeatedly pairs the participant who owes the most against the
//! participant who is owed the most, transferring the smaller of the two
//! magnitudes, until no debtor remains.
//!
//! # Algorithm
//!
//! Each iteration:
//! 1. Stable-sort the working vector by ascending balance (equal
//!    balances keep input order - the fixed tie-break that makes the
//!    output deterministic)
//! 2. Pair the front (largest debtor) with the back (largest creditor)
//! 3. Transfer `min(-debtor.balance, creditor.balance)`
//! 4. Remove whichever side reached exactly zero
//!
//! The smaller of the two magnitudes is fully zeroed every iteration,
//! so the loop runs at most n - 1 times and emits at most n - 1
//! transfers (the classical minimum-transaction settlement bound).
//!
//! # Termination with an absorbed remainder
//!
//! Balances sum to `total % n` after calculation. The loop runs while
//! both a debtor and a creditor exist; once debtors are exhausted, any
//! leftover positive residue equals the absorbed remainder and stays
//! with the creditors. No transfer is ever emitted for it.
//!
//! # Complexity
//!
//! O(n² log n) with the re-sort-per-iteration loop, which is fine for
//! the handful of participants a shared expense has. A dual-heap
//! structure (max-heap of creditors, max-heap of debtor magnitudes)
//! would bring this to O(n log n) with identical output under the same
//! tie-break; not needed at current scale.

use crate::models::participant::Participant;
use crate::models::transfer::Transfer;

/// Match debtors against creditors, emitting settlement transfers
///
/// Pure function over an owned working vector: participants are
/// addressed by index, mutated in place, and removed once settled.
/// Cannot fail; all input defects are caught by
/// [`compute_balances`](crate::split::balances::compute_balances)
/// beforehand.
///
/// Participants whose balance is already zero take no part in matching.
///
/// # Example
///
/// ```rust
/// use expense_split_core_rs::{match_balances, Participant};
///
/// let balances = vec![
///     Participant::new("alice".to_string(), -100),
///     Participant::new("bob".to_string(), -100),
///     Participant::new("carol".to_string(), 200),
/// ];
///
/// let transfers = match_balances(balances);
/// assert_eq!(transfers.len(), 2);
/// assert_eq!(transfers[0].to_string(), "alice owes carol 100");
/// assert_eq!(transfers[1].to_string(), "bob owes carol 100");
/// ```
pub fn match_balances(participants: Vec<Participant>) -> Vec<Transfer> {
    let mut working: Vec<Participant> =
        participants.into_iter().filter(|p| !p.is_settled()).collect();
    let mut transfers = Vec::new();

    while working.iter().any(Participant::is_debtor)
        && working.iter().any(Participant::is_creditor)
    {
        // Stable sort: equal balances keep their input order
        working.sort_by_key(Participant::balance);

        let debtor_idx = 0;
        let creditor_idx = working.len() - 1;

        let owed = -working[debtor_idx].balance();
        let available = working[creditor_idx].balance();
        let amount = owed.min(available);

        working[debtor_idx].receive(amount);
        working[creditor_idx].pay_out(amount);

        transfers.push(Transfer::new(
            working[debtor_idx].id().to_string(),
            working[creditor_idx].id().to_string(),
            amount,
        ));

        tracing::debug!(
            debtor = working[debtor_idx].id(),
            creditor = working[creditor_idx].id(),
            amount,
            remaining = working.len(),
            "matched settlement pair"
        );

        // Remove in back-to-front index order so the front index stays valid
        if working[creditor_idx].is_settled() {
            working.remove(creditor_idx);
        }
        if working[debtor_idx].is_settled() {
            working.remove(debtor_idx);
        }
    }

    // Only the absorbed remainder may remain, and only on the creditor side
    debug_assert!(working.iter().all(|p| !p.is_debtor()));

    transfers
}
