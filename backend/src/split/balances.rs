//! Balance Calculator
//!
//! Converts a list of (participant, amount-paid) pairs into signed net
//! balances relative to an equal share of the total.
//!
//! # Validation
//!
//! All input defects are detected here, before any matching runs:
//! count mismatch, duplicate identities, negative amounts, overflowing
//! or non-positive totals, and inputs with nothing to settle. None of
//! these are retryable; each is a caller-supplied input defect surfaced
//! directly as a typed error.
//!
//! # Rounding
//!
//! The equal share is `total / n` with truncating integer division. Any
//! remainder (`total % n`) is absorbed: it is never redistributed, so
//! the balances sum to `total % n` rather than exactly zero when n does
//! not divide the total. This is a documented simplification, not
//! corrected elsewhere.
//!
//! CRITICAL: All money values are i64 (minor currency units)

use std::collections::HashSet;

use thiserror::Error;

use crate::models::participant::Participant;

/// Errors that can occur while validating and computing balances
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    #[error("Participant count {participants} does not match amount count {amounts}")]
    CountMismatch { participants: usize, amounts: usize },

    #[error("Participant {id} appears more than once")]
    DuplicateParticipant { id: String },

    #[error("Participant {id} has negative amount paid: {amount}")]
    NegativeAmount { id: String, amount: i64 },

    #[error("Total amount paid overflows 64-bit minor units")]
    TotalOverflow,

    #[error("Total amount paid must be more than zero, got {total}")]
    InvalidTotal { total: i64 },

    #[error("The amounts are already split equally; nothing to settle")]
    AlreadySettled,
}

/// Balances computed for one settlement, plus the figures they derive from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceSheet {
    /// Participants with computed balances, in input order
    pub participants: Vec<Participant>,

    /// Total amount paid (i64 minor units)
    pub total_paid: i64,

    /// Equal share per participant (i64 minor units, floor division)
    pub share: i64,
}

/// Validate the input and compute each participant's net balance
///
/// `share = total / n` (floor division), `balance = paid - share`.
///
/// # Arguments
///
/// * `participants` - Participant identifiers, pairwise unique
/// * `amounts` - Amount each participant paid (i64 minor units),
///   parallel to `participants`
///
/// # Returns
///
/// - `Ok(BalanceSheet)` with participants in input order
/// - `Err(SplitError)` on the first validation failure
///
/// # Example
///
/// ```rust
/// use expense_split_core_rs::compute_balances;
///
/// let sheet = compute_balances(
///     &["alice".to_string(), "bob".to_string(), "carol".to_string()],
///     &[0, 0, 300],
/// )
/// .unwrap();
///
/// assert_eq!(sheet.share, 100);
/// assert_eq!(sheet.participants[0].balance(), -100);
/// assert_eq!(sheet.participants[2].balance(), 200);
/// ```
pub fn compute_balances(
    participants: &[String],
    amounts: &[i64],
) -> Result<BalanceSheet, SplitError> {
    if participants.len() != amounts.len() {
        return Err(SplitError::CountMismatch {
            participants: participants.len(),
            amounts: amounts.len(),
        });
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(participants.len());
    for id in participants {
        if !seen.insert(id.as_str()) {
            return Err(SplitError::DuplicateParticipant { id: id.clone() });
        }
    }

    let mut total: i64 = 0;
    for (id, &amount) in participants.iter().zip(amounts) {
        if amount < 0 {
            return Err(SplitError::NegativeAmount {
                id: id.clone(),
                amount,
            });
        }
        total = total
            .checked_add(amount)
            .ok_or(SplitError::TotalOverflow)?;
    }

    if total <= 0 {
        return Err(SplitError::InvalidTotal { total });
    }

    // Truncating division: the remainder (total % n) is absorbed.
    let share = total / participants.len() as i64;

    let computed: Vec<Participant> = participants
        .iter()
        .zip(amounts)
        .map(|(id, &paid)| Participant::new(id.clone(), paid - share))
        .collect();

    // No debtor means nothing to match. This covers the all-zero case and
    // the case where the only residue is the absorbed remainder spread
    // across non-negative balances (e.g. paid = [1, 0] -> balances [1, 0]).
    if computed.iter().all(|p| !p.is_debtor()) {
        return Err(SplitError::AlreadySettled);
    }

    Ok(BalanceSheet {
        participants: computed,
        total_paid: total,
        share,
    })
}
