//! Transfer model
//!
//! Represents a single settlement payment instruction between two
//! participants: who pays, who receives, and how much.
//!
//! CRITICAL: All money values are i64 (minor currency units)

use serde::{Deserialize, Serialize};

/// A single payment instruction produced by the settlement matcher
///
/// Immutable once constructed. Invariants enforced at construction:
/// - `amount` is strictly positive
/// - `debtor_id != creditor_id`
///
/// # Example
/// ```
/// use expense_split_core_rs::Transfer;
///
/// let t = Transfer::new("alice".to_string(), "carol".to_string(), 10_000);
/// assert_eq!(t.debtor_id(), "alice");
/// assert_eq!(t.creditor_id(), "carol");
/// assert_eq!(t.amount(), 10_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Participant who pays
    debtor_id: String,

    /// Participant who receives
    creditor_id: String,

    /// Payment amount (i64 minor units, always > 0)
    amount: i64,
}

impl Transfer {
    /// Create a new transfer
    ///
    /// # Panics
    /// Panics if `amount <= 0` or `debtor_id == creditor_id`. The matcher
    /// never produces either state; hitting one indicates a logic error.
    pub fn new(debtor_id: String, creditor_id: String, amount: i64) -> Self {
        assert!(amount > 0, "transfer amount must be positive");
        assert!(
            debtor_id != creditor_id,
            "transfer endpoints must be distinct"
        );

        Self {
            debtor_id,
            creditor_id,
            amount,
        }
    }

    /// Participant who pays
    pub fn debtor_id(&self) -> &str {
        &self.debtor_id
    }

    /// Participant who receives
    pub fn creditor_id(&self) -> &str {
        &self.creditor_id
    }

    /// Payment amount (minor units)
    pub fn amount(&self) -> i64 {
        self.amount
    }
}

impl std::fmt::Display for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} owes {} {}",
            self.debtor_id, self.creditor_id, self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_new() {
        let t = Transfer::new("alice".to_string(), "bob".to_string(), 500);

        assert_eq!(t.debtor_id(), "alice");
        assert_eq!(t.creditor_id(), "bob");
        assert_eq!(t.amount(), 500);
    }

    #[test]
    #[should_panic(expected = "transfer amount must be positive")]
    fn test_transfer_rejects_zero_amount() {
        Transfer::new("alice".to_string(), "bob".to_string(), 0);
    }

    #[test]
    #[should_panic(expected = "transfer endpoints must be distinct")]
    fn test_transfer_rejects_self_payment() {
        Transfer::new("alice".to_string(), "alice".to_string(), 100);
    }

    #[test]
    fn test_transfer_display() {
        let t = Transfer::new("alice".to_string(), "carol".to_string(), 10_000);

        assert_eq!(t.to_string(), "alice owes carol 10000");
    }

    #[test]
    fn test_transfer_json_round_trip() {
        let t = Transfer::new("alice".to_string(), "bob".to_string(), 750);

        let json = serde_json::to_string(&t).unwrap();
        let back: Transfer = serde_json::from_str(&json).unwrap();

        assert_eq!(t, back);
    }
}
