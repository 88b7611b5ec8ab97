//! Participant model
//!
//! Represents one member of a group expense during a single settlement
//! computation. Each participant has:
//! - An opaque identity (unique within one computation)
//! - A signed balance relative to the equal share (i64 minor units)
//!
//! Participants live only for the duration of one computation; there is
//! no persistent participant store in this crate. Reconciling identities
//! against a long-lived person registry is the caller's responsibility.
//!
//! CRITICAL: All money values are i64 (minor currency units)

use serde::{Deserialize, Serialize};

/// A participant in a group expense split
///
/// Balance convention:
/// - Negative = owes money (paid less than the equal share)
/// - Positive = is owed money (paid more than the equal share)
/// - Zero = settled
///
/// # Example
/// ```
/// use expense_split_core_rs::Participant;
///
/// let p = Participant::new("alice".to_string(), -10_000);
/// assert!(p.is_debtor());
/// assert_eq!(p.balance(), -10_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Opaque participant identifier (e.g., "alice")
    id: String,

    /// Balance relative to the equal share (i64 minor units)
    balance: i64,
}

impl Participant {
    /// Create a participant with an already-computed balance
    pub fn new(id: String, balance: i64) -> Self {
        Self { id, balance }
    }

    /// Participant identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current balance (minor units)
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// True if this participant owes money
    pub fn is_debtor(&self) -> bool {
        self.balance < 0
    }

    /// True if this participant is owed money
    pub fn is_creditor(&self) -> bool {
        self.balance > 0
    }

    /// True if this participant's balance is exactly zero
    pub fn is_settled(&self) -> bool {
        self.balance == 0
    }

    /// Receive `amount` toward this participant's debt
    ///
    /// Moves a debtor's balance toward zero. `amount` must not exceed the
    /// outstanding debt; the balance never overshoots past zero.
    pub(crate) fn receive(&mut self, amount: i64) {
        debug_assert!(amount > 0, "receive amount must be positive");
        debug_assert!(self.balance + amount <= 0, "receive must not overshoot zero");
        self.balance += amount;
    }

    /// Pay out `amount` of what this participant is owed
    ///
    /// Moves a creditor's balance toward zero. `amount` must not exceed the
    /// outstanding credit; the balance never overshoots past zero.
    pub(crate) fn pay_out(&mut self, amount: i64) {
        debug_assert!(amount > 0, "pay_out amount must be positive");
        debug_assert!(self.balance - amount >= 0, "pay_out must not overshoot zero");
        self.balance -= amount;
    }
}
