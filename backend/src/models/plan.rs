//! Settlement plan model
//!
//! Packages the output of one settlement computation: the ordered
//! transfer list plus the inputs' summary figures. The plan is what the
//! ledger stores and what callers render or persist.

use serde::{Deserialize, Serialize};

use crate::models::transfer::Transfer;

/// The complete result of one settlement computation
///
/// # Example
/// ```
/// use expense_split_core_rs::split_expense;
///
/// let plan = split_expense(
///     &["alice".to_string(), "bob".to_string()],
///     &[0, 200],
/// )
/// .unwrap();
///
/// assert_eq!(plan.participant_count(), 2);
/// assert_eq!(plan.total_paid(), 200);
/// assert_eq!(plan.share(), 100);
/// assert_eq!(plan.transfers().len(), 1);
/// assert!(!plan.id().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementPlan {
    /// Unique plan identifier (UUID)
    id: String,

    /// Settlement transfers, in emission order
    transfers: Vec<Transfer>,

    /// Number of participants in the split
    participant_count: usize,

    /// Total amount paid across all participants (i64 minor units)
    total_paid: i64,

    /// Equal share per participant, floor division (i64 minor units)
    share: i64,
}

impl SettlementPlan {
    /// Package a matcher result into a plan
    pub fn new(
        transfers: Vec<Transfer>,
        participant_count: usize,
        total_paid: i64,
        share: i64,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            transfers,
            participant_count,
            total_paid,
            share,
        }
    }

    /// Unique plan identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Settlement transfers, in emission order
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    /// Number of participants in the split
    pub fn participant_count(&self) -> usize {
        self.participant_count
    }

    /// Total amount paid across all participants (minor units)
    pub fn total_paid(&self) -> i64 {
        self.total_paid
    }

    /// Equal share per participant (minor units, floor division)
    pub fn share(&self) -> i64 {
        self.share
    }

    /// Total value moved by the plan's transfers (minor units)
    pub fn settled_value(&self) -> i64 {
        self.transfers.iter().map(Transfer::amount).sum()
    }
}
