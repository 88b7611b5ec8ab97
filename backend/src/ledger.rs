//! Split Ledger
//!
//! In-memory holder of the most recent settlement plan, for a caller
//! (CLI, UI) to render or persist. Exactly one plan is retained;
//! recording a new one replaces it. Settlement history is out of scope.

use crate::models::plan::SettlementPlan;
use crate::models::transfer::Transfer;

/// Holds the result of the most recent expense split
///
/// # Example
/// ```
/// use expense_split_core_rs::{split_expense, SplitLedger};
///
/// let plan = split_expense(
///     &["alice".to_string(), "carol".to_string()],
///     &[0, 200],
/// )
/// .unwrap();
///
/// let mut ledger = SplitLedger::new();
/// ledger.record_plan(plan);
///
/// assert_eq!(ledger.render_lines(), vec!["alice owes carol 100"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SplitLedger {
    /// Most recent plan, if any
    current: Option<SettlementPlan>,
}

impl SplitLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a plan, replacing any previous one
    pub fn record_plan(&mut self, plan: SettlementPlan) {
        self.current = Some(plan);
    }

    /// The most recent plan, if one has been recorded
    pub fn current_plan(&self) -> Option<&SettlementPlan> {
        self.current.as_ref()
    }

    /// Transfers of the most recent plan (empty if none recorded)
    pub fn transfers(&self) -> &[Transfer] {
        self.current
            .as_ref()
            .map(|plan| plan.transfers())
            .unwrap_or(&[])
    }

    /// Discard the recorded plan
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Render the recorded plan as one display line per transfer
    pub fn render_lines(&self) -> Vec<String> {
        self.transfers()
            .iter()
            .map(|transfer| transfer.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> SettlementPlan {
        let transfers = vec![
            Transfer::new("alice".to_string(), "carol".to_string(), 100),
            Transfer::new("bob".to_string(), "carol".to_string(), 100),
        ];
        SettlementPlan::new(transfers, 3, 300, 100)
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = SplitLedger::new();

        assert!(ledger.current_plan().is_none());
        assert!(ledger.transfers().is_empty());
        assert!(ledger.render_lines().is_empty());
    }

    #[test]
    fn test_record_and_read_back() {
        let mut ledger = SplitLedger::new();
        let plan = sample_plan();
        let plan_id = plan.id().to_string();

        ledger.record_plan(plan);

        assert_eq!(ledger.current_plan().unwrap().id(), plan_id);
        assert_eq!(ledger.transfers().len(), 2);
    }

    #[test]
    fn test_record_replaces_previous_plan() {
        let mut ledger = SplitLedger::new();
        ledger.record_plan(sample_plan());

        let replacement = SettlementPlan::new(
            vec![Transfer::new("x".to_string(), "y".to_string(), 1)],
            2,
            2,
            1,
        );
        let replacement_id = replacement.id().to_string();
        ledger.record_plan(replacement);

        assert_eq!(ledger.current_plan().unwrap().id(), replacement_id);
        assert_eq!(ledger.transfers().len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut ledger = SplitLedger::new();
        ledger.record_plan(sample_plan());

        ledger.clear();

        assert!(ledger.current_plan().is_none());
    }

    #[test]
    fn test_render_lines() {
        let mut ledger = SplitLedger::new();
        ledger.record_plan(sample_plan());

        assert_eq!(
            ledger.render_lines(),
            vec!["alice owes carol 100", "bob owes carol 100"]
        );
    }
}
