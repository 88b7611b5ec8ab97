//! Tests for the split ledger
//!
//! The ledger is the boundary handed to display/persistence callers:
//! it stores the most recent plan and renders it as display lines.

use expense_split_core_rs::{split_expense, SettlementPlan, SplitLedger};

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn compute(participants: &[&str], amounts: &[i64]) -> SettlementPlan {
    split_expense(&ids(participants), amounts).unwrap()
}

#[test]
fn test_ledger_renders_recorded_plan() {
    let mut ledger = SplitLedger::new();
    ledger.record_plan(compute(&["A", "B", "C"], &[0, 0, 300]));

    assert_eq!(
        ledger.render_lines(),
        vec!["A owes C 100", "B owes C 100"]
    );
}

#[test]
fn test_ledger_keeps_only_latest_plan() {
    let mut ledger = SplitLedger::new();

    ledger.record_plan(compute(&["A", "B"], &[0, 200]));
    ledger.record_plan(compute(&["X", "Y"], &[0, 50]));

    assert_eq!(ledger.render_lines(), vec!["X owes Y 25"]);
}

#[test]
fn test_ledger_clear_discards_plan() {
    let mut ledger = SplitLedger::new();
    ledger.record_plan(compute(&["A", "B"], &[0, 200]));

    ledger.clear();

    assert!(ledger.current_plan().is_none());
    assert!(ledger.render_lines().is_empty());
}

#[test]
fn test_ledger_plan_survives_json_round_trip() {
    let mut ledger = SplitLedger::new();
    ledger.record_plan(compute(&["A", "B"], &[0, 200]));

    let plan = ledger.current_plan().unwrap();
    let json = serde_json::to_string(plan).unwrap();
    let back: SettlementPlan = serde_json::from_str(&json).unwrap();

    assert_eq!(plan, &back);
}
