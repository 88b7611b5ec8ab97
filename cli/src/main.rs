//! Expense Split CLI
//!
//! Thin front end over the split engine: parses participant and amount
//! lists, computes the settlement plan, and prints who owes who how
//! much, as text lines or JSON.
//!
//! # Usage
//!
//! ```text
//! expense-split --person Mary Jesus Judas --amount 1000 9000 0
//! expense-split --person A B C --amount 0 0 300 --json
//! ```
//!
//! Amounts are integers in minor currency units (e.g. cents).

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use expense_split_core_rs::{split_expense, SplitLedger};

/// Split a group payment into a list of who owes who how much
#[derive(Debug, Parser)]
#[command(name = "expense-split", version, about)]
struct Args {
    /// Participant names, one per person, pairwise unique
    #[arg(long = "person", num_args = 1.., required = true)]
    persons: Vec<String>,

    /// Amount each person paid, in minor units (same order as --person)
    #[arg(long = "amount", num_args = 1.., required = true, allow_negative_numbers = true)]
    amounts: Vec<i64>,

    /// Emit the full settlement plan as JSON instead of text lines
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!(
        persons = args.persons.len(),
        amounts = args.amounts.len(),
        "splitting group payment"
    );

    let plan = split_expense(&args.persons, &args.amounts)
        .context("could not split the group payment")?;

    tracing::info!(
        plan_id = plan.id(),
        transfers = plan.transfers().len(),
        settled_value = plan.settled_value(),
        "settlement plan computed"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        let mut ledger = SplitLedger::new();
        ledger.record_plan(plan);
        for line in ledger.render_lines() {
            println!("{line}");
        }
    }

    Ok(())
}
