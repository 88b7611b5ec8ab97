//! Domain models for the expense split engine

pub mod participant;
pub mod plan;
pub mod transfer;

// Re-exports
pub use participant::Participant;
pub use plan::SettlementPlan;
pub use transfer::Transfer;
