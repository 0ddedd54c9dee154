//! Domain models for the cashflow simulator

pub mod event;
pub mod income;
pub mod obligation;
pub mod result;

// Re-exports
pub use event::{Event, EventLog};
pub use income::{IncomeEvent, IncomeLedger};
pub use obligation::{Obligation, ObligationBook, ObligationStatus};
pub use result::RunResult;
