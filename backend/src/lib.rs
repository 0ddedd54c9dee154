//! Cashflow Simulator Core - Rust Engine
//!
//! Day-by-day simulation of whether a set of financial obligations (rent,
//! taxes, recurring bills) can be paid on time from a single cash balance,
//! given irregular income arrivals and a constrained set of executable days.
//!
//! # Architecture
//!
//! - **core**: Day-range management (the simulated time axis)
//! - **calendar**: Execution-day availability (business-day rule)
//! - **models**: Domain types (IncomeEvent, Obligation, RunResult, Event)
//! - **engine**: Main simulation loop and the last-safe-day policy
//! - **scenario**: Deterministic demo-scenario generation
//! - **rng**: Deterministic random number generation (scenario use only)
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (minor units)
//! 2. The engine is fully deterministic; randomness exists only behind the
//!    scenario builder's seeded RNG
//! 3. Insufficient funds is a modeled outcome, never an error
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod calendar;
pub mod core;
pub mod engine;
pub mod models;
pub mod rng;
pub mod scenario;

// Re-exports for convenience
pub use crate::core::days::DaySpan;
pub use calendar::{Calendar, EveryDay, Weekday};
pub use engine::{
    run_simulation, Simulation, SimulationConfig, SimulationError, SimulationOutcome,
};
pub use models::{
    event::{Event, EventLog},
    income::{IncomeEvent, IncomeLedger},
    obligation::{Obligation, ObligationBook, ObligationStatus},
    result::RunResult,
};
pub use rng::RngManager;
pub use scenario::{RecurringBill, Scenario, ScenarioBuilder, ScenarioConfig};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn cashflow_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::simulation::PySimulation>()?;
    Ok(())
}
