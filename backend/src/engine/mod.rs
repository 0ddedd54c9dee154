//! Simulation engine - main day loop
//!
//! Implements the per-day stepping loop and the last-safe-day execution
//! policy. See `sim.rs` for the full implementation.

pub mod sim;

// Re-export main types for convenience
pub use sim::{
    run_simulation, Simulation, SimulationConfig, SimulationError, SimulationOutcome,
};
