//! Python FFI boundary (feature `pyo3`)
//!
//! Exposes the simulation engine to the Python presentation layer. The
//! boundary is minimal: one class wrapping a run, dict-shaped inputs and
//! outputs, and rendered trace lines. All validation errors surface as
//! Python `ValueError`.

pub mod simulation;
pub mod types;

pub use simulation::PySimulation;
