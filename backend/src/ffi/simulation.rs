//! PyO3 wrapper for the simulation engine
//!
//! This module provides the Python interface to the Rust engine.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::types::{outcome_to_py, parse_income, parse_obligations, parse_simulation_config};
use crate::engine::Simulation as RustSimulation;

/// Python wrapper for the Rust simulation
///
/// # Example (from Python)
///
/// ```python
/// from cashflow_simulator_core_rs import Simulation
///
/// sim = Simulation.new({
///     "start_balance": 0,
///     "start_day": 1,
///     "end_day": 15,
///     "income": [{"day": 10, "amount": 1000}],
///     "obligations": [{"name": "rent", "due_day": 12, "amount": 900}],
/// })
///
/// outcome = sim.run()
/// print(outcome["on_time"], outcome["lowest_balance"])
/// for line in sim.trace():
///     print(line)
/// ```
#[pyclass(name = "Simulation")]
pub struct PySimulation {
    inner: RustSimulation,
}

#[pymethods]
impl PySimulation {
    /// Create a simulation from a configuration dict
    ///
    /// # Arguments
    ///
    /// * `config` - Dict with `start_day`, `end_day`, optional
    ///   `start_balance` (default 0), optional `income` and `obligations`
    ///   lists
    ///
    /// # Errors
    ///
    /// Raises ValueError if required fields are missing, type conversions
    /// fail, the day range is inverted, or any amount is negative.
    #[staticmethod]
    fn new(config: &Bound<'_, PyDict>) -> PyResult<Self> {
        let rust_config = parse_simulation_config(config)?;
        let income = parse_income(config)?;
        let obligations = parse_obligations(config)?;

        let inner = RustSimulation::new(rust_config, income, obligations)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        Ok(PySimulation { inner })
    }

    /// Execute the run and return the outcome
    ///
    /// Returns a dict with `on_time`, `failed`, `lowest_balance`, and
    /// `obligations` (final settlement state per obligation, input order).
    /// Calling `run` again returns the same finalized outcome.
    fn run(&mut self, py: Python<'_>) -> PyResult<Py<PyDict>> {
        self.inner.run();
        outcome_to_py(py, &self.inner.result(), self.inner.obligations())
    }

    /// Rendered trace lines for every state-changing event so far
    fn trace(&self) -> Vec<String> {
        self.inner
            .event_log()
            .events()
            .iter()
            .map(|e| e.to_string())
            .collect()
    }

    /// Current balance (final balance once the run has completed)
    fn balance(&self) -> i64 {
        self.inner.balance()
    }

    /// Whether the run has completed
    fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}
