//! Type conversion utilities for the FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict, PyList).

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::engine::SimulationConfig;
use crate::models::income::IncomeEvent;
use crate::models::obligation::{Obligation, ObligationStatus};
use crate::models::result::RunResult;

/// Extract a required field from a Python dict with a clear error message.
pub(crate) fn extract_required<'py, T: FromPyObject<'py>>(
    dict: &Bound<'py, PyDict>,
    key: &str,
) -> PyResult<T> {
    dict.get_item(key)?
        .ok_or_else(|| PyValueError::new_err(format!("missing required field '{}'", key)))?
        .extract()
}

/// Extract an optional field from a Python dict.
pub(crate) fn extract_optional<'py, T: FromPyObject<'py>>(
    dict: &Bound<'py, PyDict>,
    key: &str,
) -> PyResult<Option<T>> {
    match dict.get_item(key)? {
        Some(value) => Ok(Some(value.extract()?)),
        None => Ok(None),
    }
}

/// Parse the scalar run configuration from the top-level config dict.
///
/// Expected shape:
/// ```python
/// {"start_balance": 0, "start_day": 1, "end_day": 180, ...}
/// ```
/// `start_balance` defaults to 0 when omitted.
pub(crate) fn parse_simulation_config(dict: &Bound<'_, PyDict>) -> PyResult<SimulationConfig> {
    Ok(SimulationConfig {
        start_balance: extract_optional(dict, "start_balance")?.unwrap_or(0),
        start_day: extract_required(dict, "start_day")?,
        end_day: extract_required(dict, "end_day")?,
    })
}

/// Parse the income list: `[{"day": 10, "amount": 1000}, ...]`
pub(crate) fn parse_income(dict: &Bound<'_, PyDict>) -> PyResult<Vec<IncomeEvent>> {
    let mut income = Vec::new();
    if let Some(list) = dict.get_item("income")? {
        let list = list.downcast::<PyList>()?;
        for item in list.iter() {
            let item = item.downcast::<PyDict>()?;
            income.push(IncomeEvent::new(
                extract_required(item, "day")?,
                extract_required(item, "amount")?,
            ));
        }
    }
    Ok(income)
}

/// Parse the obligation list: `[{"name": "rent", "due_day": 30, "amount": 900}, ...]`
pub(crate) fn parse_obligations(dict: &Bound<'_, PyDict>) -> PyResult<Vec<Obligation>> {
    let mut obligations = Vec::new();
    if let Some(list) = dict.get_item("obligations")? {
        let list = list.downcast::<PyList>()?;
        for item in list.iter() {
            let item = item.downcast::<PyDict>()?;
            let name: String = extract_required(item, "name")?;
            obligations.push(Obligation::new(
                name,
                extract_required(item, "due_day")?,
                extract_required(item, "amount")?,
            ));
        }
    }
    Ok(obligations)
}

/// Convert one obligation's final state to a Python dict.
pub(crate) fn obligation_to_py<'py>(
    py: Python<'py>,
    ob: &Obligation,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("name", ob.name())?;
    dict.set_item("due_day", ob.due_day())?;
    dict.set_item("amount", ob.amount())?;
    let status = match ob.status() {
        ObligationStatus::Pending => "pending",
        ObligationStatus::Paid { .. } => "paid",
        ObligationStatus::Failed => "failed",
    };
    dict.set_item("status", status)?;
    dict.set_item("paid_day", ob.paid_day())?;
    Ok(dict)
}

/// Convert the run outcome (result + obligation states) to a Python dict.
pub(crate) fn outcome_to_py(
    py: Python<'_>,
    result: &RunResult,
    obligations: &[Obligation],
) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("on_time", result.on_time)?;
    dict.set_item("failed", result.failed)?;
    dict.set_item("lowest_balance", result.lowest_balance)?;

    let list = PyList::empty_bound(py);
    for ob in obligations {
        list.append(obligation_to_py(py, ob)?)?;
    }
    dict.set_item("obligations", list)?;

    Ok(dict.into())
}
