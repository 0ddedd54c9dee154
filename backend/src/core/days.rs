//! Day-range management for the simulation
//!
//! The simulation operates on an inclusive range of integer days. This module
//! provides the validated range type the engine folds over. The range is a
//! plain value: iterating it produces a fresh sequence each time, so no
//! iterator state outlives a run.

use serde::{Deserialize, Serialize};

/// Inclusive range of simulated days `[start, end]`
///
/// # Example
/// ```
/// use cashflow_simulator_core_rs::DaySpan;
///
/// let span = DaySpan::new(1, 5);
/// assert_eq!(span.len(), 5);
/// assert_eq!(span.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySpan {
    /// First simulated day (inclusive)
    start: i64,
    /// Last simulated day (inclusive)
    end: i64,
}

impl DaySpan {
    /// Create a new DaySpan
    ///
    /// # Arguments
    /// * `start` - First simulated day (inclusive)
    /// * `end` - Last simulated day (inclusive)
    ///
    /// # Panics
    /// Panics if `start > end`. Callers that receive the range from outside
    /// validate first (see `SimulationConfig`).
    pub fn new(start: i64, end: i64) -> Self {
        assert!(start <= end, "start day must not be after end day");
        Self { start, end }
    }

    /// First simulated day
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Last simulated day
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of days in the span (always at least 1)
    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    /// Whether a day falls inside the span
    ///
    /// # Example
    /// ```
    /// use cashflow_simulator_core_rs::DaySpan;
    ///
    /// let span = DaySpan::new(3, 7);
    /// assert!(span.contains(3));
    /// assert!(!span.contains(8));
    /// ```
    pub fn contains(&self, day: i64) -> bool {
        self.start <= day && day <= self.end
    }
}

impl IntoIterator for DaySpan {
    type Item = i64;
    type IntoIter = std::ops::RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.start..=self.end
    }
}
