//! Run result accumulator
//!
//! Tallies on-time payments, failures, and the lowest balance observed across
//! a run. Updated once per simulated day by the engine; immutable once the
//! run ends.

use serde::{Deserialize, Serialize};

/// Aggregate outcome of one simulation run
///
/// `lowest_balance` reflects the minimum balance at the END of each simulated
/// day, not intra-day excursions between income application and settlement.
/// The two failure causes (deadline passed unpaid, insufficient funds at the
/// last chance) are tallied identically; the obligation's own status is the
/// only per-item record.
///
/// # Example
/// ```
/// use cashflow_simulator_core_rs::RunResult;
///
/// let result = RunResult::new();
/// assert_eq!(result.on_time, 0);
/// assert_eq!(result.lowest_balance, i64::MAX); // sentinel: no day observed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// Obligations settled on or before their due day
    pub on_time: usize,

    /// Obligations that became terminal without settling
    pub failed: usize,

    /// Minimum end-of-day balance observed; `i64::MAX` until a day completes
    pub lowest_balance: i64,
}

impl RunResult {
    /// Create a fresh accumulator with the no-day-observed sentinel
    pub fn new() -> Self {
        Self {
            on_time: 0,
            failed: 0,
            lowest_balance: i64::MAX,
        }
    }

    /// Count one on-time payment
    pub(crate) fn record_on_time(&mut self) {
        self.on_time += 1;
    }

    /// Count one failure
    pub(crate) fn record_failure(&mut self) {
        self.failed += 1;
    }

    /// Lower the observed floor with an end-of-day balance
    pub(crate) fn observe_balance(&mut self, balance: i64) {
        self.lowest_balance = self.lowest_balance.min(balance);
    }

    /// Number of obligations that became terminal during the run
    pub fn terminal_count(&self) -> usize {
        self.on_time + self.failed
    }
}

impl Default for RunResult {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_replaced_by_first_observation() {
        let mut result = RunResult::new();
        result.observe_balance(500);
        assert_eq!(result.lowest_balance, 500);
    }

    #[test]
    fn test_observe_balance_keeps_minimum() {
        let mut result = RunResult::new();
        result.observe_balance(100);
        result.observe_balance(-40);
        result.observe_balance(300);
        assert_eq!(result.lowest_balance, -40);
    }

    #[test]
    fn test_tallies() {
        let mut result = RunResult::new();
        result.record_on_time();
        result.record_on_time();
        result.record_failure();
        assert_eq!(result.on_time, 2);
        assert_eq!(result.failed, 1);
        assert_eq!(result.terminal_count(), 3);
    }

    #[test]
    fn test_serializes_round_trip() {
        let mut result = RunResult::new();
        result.record_on_time();
        result.observe_balance(12);

        let json = serde_json::to_string(&result).unwrap();
        let back: RunResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
