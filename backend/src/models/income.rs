//! Income model
//!
//! An income event is one credit landing on the balance on a specific day.
//! Multiple events may share a day; their amounts sum. The ledger groups the
//! events by day once at construction and is read-only thereafter.
//!
//! CRITICAL: All money values are i64 (minor units)

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Included};

use serde::{Deserialize, Serialize};

/// One credit arriving on the balance on a specific day
///
/// # Example
/// ```
/// use cashflow_simulator_core_rs::IncomeEvent;
///
/// let salary = IncomeEvent::new(25, 220_000); // day 25, 2200.00 in minor units
/// assert_eq!(salary.day, 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeEvent {
    /// Day the credit lands
    pub day: i64,

    /// Credit amount (minor units, non-negative)
    pub amount: i64,
}

impl IncomeEvent {
    /// Create a new income event
    pub fn new(day: i64, amount: i64) -> Self {
        Self { day, amount }
    }
}

/// Day-indexed aggregation of income events
///
/// Built once from the input income list by grouping; read-only thereafter.
/// Absent days simply contribute zero.
///
/// # Example
/// ```
/// use cashflow_simulator_core_rs::{IncomeEvent, IncomeLedger};
///
/// let ledger = IncomeLedger::from_events(&[
///     IncomeEvent::new(10, 500),
///     IncomeEvent::new(10, 250),
///     IncomeEvent::new(20, 1000),
/// ]);
///
/// assert_eq!(ledger.total_on(10), 750);
/// assert_eq!(ledger.total_on(11), 0);
/// assert_eq!(ledger.total_between(10, 20), 1000); // exclusive start
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomeLedger {
    /// Total credit per day (days with no income are absent)
    by_day: BTreeMap<i64, i64>,
}

impl IncomeLedger {
    /// Build a ledger by grouping events by day
    pub fn from_events(events: &[IncomeEvent]) -> Self {
        let mut by_day = BTreeMap::new();
        for event in events {
            *by_day.entry(event.day).or_insert(0) += event.amount;
        }
        Self { by_day }
    }

    /// Total credit arriving on `day`; zero if none
    pub fn total_on(&self, day: i64) -> i64 {
        self.by_day.get(&day).copied().unwrap_or(0)
    }

    /// Total credit arriving in the window `after < day <= through`
    ///
    /// Used by the engine's lookahead: income known to arrive between today
    /// (exclusive) and the last remaining executable day (inclusive).
    pub fn total_between(&self, after: i64, through: i64) -> i64 {
        if through <= after {
            return 0;
        }
        self.by_day
            .range((Excluded(after), Included(through)))
            .map(|(_, amount)| amount)
            .sum()
    }

    /// Whether the ledger holds any income at all
    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_sums_same_day() {
        let ledger = IncomeLedger::from_events(&[
            IncomeEvent::new(5, 100),
            IncomeEvent::new(5, 200),
        ]);
        assert_eq!(ledger.total_on(5), 300);
    }

    #[test]
    fn test_total_between_bounds() {
        let ledger = IncomeLedger::from_events(&[
            IncomeEvent::new(10, 100),
            IncomeEvent::new(12, 200),
            IncomeEvent::new(15, 400),
        ]);

        // Start exclusive, end inclusive
        assert_eq!(ledger.total_between(10, 15), 600);
        assert_eq!(ledger.total_between(9, 12), 300);
        assert_eq!(ledger.total_between(12, 12), 0);
        assert_eq!(ledger.total_between(15, 10), 0);
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = IncomeLedger::from_events(&[]);
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_on(1), 0);
        assert_eq!(ledger.total_between(0, 100), 0);
    }

    #[test]
    fn test_zero_amount_event_accepted() {
        let ledger = IncomeLedger::from_events(&[IncomeEvent::new(3, 0)]);
        assert_eq!(ledger.total_on(3), 0);
    }
}
