//! Income Ledger Tests
//!
//! The ledger is built once by grouping events per day and answers two
//! queries: total on a day, and total in a window with an exclusive start
//! and inclusive end (the engine's lookahead shape).

use cashflow_simulator_core_rs::{IncomeEvent, IncomeLedger};

#[test]
fn test_total_on_groups_shared_days() {
    let ledger = IncomeLedger::from_events(&[
        IncomeEvent::new(10, 1000),
        IncomeEvent::new(10, 500),
        IncomeEvent::new(11, 250),
    ]);

    assert_eq!(ledger.total_on(10), 1500);
    assert_eq!(ledger.total_on(11), 250);
    assert_eq!(ledger.total_on(12), 0);
}

#[test]
fn test_total_between_excludes_start_includes_end() {
    let ledger = IncomeLedger::from_events(&[
        IncomeEvent::new(5, 100),
        IncomeEvent::new(6, 200),
        IncomeEvent::new(10, 400),
    ]);

    // Day 5 excluded, day 10 included
    assert_eq!(ledger.total_between(5, 10), 600);
    // Both endpoints outside any events
    assert_eq!(ledger.total_between(6, 9), 0);
    // Degenerate windows contribute zero
    assert_eq!(ledger.total_between(10, 10), 0);
    assert_eq!(ledger.total_between(10, 5), 0);
}

#[test]
fn test_total_between_matches_naive_sum() {
    let events = [
        IncomeEvent::new(1, 10),
        IncomeEvent::new(3, 20),
        IncomeEvent::new(3, 30),
        IncomeEvent::new(7, 40),
        IncomeEvent::new(12, 50),
    ];
    let ledger = IncomeLedger::from_events(&events);

    for after in 0..15 {
        for through in 0..15 {
            let expected: i64 = events
                .iter()
                .filter(|e| after < e.day && e.day <= through)
                .map(|e| e.amount)
                .sum();
            assert_eq!(
                ledger.total_between(after, through),
                expected,
                "window ({}, {}]",
                after,
                through
            );
        }
    }
}

#[test]
fn test_negative_days_supported() {
    let ledger = IncomeLedger::from_events(&[IncomeEvent::new(-3, 70), IncomeEvent::new(2, 30)]);
    assert_eq!(ledger.total_on(-3), 70);
    assert_eq!(ledger.total_between(-5, 2), 100);
}

#[test]
fn test_empty_ledger_contributes_zero() {
    let ledger = IncomeLedger::from_events(&[]);
    assert!(ledger.is_empty());
    assert_eq!(ledger.total_on(0), 0);
    assert_eq!(ledger.total_between(i64::MIN + 1, i64::MAX), 0);
}
