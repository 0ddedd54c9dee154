//! Execution-day availability
//!
//! Payments can only be initiated on days the calendar permits. The rule is a
//! single swappable predicate so richer calendars (public holidays, banking
//! cutoffs) can replace the default without touching the engine.
//!
//! Income arrival is NOT gated by the calendar; only payment execution is.

/// Decides whether a given day permits initiating a payment.
///
/// Implementations must be pure: the answer depends on the day argument only,
/// and repeated calls with the same day return the same result. Calendars are
/// shared freely across threads (`Send + Sync`), which pure predicates
/// satisfy trivially.
pub trait Calendar: Send + Sync {
    /// Whether a payment can be executed on `day`.
    fn is_executable(&self, day: i64) -> bool;

    /// Latest executable day `d` with `after < d <= through`, if any.
    ///
    /// This is the engine's lookahead query: given today (`after`) and a
    /// deadline (`through`), which later day is the last remaining chance to
    /// execute?
    ///
    /// # Example
    /// ```
    /// use cashflow_simulator_core_rs::{Calendar, Weekday};
    ///
    /// // Days 13 and 14 fall on the closed positions of the 7-day cycle.
    /// assert_eq!(Weekday.last_executable_within(10, 14), Some(12));
    /// assert_eq!(Weekday.last_executable_within(12, 14), None);
    /// ```
    fn last_executable_within(&self, after: i64, through: i64) -> Option<i64> {
        (after.saturating_add(1)..=through)
            .rev()
            .find(|&d| self.is_executable(d))
    }
}

/// Reference calendar: a 7-day cycle with two closed positions.
///
/// A day is executable unless `day mod 7` is 6 or 0, the positions
/// conventionally treated as non-business days. Negative days classify on the
/// same cycle (`rem_euclid`, so day -1 lands on position 6 and is closed).
///
/// # Example
/// ```
/// use cashflow_simulator_core_rs::{Calendar, Weekday};
///
/// assert!(Weekday.is_executable(5));
/// assert!(!Weekday.is_executable(6));
/// assert!(!Weekday.is_executable(7));
/// assert!(Weekday.is_executable(8));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Weekday;

impl Calendar for Weekday {
    fn is_executable(&self, day: i64) -> bool {
        let pos = day.rem_euclid(7);
        pos != 6 && pos != 0
    }
}

/// Calendar with no closed days. Useful for tests and degenerate
/// configurations where availability is not a constraint.
#[derive(Debug, Clone, Copy, Default)]
pub struct EveryDay;

impl Calendar for EveryDay {
    fn is_executable(&self, _day: i64) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_cycle() {
        // Positions 6 and 0 closed, everything else open
        for day in 1..=5 {
            assert!(Weekday.is_executable(day), "day {} should be open", day);
        }
        assert!(!Weekday.is_executable(6));
        assert!(!Weekday.is_executable(7));
        assert!(Weekday.is_executable(8));
        assert!(!Weekday.is_executable(13));
        assert!(!Weekday.is_executable(14));
    }

    #[test]
    fn test_weekday_negative_days() {
        // -1 rem_euclid 7 == 6: closed, same cycle as positive days
        assert!(!Weekday.is_executable(-1));
        assert!(!Weekday.is_executable(0));
        assert!(Weekday.is_executable(-2));
    }

    #[test]
    fn test_last_executable_within_empty_window() {
        assert_eq!(Weekday.last_executable_within(5, 5), None);
        assert_eq!(Weekday.last_executable_within(9, 3), None);
    }

    #[test]
    fn test_last_executable_within_skips_closed_days() {
        // Window (5, 7]: days 6 and 7 are both closed
        assert_eq!(Weekday.last_executable_within(5, 7), None);
        // Window (5, 8]: day 8 is open
        assert_eq!(Weekday.last_executable_within(5, 8), Some(8));
        // Window (8, 14]: 13 and 14 closed, so 12 is the last chance
        assert_eq!(Weekday.last_executable_within(8, 14), Some(12));
    }

    #[test]
    fn test_every_day_always_open() {
        for day in -10..=10 {
            assert!(EveryDay.is_executable(day));
        }
        assert_eq!(EveryDay.last_executable_within(1, 9), Some(9));
    }
}
