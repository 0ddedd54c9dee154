//! Event logging for simulation tracing and auditing.
//!
//! The Event enum captures every state-changing step of a run: income
//! credits, payments, failures. Events enable:
//! - Tracing (the verbose console output of the demo runner)
//! - Debugging (understand what happened and when)
//! - Auditing (verify settlement decisions against inputs)
//!
//! Logging is a pure side channel: the engine records events but never reads
//! them back, so the log cannot affect outcomes.
//!
//! There is deliberately a single failure variant. The aggregate result does
//! not distinguish WHY an obligation failed (deadline passed vs. insufficient
//! funds at the last chance), and neither does the event stream.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One state-changing step of a simulation run.
///
/// All events carry the day they occurred on. Events are logged in the order
/// they occur within a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Income landed on the balance (never gated by the calendar)
    IncomeCredited {
        day: i64,
        amount: i64,
        balance: i64,
    },

    /// An obligation was debited on or before its due day
    ObligationPaid {
        day: i64,
        name: String,
        amount: i64,
        due_day: i64,
        balance: i64,
    },

    /// An obligation became terminal without settling
    ObligationFailed {
        day: i64,
        name: String,
        amount: i64,
        due_day: i64,
        balance: i64,
    },
}

impl Event {
    /// Day the event occurred on
    pub fn day(&self) -> i64 {
        match self {
            Event::IncomeCredited { day, .. } => *day,
            Event::ObligationPaid { day, .. } => *day,
            Event::ObligationFailed { day, .. } => *day,
        }
    }

    /// Short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::IncomeCredited { .. } => "IncomeCredited",
            Event::ObligationPaid { .. } => "ObligationPaid",
            Event::ObligationFailed { .. } => "ObligationFailed",
        }
    }

    /// Obligation name, if the event relates to one
    pub fn obligation(&self) -> Option<&str> {
        match self {
            Event::IncomeCredited { .. } => None,
            Event::ObligationPaid { name, .. } => Some(name),
            Event::ObligationFailed { name, .. } => Some(name),
        }
    }
}

impl fmt::Display for Event {
    /// Human-readable trace line: day, event type, obligation, amount,
    /// resulting balance.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::IncomeCredited {
                day,
                amount,
                balance,
            } => {
                write!(f, "Day {}: income +{} (balance {})", day, amount, balance)
            }
            Event::ObligationPaid {
                day,
                name,
                amount,
                due_day,
                balance,
            } => {
                let timing = match due_day - day {
                    0 => "on due date".to_string(),
                    early => format!("{} days early", early),
                };
                write!(
                    f,
                    "Day {}: PAID {} ({}, due {}, {}) (balance {})",
                    day, name, amount, due_day, timing, balance
                )
            }
            Event::ObligationFailed {
                day,
                name,
                amount,
                due_day,
                balance,
            } => {
                write!(
                    f,
                    "Day {}: FAILED {} ({}, due {}, balance {})",
                    day, name, amount, due_day, balance
                )
            }
        }
    }
}

/// Append-only log of simulation events.
///
/// A simple wrapper around `Vec<Event>` with convenience queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events, in occurrence order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Events that occurred on a specific day
    pub fn events_on_day(&self, day: i64) -> Vec<&Event> {
        self.events.iter().filter(|e| e.day() == day).collect()
    }

    /// Events relating to a specific obligation
    pub fn events_for(&self, name: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.obligation() == Some(name))
            .collect()
    }
}
