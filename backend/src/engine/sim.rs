//! Simulation engine
//!
//! Runs one deterministic pass over a closed, fully-known set of future
//! income and obligations (a perfect-foresight scheduler, not a reactive
//! one). For each day in order:
//!
//! ```text
//! 1. Apply income arriving today (never gated by the calendar)
//! 2. Evaluate still-pending obligations in ascending due-day order:
//!    - past deadline        -> failed, unconditionally
//!    - day not executable   -> defer
//!    - last safe chance     -> pay if funds allow, else failed
//!    - otherwise            -> defer
//! 3. Record the end-of-day balance into the lowest-balance floor
//! ```
//!
//! "Last safe chance" means: among the executable days remaining strictly
//! after today and up to the deadline, paying on the latest of them would
//! leave the balance negative even after all income known to arrive in
//! between. Deferring past today would then risk insufficient funds, so the
//! engine pays now. If no executable day remains before the deadline, today
//! is unconditionally the last chance.
//!
//! This greedy policy defers payment as long as possible (maximizing cash
//! float) and never misses a payment it could have afforded given known
//! future income. It is NOT globally optimal against obligations sharing a
//! due day and competing for the same balance, since it decides obligations
//! independently and sequentially within a day. That is a documented policy
//! limitation, not a bug.
//!
//! Insufficient funds is a modeled outcome recorded on the obligation and in
//! the result tally; the only errors are configuration errors, surfaced
//! before any simulation step runs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::{Calendar, Weekday};
use crate::core::days::DaySpan;
use crate::models::event::{Event, EventLog};
use crate::models::income::{IncomeEvent, IncomeLedger};
use crate::models::obligation::{Obligation, ObligationBook};
use crate::models::result::RunResult;

// ============================================================================
// Configuration Types
// ============================================================================

/// Scalar configuration for one simulation run
///
/// The day axis is `[start_day, end_day]` inclusive. The balance may start
/// negative in degenerate configurations; that is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Opening balance (minor units, any sign)
    pub start_balance: i64,

    /// First simulated day (inclusive)
    pub start_day: i64,

    /// Last simulated day (inclusive)
    pub end_day: i64,
}

/// Simulation error types
///
/// Modeled financial failure (missed deadline, insufficient funds) is NOT an
/// error; this taxonomy covers configuration problems only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The day range is inverted
    #[error("invalid day span: start day {start} is after end day {end}")]
    InvalidDaySpan { start: i64, end: i64 },

    /// An income event carries a negative amount
    #[error("negative income amount {amount} on day {day}")]
    NegativeIncomeAmount { day: i64, amount: i64 },

    /// An obligation carries a negative amount
    #[error("negative amount {amount} for obligation '{name}'")]
    NegativeObligationAmount { name: String, amount: i64 },
}

/// Final output of a run: the aggregate result plus the settled obligations
///
/// Callers needing per-obligation detail (paid day, failure) read the
/// obligation list directly; it is returned in original input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Aggregate tallies and lowest observed balance
    pub result: RunResult,

    /// Obligations with their final settlement states, in input order
    pub obligations: Vec<Obligation>,
}

// ============================================================================
// Simulation
// ============================================================================

/// One simulation run over a single cash balance
///
/// Owns the balance, the obligation book, and the day axis for the duration
/// of the run. Nothing is shared across runs and nothing persists after one;
/// independent runs may be executed in parallel by the caller.
///
/// # Example
///
/// ```
/// use cashflow_simulator_core_rs::{
///     IncomeEvent, Obligation, Simulation, SimulationConfig,
/// };
///
/// let config = SimulationConfig {
///     start_balance: 0,
///     start_day: 1,
///     end_day: 15,
/// };
/// let income = vec![IncomeEvent::new(10, 1000)];
/// let obligations = vec![Obligation::new("rent", 12, 900)];
///
/// let mut sim = Simulation::new(config, income, obligations).unwrap();
/// let result = sim.run();
///
/// assert_eq!(result.on_time, 1);
/// assert_eq!(result.failed, 0);
/// assert!(sim.obligations()[0].is_paid());
/// ```
pub struct Simulation {
    /// Execution-day availability rule
    calendar: Box<dyn Calendar>,

    /// Day-indexed income lookup
    ledger: IncomeLedger,

    /// Obligations under simulation, with evaluation order
    book: ObligationBook,

    /// The single cash balance, owned by this run
    balance: i64,

    /// The simulated day axis
    span: DaySpan,

    /// Aggregate outcome accumulator
    result: RunResult,

    /// Trace of state-changing events (pure side channel)
    events: EventLog,

    /// Whether the single pass has completed
    finished: bool,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("calendar", &"<dyn Calendar>")
            .field("ledger", &self.ledger)
            .field("book", &self.book)
            .field("balance", &self.balance)
            .field("span", &self.span)
            .field("result", &self.result)
            .field("events", &self.events)
            .field("finished", &self.finished)
            .finish()
    }
}

impl Simulation {
    /// Create a simulation with the reference business-day calendar
    ///
    /// # Errors
    ///
    /// Returns a configuration error before any step runs if the day range
    /// is inverted or any amount is negative. Zero amounts, duplicate
    /// obligation names, and empty lists are degenerate but valid.
    pub fn new(
        config: SimulationConfig,
        income: Vec<IncomeEvent>,
        obligations: Vec<Obligation>,
    ) -> Result<Self, SimulationError> {
        Self::with_calendar(config, income, obligations, Box::new(Weekday))
    }

    /// Create a simulation with a caller-supplied calendar
    ///
    /// The calendar gates payment execution only; income arrival is applied
    /// on every day regardless.
    pub fn with_calendar(
        config: SimulationConfig,
        income: Vec<IncomeEvent>,
        obligations: Vec<Obligation>,
        calendar: Box<dyn Calendar>,
    ) -> Result<Self, SimulationError> {
        Self::validate(&config, &income, &obligations)?;

        Ok(Self {
            calendar,
            ledger: IncomeLedger::from_events(&income),
            book: ObligationBook::new(obligations),
            balance: config.start_balance,
            span: DaySpan::new(config.start_day, config.end_day),
            result: RunResult::new(),
            events: EventLog::new(),
            finished: false,
        })
    }

    /// Validate configuration before constructing any state
    fn validate(
        config: &SimulationConfig,
        income: &[IncomeEvent],
        obligations: &[Obligation],
    ) -> Result<(), SimulationError> {
        if config.start_day > config.end_day {
            return Err(SimulationError::InvalidDaySpan {
                start: config.start_day,
                end: config.end_day,
            });
        }

        for event in income {
            if event.amount < 0 {
                return Err(SimulationError::NegativeIncomeAmount {
                    day: event.day,
                    amount: event.amount,
                });
            }
        }

        for ob in obligations {
            if ob.amount() < 0 {
                return Err(SimulationError::NegativeObligationAmount {
                    name: ob.name().to_string(),
                    amount: ob.amount(),
                });
            }
        }

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current balance (final balance once the run has completed)
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// The simulated day axis
    pub fn span(&self) -> DaySpan {
        self.span
    }

    /// Aggregate result accumulated so far
    pub fn result(&self) -> RunResult {
        self.result
    }

    /// Obligations with their current settlement states, in input order
    pub fn obligations(&self) -> &[Obligation] {
        self.book.obligations()
    }

    /// Trace of state-changing events
    pub fn event_log(&self) -> &EventLog {
        &self.events
    }

    /// Whether the single pass has completed
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    // ========================================================================
    // Day Loop
    // ========================================================================

    /// Execute the run: one strict sequential fold over the day span
    ///
    /// A run either completes or is not started; there is no mid-run
    /// cancellation. Calling `run` again after completion returns the
    /// finalized result without re-stepping.
    pub fn run(&mut self) -> RunResult {
        if self.finished {
            return self.result;
        }

        // Evaluation order is fixed for the whole run
        let order = self.book.evaluation_order().to_vec();

        for day in self.span {
            self.step_day(day, &order);
        }

        self.finished = true;
        self.result
    }

    /// Consume the simulation, yielding the final outcome
    ///
    /// Runs first if the pass has not completed yet.
    pub fn into_outcome(mut self) -> SimulationOutcome {
        self.run();
        SimulationOutcome {
            result: self.result,
            obligations: self.book.into_obligations(),
        }
    }

    /// Process a single day: income, obligations, bookkeeping
    fn step_day(&mut self, day: i64, order: &[usize]) {
        // Income lands first, even on non-executable days
        let credit = self.ledger.total_on(day);
        if credit != 0 {
            self.balance += credit;
            self.events.log(Event::IncomeCredited {
                day,
                amount: credit,
                balance: self.balance,
            });
        }

        for &idx in order {
            if self.book.get(idx).is_terminal() {
                continue;
            }

            let due_day = self.book.get(idx).due_day();
            let amount = self.book.get(idx).amount();

            if day > due_day {
                // Missed deadline: failure regardless of available funds
                self.fail_obligation(idx, day);
                continue;
            }

            if !self.calendar.is_executable(day) {
                continue;
            }

            // Would paying on the latest remaining executable day still
            // leave us covered, counting income known to arrive in between?
            let last_chance = match self.calendar.last_executable_within(day, due_day) {
                Some(last) => self.balance + self.ledger.total_between(day, last) - amount < 0,
                None => true,
            };

            if !last_chance {
                continue;
            }

            if self.balance - amount < 0 {
                self.fail_obligation(idx, day);
            } else {
                self.balance -= amount;
                self.book.get_mut(idx).mark_paid(day);
                self.result.record_on_time();
                let ob = self.book.get(idx);
                self.events.log(Event::ObligationPaid {
                    day,
                    name: ob.name().to_string(),
                    amount,
                    due_day,
                    balance: self.balance,
                });
            }
        }

        // End-of-day floor; intra-day excursions are not tracked
        self.result.observe_balance(self.balance);
    }

    /// Mark an obligation failed and record the tally and trace entry
    fn fail_obligation(&mut self, idx: usize, day: i64) {
        self.book.get_mut(idx).mark_failed();
        self.result.record_failure();
        let ob = self.book.get(idx);
        self.events.log(Event::ObligationFailed {
            day,
            name: ob.name().to_string(),
            amount: ob.amount(),
            due_day: ob.due_day(),
            balance: self.balance,
        });
    }
}

/// Run a complete simulation in one call
///
/// Convenience wrapper over [`Simulation`] using the reference business-day
/// calendar.
///
/// # Example
///
/// ```
/// use cashflow_simulator_core_rs::{run_simulation, IncomeEvent, Obligation};
///
/// let outcome = run_simulation(
///     vec![IncomeEvent::new(10, 1000)],
///     vec![Obligation::new("rent", 12, 900)],
///     0,  // start_balance
///     1,  // start_day
///     15, // end_day
/// )
/// .unwrap();
///
/// assert_eq!(outcome.result.on_time, 1);
/// ```
pub fn run_simulation(
    income: Vec<IncomeEvent>,
    obligations: Vec<Obligation>,
    start_balance: i64,
    start_day: i64,
    end_day: i64,
) -> Result<SimulationOutcome, SimulationError> {
    let config = SimulationConfig {
        start_balance,
        start_day,
        end_day,
    };
    let sim = Simulation::new(config, income, obligations)?;
    Ok(sim.into_outcome())
}
