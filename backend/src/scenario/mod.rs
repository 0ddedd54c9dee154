//! Scenario generation for demos and tests.
//!
//! Builds the engine's inputs for a multi-month household cashflow: a salary
//! landing near a fixed payday each month (with a small random wobble) and a
//! set of recurring bills due at month end.
//!
//! # Key Principles
//!
//! 1. **Determinism**: same seed + same config produces the same scenario
//! 2. **Isolation**: all randomness goes through the injected [`RngManager`];
//!    the engine itself never draws a random number
//!
//! # Example
//!
//! ```
//! use cashflow_simulator_core_rs::{RngManager, ScenarioBuilder, ScenarioConfig};
//!
//! let mut rng = RngManager::new(42);
//! let scenario = ScenarioBuilder::new(ScenarioConfig::default()).build(&mut rng);
//!
//! assert_eq!(scenario.income.len(), 6);       // one salary per month
//! assert_eq!(scenario.obligations.len(), 18); // three bills per month
//! ```

use serde::{Deserialize, Serialize};

use crate::engine::{Simulation, SimulationConfig, SimulationError};
use crate::models::income::IncomeEvent;
use crate::models::obligation::Obligation;
use crate::rng::RngManager;

/// One bill recurring every month, due at month end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringBill {
    /// Obligation name, reused every month
    pub name: String,

    /// Monthly amount (minor units)
    pub amount: i64,
}

impl RecurringBill {
    /// Create a recurring bill
    pub fn new(name: impl Into<String>, amount: i64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Configuration for scenario generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Number of months to generate
    pub months: i64,

    /// Days per month (the simulated calendar is a flat day axis)
    pub days_per_month: i64,

    /// Salary amount credited once per month (minor units)
    pub salary: i64,

    /// Day of the month the salary normally lands
    pub salary_day: i64,

    /// Maximum payday wobble in days (salary lands within +/- this)
    pub payday_jitter: i64,

    /// Opening balance for the run
    pub start_balance: i64,

    /// Bills due on the last day of every month
    pub bills: Vec<RecurringBill>,
}

impl Default for ScenarioConfig {
    /// The demo household: six 30-day months, salary 2200 landing around
    /// day 25, rent/council tax/credit card due at month end.
    fn default() -> Self {
        Self {
            months: 6,
            days_per_month: 30,
            salary: 2200,
            salary_day: 25,
            payday_jitter: 2,
            start_balance: 0,
            bills: vec![
                RecurringBill::new("rent", 900),
                RecurringBill::new("council_tax", 140),
                RecurringBill::new("credit_card", 300),
            ],
        }
    }
}

/// A fully constructed set of engine inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Income events, one per month
    pub income: Vec<IncomeEvent>,

    /// Obligations, `bills.len()` per month
    pub obligations: Vec<Obligation>,

    /// Opening balance
    pub start_balance: i64,

    /// First simulated day
    pub start_day: i64,

    /// Last simulated day
    pub end_day: i64,
}

impl Scenario {
    /// Scalar run configuration for this scenario
    pub fn config(&self) -> SimulationConfig {
        SimulationConfig {
            start_balance: self.start_balance,
            start_day: self.start_day,
            end_day: self.end_day,
        }
    }

    /// Consume the scenario into a ready-to-run simulation
    pub fn into_simulation(self) -> Result<Simulation, SimulationError> {
        let config = self.config();
        Simulation::new(config, self.income, self.obligations)
    }
}

/// Generator for demo scenarios
///
/// Holds the config; randomness is injected per build so the builder itself
/// carries no hidden state.
#[derive(Debug, Clone)]
pub struct ScenarioBuilder {
    config: ScenarioConfig,
}

impl ScenarioBuilder {
    /// Create a builder from a config
    pub fn new(config: ScenarioConfig) -> Self {
        Self { config }
    }

    /// The config this builder generates from
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Generate a scenario
    ///
    /// Draws exactly one jitter per month from `rng`, so the RNG stream
    /// consumed is independent of the bill list.
    pub fn build(&self, rng: &mut RngManager) -> Scenario {
        let cfg = &self.config;
        let mut income = Vec::new();
        let mut obligations = Vec::new();

        for month in 0..cfg.months {
            let base = month * cfg.days_per_month;
            let payday = base + cfg.salary_day + rng.jitter(cfg.payday_jitter);
            income.push(IncomeEvent::new(payday, cfg.salary));

            let month_end = base + cfg.days_per_month;
            for bill in &cfg.bills {
                obligations.push(Obligation::new(bill.name.clone(), month_end, bill.amount));
            }
        }

        Scenario {
            income,
            obligations,
            start_balance: cfg.start_balance,
            start_day: 1,
            end_day: cfg.months * cfg.days_per_month,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_counts() {
        let mut rng = RngManager::new(1);
        let scenario = ScenarioBuilder::new(ScenarioConfig::default()).build(&mut rng);
        assert_eq!(scenario.income.len(), 6);
        assert_eq!(scenario.obligations.len(), 18);
        assert_eq!(scenario.start_day, 1);
        assert_eq!(scenario.end_day, 180);
    }

    #[test]
    fn test_paydays_stay_near_salary_day() {
        let mut rng = RngManager::new(123);
        let config = ScenarioConfig::default();
        let scenario = ScenarioBuilder::new(config.clone()).build(&mut rng);

        for (month, event) in scenario.income.iter().enumerate() {
            let base = month as i64 * config.days_per_month;
            let nominal = base + config.salary_day;
            assert!(
                (event.day - nominal).abs() <= config.payday_jitter,
                "payday {} strays from nominal {}",
                event.day,
                nominal
            );
            assert_eq!(event.amount, config.salary);
        }
    }

    #[test]
    fn test_bills_due_at_month_end() {
        let mut rng = RngManager::new(5);
        let scenario = ScenarioBuilder::new(ScenarioConfig::default()).build(&mut rng);

        for (i, ob) in scenario.obligations.iter().enumerate() {
            let month = (i / 3) as i64;
            assert_eq!(ob.due_day(), (month + 1) * 30);
        }
    }

    #[test]
    fn test_same_seed_same_scenario() {
        let builder = ScenarioBuilder::new(ScenarioConfig::default());
        let a = builder.build(&mut RngManager::new(77));
        let b = builder.build(&mut RngManager::new(77));
        assert_eq!(a, b);
    }

    #[test]
    fn test_scenario_runs_end_to_end() {
        let mut rng = RngManager::new(42);
        let scenario = ScenarioBuilder::new(ScenarioConfig::default()).build(&mut rng);
        let total = scenario.obligations.len();

        let mut sim = scenario.into_simulation().unwrap();
        let result = sim.run();
        assert_eq!(result.terminal_count(), total);
    }
}
