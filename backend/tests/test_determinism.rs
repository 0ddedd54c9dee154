//! Determinism Tests
//!
//! Same seed + same config must reproduce the identical scenario, and the
//! engine must reproduce the identical outcome from identical inputs. This
//! is what makes runs debuggable and scenario sweeps comparable.

use cashflow_simulator_core_rs::{
    RngManager, Scenario, ScenarioBuilder, ScenarioConfig, SimulationOutcome,
};

fn build_default(seed: u64) -> Scenario {
    ScenarioBuilder::new(ScenarioConfig::default()).build(&mut RngManager::new(seed))
}

fn run(scenario: Scenario) -> SimulationOutcome {
    scenario.into_simulation().unwrap().into_outcome()
}

#[test]
fn test_same_seed_reproduces_scenario() {
    let a = build_default(12345);
    let b = build_default(12345);
    assert_eq!(a, b);
}

#[test]
fn test_different_seeds_change_paydays() {
    // Not guaranteed for an arbitrary seed pair, but these two differ
    let a = build_default(1);
    let b = build_default(2);
    assert_ne!(
        a.income, b.income,
        "seeds 1 and 2 should produce different payday wobble"
    );
}

#[test]
fn test_full_pipeline_is_reproducible() {
    let first = run(build_default(777));
    let second = run(build_default(777));

    assert_eq!(first, second);
}

#[test]
fn test_default_scenario_settles_every_obligation() {
    let scenario = build_default(42);
    let total = scenario.obligations.len();
    let outcome = run(scenario);

    // Every bill's deadline falls inside the run, so every bill is terminal
    assert_eq!(outcome.result.terminal_count(), total);
    assert_eq!(
        outcome
            .obligations
            .iter()
            .filter(|ob| ob.is_terminal())
            .count(),
        total
    );
}

#[test]
fn test_engine_consumes_no_randomness() {
    // Building two scenarios from one RNG stream, the second build sees the
    // stream exactly where the first left it, whether or not a run happened
    // in between. The engine never advances the RNG.
    let builder = ScenarioBuilder::new(ScenarioConfig::default());

    let mut rng_a = RngManager::new(9);
    let _ = builder.build(&mut rng_a);
    let second_a = builder.build(&mut rng_a);

    let mut rng_b = RngManager::new(9);
    let first_b = builder.build(&mut rng_b);
    let _ = run(first_b);
    let second_b = builder.build(&mut rng_b);

    assert_eq!(second_a, second_b);
}
