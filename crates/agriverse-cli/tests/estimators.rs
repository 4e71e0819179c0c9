// crates/agriverse-cli/tests/estimators.rs
//
// Cross-crate tests for the calculators the CLI wires together.
//
// These use the public APIs of the library crates directly, since the CLI
// is a binary crate with no lib.rs.

use std::thread;

use agriverse_carbon::{CarbonEstimator, CarbonInput, CarbonResult, RenewablePolicy};
use agriverse_core::{AgriverseError, Estimator};
use agriverse_economics::{Av, StakingEstimator, StakingInput, StakingResult};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn worked_example_json() -> &'static str {
    r#"{
        "travel": { "flightsPerYear": 2, "drivingMilesPerMonth": 500 },
        "home": { "electricityKwhPerMonth": 300, "heatingThermsPerMonth": 150 },
        "food": { "meatServingsPerWeek": 3, "dairyServingsPerDay": 2 },
        "energy": { "renewablePercent": 50 }
    }"#
}

fn run_estimator<E: Estimator>(estimator: &E, input: &E::Input) -> Result<E::Output, AgriverseError> {
    estimator.estimate(input)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn test_json_form_snapshot_to_offset() {
    let input: CarbonInput = serde_json::from_str(worked_example_json()).unwrap();
    let result: CarbonResult = run_estimator(&CarbonEstimator::default(), &input).unwrap();
    assert_eq!(result.trees_needed, 82);
    assert_eq!(result.estimated_cost_usd, 2050);
}

#[test]
fn test_strict_policy_rejects_form_with_excess_renewable() {
    let mut input: CarbonInput = serde_json::from_str(worked_example_json()).unwrap();
    input.energy.renewable_percent = 150.0;
    let err = run_estimator(&CarbonEstimator::new(RenewablePolicy::Strict), &input).unwrap_err();
    assert!(matches!(
        err,
        AgriverseError::InvalidInput {
            field: "renewablePercent",
            ..
        }
    ));
}

#[test]
fn test_staking_through_trait_and_token_display() {
    let result: StakingResult = run_estimator(
        &StakingEstimator::new(),
        &StakingInput {
            principal: 1000.0,
            period_days: 0,
        },
    )
    .unwrap();
    assert_eq!(Av::from_tokens(result.projected_reward_tokens).to_string(), "80 AV");
}

#[test]
fn test_invalid_period_rejected_through_trait() {
    let err = run_estimator(
        &StakingEstimator::new(),
        &StakingInput {
            principal: 1000.0,
            period_days: 45,
        },
    )
    .unwrap_err();
    assert_eq!(err.field(), Some("periodDays"));
}

#[test]
fn test_shared_estimators_across_threads() {
    let carbon = CarbonEstimator::default();
    let staking = StakingEstimator::new();
    let input: CarbonInput = serde_json::from_str(worked_example_json()).unwrap();

    thread::scope(|s| {
        let handles: Vec<_> = (0..8u32)
            .map(|i| {
                let carbon = &carbon;
                let staking = &staking;
                let input = &input;
                s.spawn(move || {
                    let trees = carbon.estimate(input).unwrap().trees_needed;
                    let reward = staking
                        .estimate(&StakingInput {
                            principal: f64::from(i) * 100.0,
                            period_days: 30,
                        })
                        .unwrap()
                        .projected_reward_tokens;
                    (trees, reward)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let (trees, reward) = handle.join().unwrap();
            assert_eq!(trees, 82);
            let expected = i as f64 * 100.0 * 12.0 * 30.0 / 36_500.0;
            assert!((reward - expected).abs() < 1e-9);
        }
    });
}
