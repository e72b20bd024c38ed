//! Property tests of the planning results over ranges of scenarios

use proptest::prelude::*;
use tocrs_core::analysis::bottleneck::Bottleneck;
use tocrs_core::production::stage::{Stage, PROCESS_TIMES};
use tocrs_core::{solve_scenario, ScenarioParameters};

/// Absolute tolerance on hours and units
const TOL: f64 = 1e-6;

/// Tolerance on throughput, scaled to its magnitude
fn throughput_tol(throughput: f64) -> f64 {
    1e-6 * throughput.abs().max(1.)
}

prop_compose! {
    /// Scenarios within the ranges the planning dashboard offers
    fn scenario()(
        heat_treatment in 80.0..240.0f64,
        machining in 100.0..300.0f64,
        assembly in 100.0..300.0f64,
        demand_a in 0.0..100.0f64,
        demand_b in 0.0..150.0f64,
        profit_a in 50.0..150.0f64,
        profit_b in 30.0..100.0f64,
    ) -> ScenarioParameters {
        ScenarioParameters::new(
            heat_treatment,
            machining,
            assembly,
            demand_a,
            demand_b,
            profit_a,
            profit_b,
        )
    }
}

/// Any non-negative magnitude up to `max`, with zero drawn often
fn magnitude(max: f64) -> impl Strategy<Value = f64> {
    prop_oneof![1 => Just(0.), 4 => 0.0..max]
}

prop_compose! {
    /// Scenarios anywhere in the valid input space, including empty stages and huge lines
    fn any_scenario()(
        heat_treatment in magnitude(1e9),
        machining in magnitude(1e9),
        assembly in magnitude(1e9),
        demand_a in magnitude(1e9),
        demand_b in magnitude(1e9),
        profit_a in magnitude(1e3),
        profit_b in magnitude(1e3),
    ) -> ScenarioParameters {
        ScenarioParameters::new(
            heat_treatment,
            machining,
            assembly,
            demand_a,
            demand_b,
            profit_a,
            profit_b,
        )
    }
}

/// Feasibility of the plan reported for `params`, hours and units may overrun by at most TOL
fn check_feasible(params: &ScenarioParameters) -> Result<(), TestCaseError> {
    let result = solve_scenario(params).unwrap();
    prop_assert!(result.is_optimal());
    let a = result.product_a.unwrap();
    let b = result.product_b.unwrap();
    prop_assert!(a >= -TOL && b >= -TOL);
    prop_assert!(a <= params.demand_a + TOL, "demand {} > {}", a, params.demand_a);
    prop_assert!(b <= params.demand_b + TOL, "demand {} > {}", b, params.demand_b);
    let used = PROCESS_TIMES.stage_hours(a, b);
    for stage in Stage::PRIORITY {
        let usage = result.stage(stage).unwrap();
        prop_assert!((usage.used.unwrap() - used[stage.index()]).abs() < 1e-9);
        prop_assert!(
            usage.used.unwrap() <= params.capacity(stage) + TOL,
            "{} uses {} of {}",
            stage,
            usage.used.unwrap(),
            params.capacity(stage)
        );
    }
    let throughput = params.profit_a * a + params.profit_b * b;
    prop_assert!((result.total_throughput.unwrap() - throughput).abs() < throughput_tol(throughput));
    Ok(())
}

fn check_relaxing_capacity(
    params: &ScenarioParameters,
    stage: Stage,
    extra: f64,
) -> Result<(), TestCaseError> {
    let before = solve_scenario(params).unwrap().total_throughput.unwrap();
    let relaxed = params.with_capacity(stage, params.capacity(stage) + extra);
    let after = solve_scenario(&relaxed).unwrap().total_throughput.unwrap();
    prop_assert!(after >= before - throughput_tol(before));
    Ok(())
}

fn stage_strategy() -> impl Strategy<Value = Stage> {
    prop_oneof![
        Just(Stage::HeatTreatment),
        Just(Stage::Machining),
        Just(Stage::Assembly),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn plans_are_feasible(params in scenario()) {
        check_feasible(&params)?;
    }

    #[test]
    fn plans_are_feasible_at_any_scale(params in any_scenario()) {
        check_feasible(&params)?;
    }

    #[test]
    fn slack_matches_usage(params in scenario()) {
        let result = solve_scenario(&params).unwrap();
        for stage in Stage::PRIORITY {
            let usage = result.stage(stage).unwrap();
            let slack = result.constraint(stage.constraint_id()).unwrap().slack.unwrap();
            prop_assert!((slack - (usage.capacity - usage.used.unwrap())).abs() < 1e-9);
        }
    }

    #[test]
    fn relaxing_capacity_never_hurts(
        params in scenario(),
        stage in stage_strategy(),
        extra in 0.0..100.0f64,
    ) {
        check_relaxing_capacity(&params, stage, extra)?;
    }

    #[test]
    fn relaxing_capacity_never_hurts_at_any_scale(
        params in any_scenario(),
        stage in stage_strategy(),
        extra in magnitude(1e9),
    ) {
        check_relaxing_capacity(&params, stage, extra)?;
    }

    #[test]
    fn bottleneck_is_consistent(params in scenario()) {
        let result = solve_scenario(&params).unwrap();
        match result.bottleneck {
            Bottleneck::Demand => {
                for stage in Stage::PRIORITY {
                    let pct = result.stage(stage).unwrap().utilization_pct.unwrap();
                    prop_assert!(pct < 99.9);
                }
            }
            bottleneck => {
                let stage = Stage::PRIORITY
                    .into_iter()
                    .find(|s| Bottleneck::from(*s) == bottleneck)
                    .unwrap();
                prop_assert!(result.stage(stage).unwrap().utilization_pct.unwrap() >= 99.9);
                // Every stage with a higher priority is below the threshold
                for earlier in &Stage::PRIORITY[..stage.index()] {
                    prop_assert!(result.stage(*earlier).unwrap().utilization_pct.unwrap() < 99.9);
                }
            }
        }
    }

    #[test]
    fn solving_is_idempotent(params in scenario()) {
        let first = solve_scenario(&params).unwrap();
        let second = solve_scenario(&params).unwrap();
        prop_assert_eq!(first, second);
    }
}
