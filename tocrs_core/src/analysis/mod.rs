//! Module interpreting the solution of a planning program: resource usage, utilization,
//! bottleneck, and the shadow price and slack of every constraint

pub mod bottleneck;
pub mod result;
pub mod utilization;

use crate::analysis::bottleneck::Bottleneck;
use crate::analysis::result::{ConstraintRow, SolutionResult};
use crate::configuration::Configuration;
use crate::optimize::{OptimizationStatus, ProblemSolution};
use crate::production::product::Product;
use crate::production::scenario::ScenarioParameters;

/// Ids of the constraints, in the order rows of the constraint table are reported
pub const CONSTRAINT_TABLE_ORDER: [&str; 5] = [
    "machining",
    "heat_treatment",
    "assembly",
    "demand_a",
    "demand_b",
];

/// Interpret the solution of the program built for `params`
///
/// When the program was not solved to optimality every value derived from the solution
/// (quantities, throughput, usage, utilization, shadow prices, and slacks) is `None`, and
/// the bottleneck falls back to [`Bottleneck::Demand`].
pub fn interpret(
    params: &ScenarioParameters,
    solution: &ProblemSolution,
    config: &Configuration,
) -> SolutionResult {
    let quantities = match solution.status {
        OptimizationStatus::Optimal => solution
            .variable_value(Product::A.variable_id())
            .zip(solution.variable_value(Product::B.variable_id())),
        _ => None,
    };

    let stages = utilization::stage_usage(params, quantities, config.zero_capacity);
    let bottleneck = match quantities {
        Some(_) => bottleneck::classify(&stages, config.bottleneck_threshold_pct),
        None => Bottleneck::Demand,
    };

    let constraints = CONSTRAINT_TABLE_ORDER
        .iter()
        .map(|id| ConstraintRow {
            name: id.to_string(),
            shadow_price: solution.dual_value(id),
            slack: solution.slack_value(id),
        })
        .collect();

    if let Some(stage) = stages.iter().find(|s| s.zero_capacity) {
        tracing::warn!(stage = %stage.stage, "stage has no capacity");
    }

    SolutionResult {
        status: solution.status,
        product_a: quantities.map(|(a, _)| a),
        product_b: quantities.map(|(_, b)| b),
        total_throughput: quantities.and(solution.objective_value),
        stages,
        bottleneck,
        constraints,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::production::stage::Stage;
    use indexmap::IndexMap;

    fn optimal_solution(a: f64, b: f64) -> ProblemSolution {
        let mut variable_values = IndexMap::new();
        variable_values.insert("product_a".to_string(), a);
        variable_values.insert("product_b".to_string(), b);
        let duals: IndexMap<String, f64> = CONSTRAINT_TABLE_ORDER
            .iter()
            .enumerate()
            .map(|(i, id)| (id.to_string(), i as f64))
            .collect();
        let slacks: IndexMap<String, f64> = CONSTRAINT_TABLE_ORDER
            .iter()
            .map(|id| (id.to_string(), 1.))
            .collect();
        ProblemSolution {
            status: OptimizationStatus::Optimal,
            objective_value: Some(90. * a + 60. * b),
            variable_values: Some(variable_values),
            dual_values: Some(duals),
            slack_values: Some(slacks),
        }
    }

    #[test]
    fn interpret_optimal() {
        let params = ScenarioParameters::default();
        let result = interpret(&params, &optimal_solution(0., 80.), &Configuration::default());
        assert_eq!(result.status, OptimizationStatus::Optimal);
        assert_eq!(result.product_a, Some(0.));
        assert_eq!(result.product_b, Some(80.));
        assert_eq!(result.total_throughput, Some(4800.));
        assert_eq!(result.bottleneck, Bottleneck::HeatTreatment);

        let names: Vec<_> = result.constraints.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, CONSTRAINT_TABLE_ORDER.to_vec());
        assert_eq!(result.constraints[2].shadow_price, Some(2.));
        assert_eq!(result.constraints[4].slack, Some(1.));
    }

    #[test]
    fn interpret_not_optimal() {
        let params = ScenarioParameters::default();
        let solution = ProblemSolution::not_optimal(OptimizationStatus::Infeasible);
        let result = interpret(&params, &solution, &Configuration::default());
        assert_eq!(result.status, OptimizationStatus::Infeasible);
        assert!(!result.is_optimal());
        assert_eq!(result.product_a, None);
        assert_eq!(result.product_b, None);
        assert_eq!(result.total_throughput, None);
        assert_eq!(result.bottleneck, Bottleneck::Demand);
        for stage in &result.stages {
            assert_eq!(stage.used, None);
            assert_eq!(stage.utilization_pct, None);
        }
        assert_eq!(
            result.stage(Stage::Machining).map(|s| s.capacity),
            Some(200.)
        );
        for row in &result.constraints {
            assert_eq!(row.shadow_price, None);
            assert_eq!(row.slack, None);
        }
    }
}
