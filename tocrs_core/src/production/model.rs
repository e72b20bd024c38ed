//! Builds the production planning linear program of a scenario
use crate::optimize::problem::{LinearProgram, ProblemError};
use crate::production::product::Product;
use crate::production::scenario::ScenarioParameters;
use crate::production::stage::{Stage, PROCESS_TIMES};

/// Build the planning program of a scenario
///
/// The program maximizes `profit_a*product_a + profit_b*product_b` over non-negative
/// quantities, subject to one capacity constraint per stage (machining, heat treatment,
/// then assembly) and one demand cap per product. Parameter values are not checked, a
/// negative capacity for instance produces an infeasible program. Every call builds a
/// new program.
///
/// # Errors
/// Only fails if the fixed structure of the program is inconsistent, which does not
/// depend on `params`.
///
/// # Examples
/// ```rust
/// use tocrs_core::production::model::build;
/// use tocrs_core::production::scenario::ScenarioParameters;
/// let program = build(&ScenarioParameters::default()).unwrap();
/// assert_eq!(program.num_variables(), 2);
/// assert_eq!(program.num_constraints(), 5);
/// ```
pub fn build(params: &ScenarioParameters) -> Result<LinearProgram, ProblemError> {
    let mut program = LinearProgram::new_maximization();
    let variables = Product::ALL.map(|p| p.variable_id());

    for product in Product::ALL {
        program.add_new_variable(
            product.variable_id(),
            Some(&product.to_string()),
            0.,
        )?;
        program.add_objective_term(product.variable_id(), params.profit(product))?;
    }

    for stage in Stage::CONSTRAINT_ORDER {
        program.add_new_constraint(
            stage.constraint_id(),
            &variables,
            &PROCESS_TIMES.stage_row(stage),
            params.capacity(stage),
        )?;
    }

    for product in Product::ALL {
        program.add_new_constraint(
            product.demand_constraint_id(),
            &[product.variable_id()],
            &[1.],
            params.demand(product),
        )?;
    }

    tracing::debug!(
        variables = program.num_variables(),
        constraints = program.num_constraints(),
        "built planning program"
    );
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimize::objective::ObjectiveSense;
    use nalgebra::DMatrix;

    #[test]
    fn baseline_program() {
        let program = build(&ScenarioParameters::default()).unwrap();
        assert_eq!(program.objective().sense(), ObjectiveSense::Maximize);
        assert_eq!(
            program.constraints().keys().collect::<Vec<_>>(),
            vec!["machining", "heat_treatment", "assembly", "demand_a", "demand_b"]
        );
        assert_eq!(
            program.constraint_matrix(),
            DMatrix::from_row_slice(
                5,
                2,
                &[2.5, 1.5, 4.0, 2.0, 2.0, 1.5, 1., 0., 0., 1.]
            )
        );
        assert_eq!(
            program.bounds().as_slice(),
            &[200., 160., 180., 50., 80.]
        );
        assert_eq!(program.objective_coefficients().as_slice(), &[90., 60.]);
        assert!(program.variables().values().all(|v| v.lower_bound() == 0.));
    }

    #[test]
    fn parameters_are_not_validated() {
        let params = ScenarioParameters::new(-1., f64::NAN, 0., -5., 0., -2., 0.);
        let program = build(&params).unwrap();
        assert_eq!(program.num_constraints(), 5);
        assert!(!program.is_finite());
    }

    #[test]
    fn programs_are_independent() {
        let first = build(&ScenarioParameters::default()).unwrap();
        let second = build(&ScenarioParameters::default().with_capacity(Stage::Machining, 1.))
            .unwrap();
        assert_eq!(first.bounds()[0], 200.);
        assert_eq!(second.bounds()[0], 1.);
    }
}
