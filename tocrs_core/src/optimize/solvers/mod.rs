//! Solver backends for linear programs
//!
//! Every backend implements [`Solver`]. Use [`solve_with`] to pick the backend named by a
//! [`Configuration`], it also guards the backends against malformed program data.

#[cfg(feature = "clarabel")]
pub mod clarabel_solver;
pub mod microlp_solver;

use cfg_if::cfg_if;
use indexmap::IndexMap;
use nalgebra::DVector;
use thiserror::Error;

use crate::configuration::{Configuration, SolverBackend};
use crate::optimize::problem::LinearProgram;
use crate::optimize::{OptimizationStatus, ProblemSolution};

/// A backend able to solve a [`LinearProgram`]
pub trait Solver {
    /// Name of the backend, used in log messages
    fn name(&self) -> &'static str;

    /// Solve the program
    ///
    /// Infeasible or unbounded programs are not errors, they are reported through
    /// the status of the returned [`ProblemSolution`]. Errors are reserved for failures
    /// of the backend itself.
    fn solve(&self, program: &LinearProgram) -> Result<ProblemSolution, SolverError>;
}

/// Errors raised by the solver backends
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The backend rejected its settings
    #[error("Invalid solver settings: {0}")]
    InvalidSettings(String),
    /// The backend was requested but not compiled in
    #[error("The {0} solver is not available, enable the {0} feature")]
    Unavailable(&'static str),
    /// The backend failed while solving
    #[error("The solver failed: {0}")]
    Backend(String),
}

/// Solve a program with the backend selected by `config`
///
/// Programs with non-finite data are never handed to a backend, their status is
/// [`OptimizationStatus::Undefined`].
pub fn solve_with(
    program: &LinearProgram,
    config: &Configuration,
) -> Result<ProblemSolution, SolverError> {
    if !program.is_finite() {
        tracing::warn!("linear program contains non-finite data, not solving");
        return Ok(ProblemSolution::not_optimal(OptimizationStatus::Undefined));
    }
    let solver: Box<dyn Solver> = match config.solver {
        SolverBackend::Microlp => Box::new(microlp_solver::MicrolpSolver::new()),
        SolverBackend::Clarabel => clarabel_backend(config)?,
    };
    tracing::debug!(solver = solver.name(), "solving linear program\n{}", program);
    let solution = solver.solve(program)?;
    tracing::debug!(solver = solver.name(), status = %solution.status, "solver finished");
    Ok(solution)
}

cfg_if! {
    if #[cfg(feature = "clarabel")] {
        fn clarabel_backend(config: &Configuration) -> Result<Box<dyn Solver>, SolverError> {
            Ok(Box::new(clarabel_solver::ClarabelSolver::new(
                config.max_iterations,
                config.solver_tolerance,
            )))
        }
    } else {
        fn clarabel_backend(_config: &Configuration) -> Result<Box<dyn Solver>, SolverError> {
            Err(SolverError::Unavailable("clarabel"))
        }
    }
}

/// Build the solution of an optimal program from its primal point `x` and the shadow
/// prices of its constraints, both ordered as in the program
pub(crate) fn assemble_solution(
    program: &LinearProgram,
    x: &DVector<f64>,
    duals: &DVector<f64>,
) -> ProblemSolution {
    let slack = program.bounds() - program.constraint_activity(x);
    let variable_values: IndexMap<String, f64> = program
        .variables()
        .keys()
        .cloned()
        .zip(x.iter().copied())
        .collect();
    let dual_values: IndexMap<String, f64> = program
        .constraints()
        .keys()
        .cloned()
        .zip(duals.iter().copied())
        .collect();
    let slack_values: IndexMap<String, f64> = program
        .constraints()
        .keys()
        .cloned()
        .zip(slack.iter().copied())
        .collect();
    ProblemSolution {
        status: OptimizationStatus::Optimal,
        objective_value: Some(program.evaluate_objective(x)),
        variable_values: Some(variable_values),
        dual_values: Some(dual_values),
        slack_values: Some(slack_values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_program_is_undefined() {
        let mut program = LinearProgram::new_maximization();
        program.add_new_variable("x", None, 0.).unwrap();
        program.add_objective_term("x", f64::NAN).unwrap();
        program.add_new_constraint("cap", &["x"], &[1.], 1.).unwrap();
        let solution = solve_with(&program, &Configuration::default()).unwrap();
        assert_eq!(solution.status, OptimizationStatus::Undefined);
        assert_eq!(solution.variable_values, None);
    }

    #[test]
    fn assemble() {
        let mut program = LinearProgram::new_maximization();
        program.add_new_variable("x", None, 0.).unwrap();
        program.add_objective_term("x", 2.).unwrap();
        program.add_new_constraint("cap", &["x"], &[1.], 3.).unwrap();
        program.add_new_constraint("loose", &["x"], &[1.], 10.).unwrap();
        let solution = assemble_solution(
            &program,
            &DVector::from_vec(vec![3.]),
            &DVector::from_vec(vec![2., 0.]),
        );
        assert_eq!(solution.objective_value, Some(6.));
        assert_eq!(solution.variable_value("x"), Some(3.));
        assert_eq!(solution.dual_value("cap"), Some(2.));
        assert_eq!(solution.slack_value("loose"), Some(7.));
    }

    #[cfg(not(feature = "clarabel"))]
    #[test]
    fn missing_backend() {
        use crate::configuration::ConfigurationBuilder;

        let mut program = LinearProgram::new_maximization();
        program.add_new_variable("x", None, 0.).unwrap();
        let config = ConfigurationBuilder::default()
            .solver(SolverBackend::Clarabel)
            .build()
            .unwrap();
        assert_eq!(
            solve_with(&program, &config),
            Err(SolverError::Unavailable("clarabel"))
        );
    }
}
