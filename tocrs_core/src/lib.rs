//! Core rust implementation of tocrs, a crate for planning the product mix of a production
//! line and finding the constraint which limits its throughput.
//!
//! A scenario ([`ScenarioParameters`]) is turned into a linear program
//! ([`production::model::build`]), solved by one of the backends in
//! [`optimize::solvers`], and the solution is interpreted into a [`SolutionResult`]
//! ([`analysis::interpret`]). [`solve_scenario`] runs all three steps.
//!
//! ```rust
//! use tocrs_core::{solve_scenario, ScenarioParameters};
//! use tocrs_core::analysis::bottleneck::Bottleneck;
//! let result = solve_scenario(&ScenarioParameters::default()).unwrap();
//! assert!(result.is_optimal());
//! assert_eq!(result.bottleneck, Bottleneck::HeatTreatment);
//! ```

pub mod analysis;
pub mod comparison;
pub mod configuration;
pub mod io;
pub mod optimize;
pub mod production;

pub use analysis::result::SolutionResult;
pub use configuration::Configuration;
pub use production::scenario::{Scenario, ScenarioParameters};

use thiserror::Error;

use crate::io::IoError;
use crate::optimize::problem::ProblemError;
use crate::optimize::solvers::{solve_with, SolverError};

/// Errors raised while solving scenarios
#[derive(Error, Debug)]
pub enum TocError {
    /// The planning program could not be built
    #[error(transparent)]
    Problem(#[from] ProblemError),
    /// The solver backend failed
    #[error(transparent)]
    Solver(#[from] SolverError),
    /// Reading or writing failed
    #[error(transparent)]
    Io(#[from] IoError),
    /// The thread pool for solving scenarios could not be created
    #[error("Could not create thread pool: {0}")]
    ThreadPool(String),
}

/// Solve a scenario with the default [`Configuration`]
pub fn solve_scenario(params: &ScenarioParameters) -> Result<SolutionResult, TocError> {
    solve_scenario_with(params, &Configuration::default())
}

/// Solve a scenario: build its program, solve it, and interpret the solution
///
/// A program which can't be solved to optimality is not an error, it is reported
/// through the status of the result (see [`SolutionResult`]).
pub fn solve_scenario_with(
    params: &ScenarioParameters,
    config: &Configuration,
) -> Result<SolutionResult, TocError> {
    let program = production::model::build(params)?;
    let solution = solve_with(&program, config)?;
    let result = analysis::interpret(params, &solution, config);
    tracing::debug!(
        status = %result.status,
        throughput = ?result.total_throughput,
        bottleneck = %result.bottleneck,
        "interpreted solution"
    );
    Ok(result)
}
