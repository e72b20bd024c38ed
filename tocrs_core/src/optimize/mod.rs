//! Module for constructing and solving linear programs

pub mod constraint;
pub mod objective;
pub mod problem;
pub mod solvers;
pub mod variable;

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Struct representing the solution to a linear program
#[derive(Clone, Debug, PartialEq)]
pub struct ProblemSolution {
    /// The status of the optimization problem, representing if the optimization was
    /// completed successfully
    pub status: OptimizationStatus,
    /// Optimized value of the objective
    ///
    /// Some(f64) if the optimization was completed successfully, None otherwise
    pub objective_value: Option<f64>,
    /// Values of the variables at the optimum,
    ///
    /// Some(IndexMap), keyed by variable id, with values corresponding to variable
    /// values at optimum if the problem could be solved, None otherwise
    pub variable_values: Option<IndexMap<String, f64>>,
    /// Values of the dual variables (shadow prices) at the optimum
    ///
    /// Some(IndexMap), keyed by constraint id, with the change in the objective per unit
    /// increase of the constraint's bound if the problem could be solved, None otherwise
    pub dual_values: Option<IndexMap<String, f64>>,
    /// Slack of every constraint at the optimum
    ///
    /// Some(IndexMap), keyed by constraint id, with `bound - lhs` at the optimum if the
    /// problem could be solved, None otherwise
    pub slack_values: Option<IndexMap<String, f64>>,
}

impl ProblemSolution {
    /// Solution of a program which could not be solved to optimality, nothing but the
    /// status is known
    pub fn not_optimal(status: OptimizationStatus) -> Self {
        ProblemSolution {
            status,
            objective_value: None,
            variable_values: None,
            dual_values: None,
            slack_values: None,
        }
    }

    /// Value of a variable at the optimum
    pub fn variable_value(&self, id: &str) -> Option<f64> {
        self.variable_values.as_ref()?.get(id).copied()
    }

    /// Shadow price of a constraint at the optimum
    pub fn dual_value(&self, id: &str) -> Option<f64> {
        self.dual_values.as_ref()?.get(id).copied()
    }

    /// Slack of a constraint at the optimum
    pub fn slack_value(&self, id: &str) -> Option<f64> {
        self.slack_values.as_ref()?.get(id).copied()
    }
}

/// Status of a linear program after an attempt to solve it
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptimizationStatus {
    /// Problem has been optimized
    Optimal,
    /// Problem can't be solved because it is infeasible (conflicting constraints)
    Infeasible,
    /// Problem can't be optimized because objective value is not bounded
    Unbounded,
    /// No conclusion could be reached, because the program data was malformed or the
    /// solver stopped early
    Undefined,
}

impl Display for OptimizationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OptimizationStatus::Optimal => write!(f, "Optimal"),
            OptimizationStatus::Infeasible => write!(f, "Infeasible"),
            OptimizationStatus::Unbounded => write!(f, "Unbounded"),
            OptimizationStatus::Undefined => write!(f, "Undefined"),
        }
    }
}
