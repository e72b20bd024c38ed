//! Provides struct representing a linear program
use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use nalgebra::{DMatrix, DVector};
use thiserror::Error;

use crate::optimize::constraint::Constraint;
use crate::optimize::objective::{Objective, ObjectiveSense};
use crate::optimize::variable::Variable;

/// A linear program with continuous lower bounded variables, a linear objective, and
/// `<=` constraints
///
/// Variables and constraints keep the order they were added in, this order is used for
/// the columns and rows of [`LinearProgram::constraint_matrix`].
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProgram {
    /// Objective to optimize
    objective: Objective,
    /// Variables of the program, keyed by id
    variables: IndexMap<String, Variable>,
    /// Constraints of the program, keyed by id
    constraints: IndexMap<String, Constraint>,
}

impl LinearProgram {
    // region Creation Functions
    /// Create a new linear program
    pub fn new(objective_sense: ObjectiveSense) -> Self {
        Self {
            objective: Objective::new(objective_sense),
            variables: IndexMap::new(),
            constraints: IndexMap::new(),
        }
    }

    /// Create a new maximization program
    pub fn new_maximization() -> Self {
        Self::new(ObjectiveSense::Maximize)
    }

    /// Create a new minimization program
    pub fn new_minimization() -> Self {
        Self::new(ObjectiveSense::Minimize)
    }
    // endregion Creation Functions

    // region Adding Variables
    /// Add a variable to the program
    pub fn add_variable(&mut self, variable: Variable) -> Result<(), ProblemError> {
        if self.variables.contains_key(variable.id()) {
            return Err(ProblemError::VariableIdAlreadyExists(variable.id().to_string()));
        }
        self.variables.insert(variable.id().to_string(), variable);
        Ok(())
    }

    /// Create a new variable and add it to the program
    pub fn add_new_variable(
        &mut self,
        id: &str,
        name: Option<&str>,
        lower_bound: f64,
    ) -> Result<(), ProblemError> {
        self.add_variable(Variable::new(id, name, lower_bound))
    }
    // endregion Adding Variables

    // region Adding Constraints
    /// Add a constraint to the program
    pub fn add_constraint(&mut self, constraint: Constraint) -> Result<(), ProblemError> {
        self.validate_constraint(&constraint)?;
        self.constraints
            .insert(constraint.id().to_string(), constraint);
        Ok(())
    }

    /// Create a new constraint `sum(coefficients * variables) <= upper_bound` and add it to
    /// the program
    pub fn add_new_constraint(
        &mut self,
        id: &str,
        variables: &[&str],
        coefficients: &[f64],
        upper_bound: f64,
    ) -> Result<(), ProblemError> {
        if variables.len() != coefficients.len() {
            return Err(ProblemError::MismatchedTerms {
                variables: variables.len(),
                coefficients: coefficients.len(),
            });
        }
        self.add_constraint(Constraint::new_upper_bound(
            id,
            variables,
            coefficients,
            upper_bound,
        ))
    }
    // endregion Adding Constraints

    // region Adding Objective Terms
    /// Add a new linear term to the objective
    pub fn add_objective_term(
        &mut self,
        variable_id: &str,
        coefficient: f64,
    ) -> Result<(), ProblemError> {
        if !self.variables.contains_key(variable_id) {
            return Err(ProblemError::NonExistentVariablesInObjective(
                variable_id.to_string(),
            ));
        }
        self.objective.add_linear_term(variable_id, coefficient);
        Ok(())
    }
    // endregion Adding Objective Terms

    // region Accessors
    /// Objective of the program
    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    /// Variables of the program, keyed by id
    pub fn variables(&self) -> &IndexMap<String, Variable> {
        &self.variables
    }

    /// Constraints of the program, keyed by id
    pub fn constraints(&self) -> &IndexMap<String, Constraint> {
        &self.constraints
    }

    /// Current number of variables in the program
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Current number of constraints in the program
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
    // endregion Accessors

    // region Dense Views
    /// Constraint coefficients as a dense matrix, one row per constraint and one column
    /// per variable
    pub fn constraint_matrix(&self) -> DMatrix<f64> {
        let mut matrix = DMatrix::zeros(self.num_constraints(), self.num_variables());
        for (row, constraint) in self.constraints.values().enumerate() {
            for term in constraint.terms() {
                // Validated when the constraint was added
                if let Some(col) = self.variables.get_index_of(term.variable()) {
                    matrix[(row, col)] += term.coefficient();
                }
            }
        }
        matrix
    }

    /// Right hand sides of the constraints
    pub fn bounds(&self) -> DVector<f64> {
        DVector::from_iterator(
            self.num_constraints(),
            self.constraints.values().map(|c| c.upper_bound()),
        )
    }

    /// Lower bounds of the variables
    pub fn lower_bounds(&self) -> DVector<f64> {
        DVector::from_iterator(
            self.num_variables(),
            self.variables.values().map(|v| v.lower_bound()),
        )
    }

    /// Objective coefficient of every variable
    pub fn objective_coefficients(&self) -> DVector<f64> {
        DVector::from_iterator(
            self.num_variables(),
            self.variables
                .keys()
                .map(|id| self.objective.coefficient_of(id)),
        )
    }

    /// Value of the objective at the point `values` (ordered as the variables)
    pub fn evaluate_objective(&self, values: &DVector<f64>) -> f64 {
        self.objective_coefficients().dot(values)
    }

    /// Left hand side of every constraint at the point `values` (ordered as the variables)
    pub fn constraint_activity(&self, values: &DVector<f64>) -> DVector<f64> {
        self.constraint_matrix() * values
    }

    /// Whether every coefficient, bound, and objective coefficient is finite
    pub fn is_finite(&self) -> bool {
        self.constraint_matrix().iter().all(|v| v.is_finite())
            && self.bounds().iter().all(|v| v.is_finite())
            && self.lower_bounds().iter().all(|v| v.is_finite())
            && self.objective_coefficients().iter().all(|v| v.is_finite())
    }
    // endregion Dense Views

    // region Validation Functions
    /// Check that a constraint to be added is valid to add to this program
    fn validate_constraint(&self, constraint: &Constraint) -> Result<(), ProblemError> {
        if self.constraints.contains_key(constraint.id()) {
            return Err(ProblemError::ConstraintAlreadyExists(
                constraint.id().to_string(),
            ));
        }
        for var in constraint.variables() {
            if !self.variables.contains_key(var) {
                return Err(ProblemError::NonExistentVariablesInConstraint(
                    var.to_string(),
                ));
            }
        }
        Ok(())
    }
    // endregion Validation Functions
}

impl Display for LinearProgram {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.objective)?;
        writeln!(f, "subject to")?;
        for constraint in self.constraints.values() {
            writeln!(f, "    {}", constraint)?;
        }
        write!(f, "bounds")?;
        for variable in self.variables.values() {
            write!(f, "\n    {}", variable)?;
        }
        Ok(())
    }
}

/// Errors associated with building a LinearProgram
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProblemError {
    /// Error when trying to add a variable with the same id as an existing variable
    #[error("Tried to add a variable with the same id as an existing variable: {0}")]
    VariableIdAlreadyExists(String),
    /// Error when trying to add a constraint with the same id as an existing constraint
    #[error("Tried to add a constraint with the same id as an existing constraint: {0}")]
    ConstraintAlreadyExists(String),
    /// Error when trying to add a constraint that contains variables not in the program
    #[error("Tried to add a constraint with a variable not in the program: {0}")]
    NonExistentVariablesInConstraint(String),
    /// Error when trying to add an objective term which includes variables not in the program
    #[error("Tried adding an objective term with a variable not in the program: {0}")]
    NonExistentVariablesInObjective(String),
    /// Error when the number of variables and coefficients of a constraint differ
    #[error("Constraint has {variables} variables but {coefficients} coefficients")]
    MismatchedTerms {
        /// Number of variables given
        variables: usize,
        /// Number of coefficients given
        coefficients: usize,
    },
}
