//! Provides struct for representing a constraint in an optimization problem
use std::fmt::{Display, Formatter};

/// Represents a linear constraint of the form `terms <= upper_bound`
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Used to identify the constraint
    id: String,
    /// Linear terms which are added together, see [`ConstraintTerm`] for more
    terms: Vec<ConstraintTerm>,
    /// The highest value the sum of the terms can take
    upper_bound: f64,
}

impl Constraint {
    /// Create a new upper bounded constraint
    ///
    /// # Parameters
    /// - `id`: Id of the constraint
    /// - `variables`: A slice of variable ids
    /// - `coefficients`: A slice of coefficients for the variables
    /// - `upper_bound`: The highest value the constraint can take
    ///
    /// # Returns
    /// A new constraint, extra variables or coefficients (when the slices have different
    /// lengths) are ignored
    ///
    /// # Examples
    /// ```rust
    /// use tocrs_core::optimize::constraint::Constraint;
    /// // Represents 2.5*x + 1.5*y <= 200
    /// let new_constraint = Constraint::new_upper_bound("machining", &["x", "y"], &[2.5, 1.5], 200.);
    /// assert_eq!(new_constraint.to_string(), "machining: 2.5*x + 1.5*y <= 200");
    /// ```
    pub fn new_upper_bound(
        id: &str,
        variables: &[&str],
        coefficients: &[f64],
        upper_bound: f64,
    ) -> Self {
        Constraint {
            id: id.to_string(),
            terms: Constraint::zip_into_terms(variables, coefficients),
            upper_bound,
        }
    }

    /// Id of the constraint
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Terms of the constraint
    pub fn terms(&self) -> &[ConstraintTerm] {
        &self.terms
    }

    /// Right hand side of the constraint
    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    /// Ids of the variables appearing in the constraint
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.variable.as_str())
    }

    /// Take a slice of variable ids, and a slice of coefficients and zip
    /// them together into a vec of ConstraintTerms
    fn zip_into_terms(variables: &[&str], coefficients: &[f64]) -> Vec<ConstraintTerm> {
        variables
            .iter()
            .zip(coefficients)
            .map(|(var, coef)| ConstraintTerm::new(var, *coef))
            .collect()
    }

    /// Convert the terms into a String representation
    fn terms_to_string(&self) -> String {
        if self.terms.is_empty() {
            return "0".to_string();
        }
        self.terms
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} <= {}",
            self.id,
            self.terms_to_string(),
            self.upper_bound
        )
    }
}

/// Represents a single term in a constraint, specifically
/// represents the multiplication of the `variable` by the `coefficient`
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintTerm {
    /// Id of the variable
    variable: String,
    /// The coefficient for the variable
    coefficient: f64,
}

impl ConstraintTerm {
    /// Create a new constraint term
    pub fn new(variable: &str, coefficient: f64) -> Self {
        ConstraintTerm {
            variable: variable.to_string(),
            coefficient,
        }
    }

    /// Id of the variable in the term
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Coefficient of the term
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }
}

impl Display for ConstraintTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}*{}", self.coefficient, self.variable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_terms() {
        let cons = Constraint::new_upper_bound("c", &["x", "y", "z"], &[1., 2.], 3.);
        assert_eq!(cons.terms().len(), 2);
        assert_eq!(cons.variables().collect::<Vec<_>>(), vec!["x", "y"]);
        assert!((cons.terms()[1].coefficient() - 2.).abs() < 1e-25);
    }

    #[test]
    fn display_empty() {
        let cons = Constraint::new_upper_bound("empty", &[], &[], 1.);
        assert_eq!(cons.to_string(), "empty: 0 <= 1");
    }
}
