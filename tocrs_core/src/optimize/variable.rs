//! Module providing representation of optimization problem variables
use std::fmt::{Display, Formatter};

/// A continuous decision variable, bounded below and unbounded above
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Used to identify the variable
    id: String,
    /// Human readable name
    name: Option<String>,
    /// Smallest value the variable can take
    lower_bound: f64,
}

impl Variable {
    /// Create a new variable
    pub fn new(id: &str, name: Option<&str>, lower_bound: f64) -> Variable {
        Variable {
            id: id.to_string(),
            name: name.map(str::to_string),
            lower_bound,
        }
    }

    /// Create a new variable restricted to the non-negative reals
    pub fn non_negative(id: &str, name: Option<&str>) -> Variable {
        Variable::new(id, name, 0.)
    }

    /// Id of the variable
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name of the variable, if one was given
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Lower bound of the variable
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} >= {}", name, self.lower_bound),
            None => write!(f, "{} >= {}", self.id, self.lower_bound),
        }
    }
}
