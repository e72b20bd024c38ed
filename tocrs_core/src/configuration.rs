//! Configuration of the solver backends and of the interpretation of results
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Settings used when solving and interpreting a scenario
///
/// Passed explicitly to every solve, a default is available through [`Default`] or
/// [`ConfigurationBuilder`].
#[derive(Builder, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Absolute tolerance within which the throughputs of two scenarios count as tied
    #[builder(default = "1e-6")]
    pub tolerance: f64,
    /// Utilization (in percent) at or above which a stage counts as the bottleneck
    #[builder(default = "99.9")]
    pub bottleneck_threshold_pct: f64,
    /// Backend used to solve the linear programs
    #[builder(default = "SolverBackend::Microlp")]
    pub solver: SolverBackend,
    /// Number of threads used when solving several scenarios
    #[builder(default = "1")]
    pub processes: u32,
    /// Iteration limit handed to the interior point backend
    #[builder(default = "200")]
    pub max_iterations: u32,
    /// Feasibility and optimality gap tolerance handed to the interior point backend
    #[builder(default = "1e-9")]
    pub solver_tolerance: f64,
    /// How utilization of a stage with no capacity is reported
    #[builder(default = "ZeroCapacityPolicy::FullyUtilized")]
    pub zero_capacity: ZeroCapacityPolicy,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            tolerance: 1e-6,
            bottleneck_threshold_pct: 99.9,
            solver: SolverBackend::Microlp,
            processes: 1,
            max_iterations: 200,
            solver_tolerance: 1e-9,
            zero_capacity: ZeroCapacityPolicy::FullyUtilized,
        }
    }
}

/// Enum used to specify the solver backend to use
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverBackend {
    /// Use the microlp simplex solver, solutions are always a vertex of the feasible region
    Microlp,
    /// Use the Clarabel interior point solver, requires the clarabel feature to be enabled
    ///
    /// Solutions are only feasible up to the relative `solver_tolerance`, and when a whole
    /// edge is optimal the point returned lies inside that edge.
    Clarabel,
}

/// Utilization reported for a stage whose capacity is exactly zero
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZeroCapacityPolicy {
    /// The stage is reported as 100% utilized, and so can be the bottleneck
    FullyUtilized,
    /// The stage is reported with NaN utilization, and is never the bottleneck
    NotANumber,
}
