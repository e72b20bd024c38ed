//! The record produced for every solved scenario
use serde::{Deserialize, Serialize};

use crate::analysis::bottleneck::Bottleneck;
use crate::analysis::utilization::StageUsage;
use crate::optimize::OptimizationStatus;
use crate::production::stage::Stage;

/// Shadow price and slack of a single constraint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstraintRow {
    /// Id of the constraint
    pub name: String,
    /// Increase in total throughput per unit increase of the constraint's bound
    pub shadow_price: Option<f64>,
    /// Unused amount of the constraint's bound
    pub slack: Option<f64>,
}

/// Result of solving a scenario
///
/// If `status` is anything but [`OptimizationStatus::Optimal`], every value derived from
/// the solution is `None` and `bottleneck` is [`Bottleneck::Demand`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolutionResult {
    /// Status of the solve
    pub status: OptimizationStatus,
    /// Units of product A to make
    pub product_a: Option<f64>,
    /// Units of product B to make
    pub product_b: Option<f64>,
    /// Total profit of the plan
    pub total_throughput: Option<f64>,
    /// Usage of every stage, in [`Stage::PRIORITY`] order
    pub stages: Vec<StageUsage>,
    /// What limits throughput
    pub bottleneck: Bottleneck,
    /// Shadow price and slack of every constraint
    pub constraints: Vec<ConstraintRow>,
}

impl SolutionResult {
    /// Whether the values of the result can be trusted
    pub fn is_optimal(&self) -> bool {
        self.status == OptimizationStatus::Optimal
    }

    /// Usage of a stage
    pub fn stage(&self, stage: Stage) -> Option<&StageUsage> {
        self.stages.iter().find(|s| s.stage == stage)
    }

    /// Row of the constraint table with the given id
    pub fn constraint(&self, name: &str) -> Option<&ConstraintRow> {
        self.constraints.iter().find(|c| c.name == name)
    }

    /// Constraints with no slack left (within `tolerance`) at the optimum
    pub fn binding_constraints(&self, tolerance: f64) -> Vec<&ConstraintRow> {
        self.constraints
            .iter()
            .filter(|c| c.slack.is_some_and(|s| s.abs() <= tolerance))
            .collect()
    }
}
