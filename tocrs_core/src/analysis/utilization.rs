//! Hours used in each stage, and the utilization they amount to
use serde::{Deserialize, Serialize};

use crate::configuration::ZeroCapacityPolicy;
use crate::production::scenario::ScenarioParameters;
use crate::production::stage::{Stage, PROCESS_TIMES};

/// Usage of a single stage at the planned production
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageUsage {
    /// The stage
    pub stage: Stage,
    /// Hours used, None when no plan is available
    pub used: Option<f64>,
    /// Hours available
    pub capacity: f64,
    /// Used hours as a percentage of available hours, None when no plan is available
    pub utilization_pct: Option<f64>,
    /// Whether the stage has no capacity at all, see [`ZeroCapacityPolicy`] for how its
    /// utilization is reported
    pub zero_capacity: bool,
}

/// Usage of every stage (in [`Stage::PRIORITY`] order) when making `quantities` units
/// of product A and B
pub fn stage_usage(
    params: &ScenarioParameters,
    quantities: Option<(f64, f64)>,
    policy: ZeroCapacityPolicy,
) -> Vec<StageUsage> {
    let hours = quantities.map(|(a, b)| PROCESS_TIMES.stage_hours(a, b));
    Stage::PRIORITY
        .iter()
        .map(|stage| {
            let capacity = params.capacity(*stage);
            let used = hours.map(|h| h[stage.index()]);
            StageUsage {
                stage: *stage,
                used,
                capacity,
                utilization_pct: used.map(|u| utilization_pct(u, capacity, policy)),
                zero_capacity: capacity == 0.,
            }
        })
        .collect()
}

/// Percentage of `capacity` taken by `used`
///
/// A capacity of exactly zero is reported following `policy` rather than dividing by zero.
pub fn utilization_pct(used: f64, capacity: f64, policy: ZeroCapacityPolicy) -> f64 {
    if capacity == 0. {
        return match policy {
            ZeroCapacityPolicy::FullyUtilized => 100.,
            ZeroCapacityPolicy::NotANumber => f64::NAN,
        };
    }
    used / capacity * 100.
}
