//! Classification of the constraint limiting throughput
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::analysis::utilization::StageUsage;
use crate::production::stage::Stage;

/// What limits throughput at the optimum
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Bottleneck {
    /// Heat treatment capacity is exhausted
    #[serde(rename = "Heat Treatment")]
    HeatTreatment,
    /// Machining capacity is exhausted
    Machining,
    /// Assembly capacity is exhausted
    Assembly,
    /// No stage is exhausted, production is limited by demand
    Demand,
}

impl From<Stage> for Bottleneck {
    fn from(value: Stage) -> Self {
        match value {
            Stage::HeatTreatment => Bottleneck::HeatTreatment,
            Stage::Machining => Bottleneck::Machining,
            Stage::Assembly => Bottleneck::Assembly,
        }
    }
}

impl Display for Bottleneck {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Bottleneck::HeatTreatment => write!(f, "Heat Treatment"),
            Bottleneck::Machining => write!(f, "Machining"),
            Bottleneck::Assembly => write!(f, "Assembly"),
            Bottleneck::Demand => write!(f, "Demand"),
        }
    }
}

/// Pick the bottleneck from the usage of the stages
///
/// Stages are checked in [`Stage::PRIORITY`] order and the first with a utilization of at
/// least `threshold_pct` wins, the threshold sits just under 100% to absorb solver round
/// off. Stages without a utilization (or a NaN one) never qualify. If no stage qualifies
/// the bottleneck is [`Bottleneck::Demand`].
pub fn classify(stages: &[StageUsage], threshold_pct: f64) -> Bottleneck {
    Stage::PRIORITY
        .iter()
        .find(|stage| {
            stages
                .iter()
                .filter(|usage| usage.stage == **stage)
                .filter_map(|usage| usage.utilization_pct)
                .any(|pct| pct >= threshold_pct)
        })
        .map(|stage| Bottleneck::from(*stage))
        .unwrap_or(Bottleneck::Demand)
}
