//! Solving several scenarios and comparing their outcomes
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::result::SolutionResult;
use crate::configuration::Configuration;
use crate::production::scenario::Scenario;
use crate::{solve_scenario_with, TocError};

/// A scenario together with the result of solving it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// The scenario which was solved
    pub scenario: Scenario,
    /// Result of solving it
    pub result: SolutionResult,
}

/// Gain of the best scenario over the baseline (the first scenario)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    /// Difference in total throughput
    pub absolute: f64,
    /// Difference as a percentage of the baseline throughput, None when the baseline
    /// throughput is zero
    pub percent: Option<f64>,
}

/// Outcomes of a set of scenarios, in the order the scenarios were given
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioComparison {
    /// Outcome of every scenario
    outcomes: Vec<ScenarioOutcome>,
    /// Tolerance within which two throughputs are considered equal
    tolerance: f64,
}

impl ScenarioComparison {
    /// Create a comparison from already solved outcomes
    pub fn new(outcomes: Vec<ScenarioOutcome>, tolerance: f64) -> Self {
        ScenarioComparison {
            outcomes,
            tolerance,
        }
    }

    /// Outcome of every scenario
    pub fn outcomes(&self) -> &[ScenarioOutcome] {
        &self.outcomes
    }

    /// Highest throughput among the optimal outcomes
    fn best_throughput(&self) -> Option<f64> {
        self.outcomes
            .iter()
            .filter(|o| o.result.is_optimal())
            .filter_map(|o| o.result.total_throughput)
            .reduce(f64::max)
    }

    /// Index of the first outcome reaching the highest throughput
    ///
    /// Outcomes which were not solved to optimality never count as best. None if no
    /// outcome was solved to optimality.
    pub fn best_index(&self) -> Option<usize> {
        (0..self.outcomes.len()).find(|i| self.is_best(*i))
    }

    /// The first outcome reaching the highest throughput, see [`Self::best_index`]
    pub fn best(&self) -> Option<&ScenarioOutcome> {
        self.best_index().map(|i| &self.outcomes[i])
    }

    /// Whether the outcome at `index` reaches the highest throughput, ties all count
    pub fn is_best(&self, index: usize) -> bool {
        let Some(best) = self.best_throughput() else {
            return false;
        };
        self.outcomes
            .get(index)
            .filter(|o| o.result.is_optimal())
            .and_then(|o| o.result.total_throughput)
            .is_some_and(|t| (best - t).abs() <= self.tolerance)
    }

    /// Improvement of the best outcome over the first one
    ///
    /// None when the first outcome or no outcome at all was solved to optimality.
    pub fn improvement_over_baseline(&self) -> Option<Improvement> {
        let baseline = self
            .outcomes
            .first()
            .filter(|o| o.result.is_optimal())
            .and_then(|o| o.result.total_throughput)?;
        let best = self.best_throughput()?;
        let absolute = best - baseline;
        let percent = if baseline == 0. {
            None
        } else {
            Some(absolute / baseline * 100.)
        };
        Some(Improvement { absolute, percent })
    }

    /// Summary of the comparison with the best outcomes marked, this is what gets
    /// serialized
    pub fn report(&self) -> ComparisonReport<'_> {
        ComparisonReport {
            outcomes: self
                .outcomes
                .iter()
                .enumerate()
                .map(|(i, outcome)| RankedOutcome {
                    outcome,
                    is_best: self.is_best(i),
                })
                .collect(),
            best_index: self.best_index(),
            improvement: self.improvement_over_baseline(),
            tolerance: self.tolerance,
        }
    }
}

/// An outcome together with whether it reaches the highest throughput
#[derive(Clone, Debug, Serialize)]
pub struct RankedOutcome<'a> {
    #[serde(flatten)]
    pub outcome: &'a ScenarioOutcome,
    pub is_best: bool,
}

/// Serializable summary of a [`ScenarioComparison`]
#[derive(Clone, Debug, Serialize)]
pub struct ComparisonReport<'a> {
    /// Every outcome, in the order the scenarios were given
    pub outcomes: Vec<RankedOutcome<'a>>,
    /// See [`ScenarioComparison::best_index`]
    pub best_index: Option<usize>,
    /// See [`ScenarioComparison::improvement_over_baseline`]
    pub improvement: Option<Improvement>,
    pub tolerance: f64,
}

/// Solve every scenario independently and compare the outcomes
///
/// When `config.processes` is larger than one the scenarios are solved on a thread pool of
/// that size, the order of the outcomes always matches the order of `scenarios`.
pub fn solve_all(
    scenarios: &[Scenario],
    config: &Configuration,
) -> Result<ScenarioComparison, TocError> {
    let solve_one = |scenario: &Scenario| -> Result<ScenarioOutcome, TocError> {
        let result = solve_scenario_with(&scenario.parameters, config)?;
        tracing::info!(
            scenario = %scenario.name,
            status = %result.status,
            throughput = ?result.total_throughput,
            bottleneck = %result.bottleneck,
            "solved scenario"
        );
        Ok(ScenarioOutcome {
            scenario: scenario.clone(),
            result,
        })
    };

    let outcomes = if config.processes > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.processes as usize)
            .build()
            .map_err(|e| TocError::ThreadPool(e.to_string()))?;
        pool.install(|| {
            scenarios
                .par_iter()
                .map(solve_one)
                .collect::<Result<Vec<_>, _>>()
        })?
    } else {
        scenarios
            .iter()
            .map(solve_one)
            .collect::<Result<Vec<_>, _>>()?
    };
    Ok(ScenarioComparison::new(outcomes, config.tolerance))
}
