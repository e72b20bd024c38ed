//! This module provides the parameters describing a planning scenario, and named scenarios
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::production::product::Product;
use crate::production::stage::Stage;

/// Parameters of a single planning scenario
///
/// Capacities are hours available per stage, demands cap the units of each product which
/// can be sold, and profits are per unit. No validation is done on sign or magnitude,
/// nonsensical values simply lead to a program which can't be solved to optimality.
#[derive(Builder, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioParameters {
    /// Hours of heat treatment available
    #[builder(default = "BASELINE.capacity_heat_treatment")]
    #[serde(rename = "heat_treatment")]
    pub capacity_heat_treatment: f64,
    /// Hours of machining available
    #[builder(default = "BASELINE.capacity_machining")]
    #[serde(rename = "machining")]
    pub capacity_machining: f64,
    /// Hours of assembly available
    #[builder(default = "BASELINE.capacity_assembly")]
    #[serde(rename = "assembly")]
    pub capacity_assembly: f64,
    /// Most units of product A which can be sold
    #[builder(default = "BASELINE.demand_a")]
    pub demand_a: f64,
    /// Most units of product B which can be sold
    #[builder(default = "BASELINE.demand_b")]
    pub demand_b: f64,
    /// Profit per unit of product A
    #[builder(default = "BASELINE.profit_a")]
    pub profit_a: f64,
    /// Profit per unit of product B
    #[builder(default = "BASELINE.profit_b")]
    pub profit_b: f64,
}

/// The canonical baseline scenario
pub const BASELINE: ScenarioParameters = ScenarioParameters {
    capacity_heat_treatment: 160.,
    capacity_machining: 200.,
    capacity_assembly: 180.,
    demand_a: 50.,
    demand_b: 80.,
    profit_a: 90.,
    profit_b: 60.,
};

impl Default for ScenarioParameters {
    fn default() -> Self {
        BASELINE
    }
}

impl ScenarioParameters {
    /// Create a new set of scenario parameters
    ///
    /// # Examples
    /// ```rust
    /// use tocrs_core::production::scenario::ScenarioParameters;
    /// // Baseline line, with the heat treatment furnaces running extra shifts
    /// let params = ScenarioParameters::new(200., 200., 180., 50., 80., 90., 60.);
    /// assert_eq!(params.capacity_heat_treatment, 200.);
    /// ```
    pub fn new(
        capacity_heat_treatment: f64,
        capacity_machining: f64,
        capacity_assembly: f64,
        demand_a: f64,
        demand_b: f64,
        profit_a: f64,
        profit_b: f64,
    ) -> Self {
        ScenarioParameters {
            capacity_heat_treatment,
            capacity_machining,
            capacity_assembly,
            demand_a,
            demand_b,
            profit_a,
            profit_b,
        }
    }

    /// Hours available in a stage
    pub fn capacity(&self, stage: Stage) -> f64 {
        match stage {
            Stage::HeatTreatment => self.capacity_heat_treatment,
            Stage::Machining => self.capacity_machining,
            Stage::Assembly => self.capacity_assembly,
        }
    }

    /// Demand cap of a product
    pub fn demand(&self, product: Product) -> f64 {
        match product {
            Product::A => self.demand_a,
            Product::B => self.demand_b,
        }
    }

    /// Per unit profit of a product
    pub fn profit(&self, product: Product) -> f64 {
        match product {
            Product::A => self.profit_a,
            Product::B => self.profit_b,
        }
    }

    /// Copy of these parameters with the capacity of one stage replaced
    pub fn with_capacity(mut self, stage: Stage, capacity: f64) -> Self {
        match stage {
            Stage::HeatTreatment => self.capacity_heat_treatment = capacity,
            Stage::Machining => self.capacity_machining = capacity,
            Stage::Assembly => self.capacity_assembly = capacity,
        }
        self
    }
}

/// A named set of scenario parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Name shown for the scenario
    pub name: String,
    /// Parameters of the scenario
    #[serde(flatten)]
    pub parameters: ScenarioParameters,
}

impl Scenario {
    /// Create a new named scenario
    pub fn new(name: &str, parameters: ScenarioParameters) -> Self {
        Scenario {
            name: name.to_string(),
            parameters,
        }
    }

    /// The baseline scenario
    pub fn baseline() -> Self {
        Scenario::new("Baseline", BASELINE)
    }

    /// The baseline with heat treatment capacity raised to 200 hours
    pub fn elevate_bottleneck() -> Self {
        Scenario::new(
            "Elevate Bottleneck",
            BASELINE.with_capacity(Stage::HeatTreatment, 200.),
        )
    }

    /// The baseline with the profit of product A raised to 140
    pub fn premium_product_a() -> Self {
        Scenario::new(
            "Premium Product A",
            ScenarioParameters {
                profit_a: 140.,
                ..BASELINE
            },
        )
    }
}

/// The three canonical scenarios, baseline first
pub fn default_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::baseline(),
        Scenario::elevate_bottleneck(),
        Scenario::premium_product_a(),
    ]
}
