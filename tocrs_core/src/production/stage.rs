//! This module provides the processing stages of the line, and the fixed table of
//! processing times
use std::fmt::{Display, Formatter};

use nalgebra::{Matrix3x2, Vector2, Vector3};
use serde::{Deserialize, Serialize};

use crate::production::product::Product;

/// A resource stage every unit passes through
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Stage {
    /// Heat treatment furnaces
    #[serde(rename = "Heat Treatment")]
    HeatTreatment,
    /// Machining centers
    Machining,
    /// Final assembly
    Assembly,
}

impl Stage {
    /// Stages in bottleneck priority order, this is also the order stages are reported in
    pub const PRIORITY: [Stage; 3] = [Stage::HeatTreatment, Stage::Machining, Stage::Assembly];

    /// Stages in the order their capacity constraints are added to the program
    pub const CONSTRAINT_ORDER: [Stage; 3] =
        [Stage::Machining, Stage::HeatTreatment, Stage::Assembly];

    /// Id of the capacity constraint for this stage
    pub fn constraint_id(&self) -> &'static str {
        match self {
            Stage::HeatTreatment => "heat_treatment",
            Stage::Machining => "machining",
            Stage::Assembly => "assembly",
        }
    }

    /// Human readable label of the stage
    pub fn label(&self) -> &'static str {
        match self {
            Stage::HeatTreatment => "Heat Treatment",
            Stage::Machining => "Machining",
            Stage::Assembly => "Assembly",
        }
    }

    /// Position of the stage in [`Stage::PRIORITY`]
    pub const fn index(&self) -> usize {
        match self {
            Stage::HeatTreatment => 0,
            Stage::Machining => 1,
            Stage::Assembly => 2,
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Hours each unit of a product spends in each stage
///
/// # Notes:
/// The table is a process wide constant (see [`PROCESS_TIMES`]), it supplies the structural
/// coefficients of the planning program and does not depend on the scenario.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessTimeTable {
    /// Hours per unit, indexed by [`Stage::index`] then [`Product::index`]
    hours: [[f64; 2]; 3],
}

/// Processing times of the line, in hours per unit
pub const PROCESS_TIMES: ProcessTimeTable = ProcessTimeTable {
    hours: [
        // Heat treatment
        [4.0, 2.0],
        // Machining
        [2.5, 1.5],
        // Assembly
        [2.0, 1.5],
    ],
};

impl ProcessTimeTable {
    /// Hours a single unit of `product` needs in `stage`
    pub const fn hours(&self, stage: Stage, product: Product) -> f64 {
        self.hours[stage.index()][product.index()]
    }

    /// Per unit hours of all products in a stage, ordered as [`Product::ALL`]
    pub fn stage_row(&self, stage: Stage) -> [f64; 2] {
        self.hours[stage.index()]
    }

    /// The table as a matrix, rows are stages in [`Stage::PRIORITY`] order and columns
    /// are products in [`Product::ALL`] order
    pub fn matrix(&self) -> Matrix3x2<f64> {
        let h = &self.hours;
        Matrix3x2::new(
            h[0][0], h[0][1], //
            h[1][0], h[1][1], //
            h[2][0], h[2][1],
        )
    }

    /// Hours used in each stage (in [`Stage::PRIORITY`] order) to make the given quantities
    pub fn stage_hours(&self, product_a: f64, product_b: f64) -> Vector3<f64> {
        self.matrix() * Vector2::new(product_a, product_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_times() {
        assert!((PROCESS_TIMES.hours(Stage::Machining, Product::A) - 2.5).abs() < 1e-25);
        assert!((PROCESS_TIMES.hours(Stage::Machining, Product::B) - 1.5).abs() < 1e-25);
        assert!((PROCESS_TIMES.hours(Stage::HeatTreatment, Product::A) - 4.0).abs() < 1e-25);
        assert!((PROCESS_TIMES.hours(Stage::HeatTreatment, Product::B) - 2.0).abs() < 1e-25);
        assert!((PROCESS_TIMES.hours(Stage::Assembly, Product::A) - 2.0).abs() < 1e-25);
        assert!((PROCESS_TIMES.hours(Stage::Assembly, Product::B) - 1.5).abs() < 1e-25);
    }

    #[test]
    fn hours_match_matrix() {
        let matrix = PROCESS_TIMES.matrix();
        for stage in Stage::PRIORITY {
            for product in Product::ALL {
                assert_eq!(
                    PROCESS_TIMES.hours(stage, product),
                    matrix[(stage.index(), product.index())]
                );
            }
            assert_eq!(
                PROCESS_TIMES.stage_row(stage),
                [
                    PROCESS_TIMES.hours(stage, Product::A),
                    PROCESS_TIMES.hours(stage, Product::B)
                ]
            );
        }
    }

    #[test]
    fn stage_hours() {
        let used = PROCESS_TIMES.stage_hours(10., 80.);
        assert!((used[Stage::HeatTreatment.index()] - 200.).abs() < 1e-12);
        assert!((used[Stage::Machining.index()] - 145.).abs() < 1e-12);
        assert!((used[Stage::Assembly.index()] - 140.).abs() < 1e-12);
    }

    #[test]
    fn priority_matches_index() {
        for (i, stage) in Stage::PRIORITY.iter().enumerate() {
            assert_eq!(stage.index(), i);
        }
        assert_eq!(Stage::HeatTreatment.to_string(), "Heat Treatment");
    }
}
