//! This module provides the Product enum, representing the products made on the line
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A product which can be manufactured
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Product {
    /// Product A
    A,
    /// Product B
    B,
}

impl Product {
    /// All products, in the order their decision variables appear in the program
    pub const ALL: [Product; 2] = [Product::A, Product::B];

    /// Id of the decision variable holding the number of units of this product
    pub fn variable_id(&self) -> &'static str {
        match self {
            Product::A => "product_a",
            Product::B => "product_b",
        }
    }

    /// Id of the constraint capping production of this product at its demand
    pub fn demand_constraint_id(&self) -> &'static str {
        match self {
            Product::A => "demand_a",
            Product::B => "demand_b",
        }
    }

    /// Position of the product in [`Product::ALL`]
    pub const fn index(&self) -> usize {
        match self {
            Product::A => 0,
            Product::B => 1,
        }
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Product::A => write!(f, "Product A"),
            Product::B => write!(f, "Product B"),
        }
    }
}
