//! Module describing the production line: products, processing stages, scenario parameters,
//! and the construction of the production planning linear program

pub mod model;
pub mod product;
pub mod scenario;
pub mod stage;
