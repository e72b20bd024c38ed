//! Module for reading and writing scenarios and results
pub mod json;

use thiserror::Error;

/// Errors raised while reading or writing files
#[derive(Error, Debug)]
pub enum IoError {
    /// The file could not be read or written
    #[error("Could not access file: {0}")]
    File(#[from] std::io::Error),
    /// The data could not be (de)serialized
    #[error("Could not (de)serialize data: {0}")]
    Serde(#[from] serde_json::Error),
}
