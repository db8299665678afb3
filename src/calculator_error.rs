use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Invalid load {0:?}, expected a number optionally followed by lb or kg.")]
    InvalidLoad(String),
    #[error("Invalid weight unit {0:?}.")]
    InvalidUnit(String),
    #[error("Invalid bar {0:?}, expected standard, womens or a weight in pounds.")]
    InvalidBar(String),
    #[error("Invalid warm-up percentages: {0}")]
    InvalidPercentages(String),
    #[error("Configuration {0} needs at least one positive plate per unit.")]
    InvalidConfig(PathBuf),
    #[error("No configuration directory available on this platform.")]
    NoConfigDir,
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
