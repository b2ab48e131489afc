//! Error types for the vector reporter.

use thiserror::Error;
use xoshiro_core_rs::{SeedError, VectorError};

/// CLI result type alias.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type.
#[derive(Error, Debug)]
pub enum CliError {
    /// IO error while reading config or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed given on the command line is malformed.
    #[error("Invalid seed: {0}")]
    Seed(#[from] SeedError),

    /// Config file could not be parsed or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] VectorError),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Text rendering failed.
    #[error("Format error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Fixture text could not be parsed.
    #[error("Fixture line {line}: {message}")]
    Fixture { line: usize, message: String },

    /// Fixture values differ from what the generator produces.
    #[error("Verification failed: {0}")]
    Verify(VectorError),
}
