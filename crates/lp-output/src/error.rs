//! Error types for lp-output.

use lp_engine::PlanError;
use thiserror::Error;

/// Errors that can occur when persisting or exporting a plan.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored snapshot disagrees with the live catalog (or registry).
    #[error("snapshot mismatch: {0}")]
    Mismatch(String),

    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
