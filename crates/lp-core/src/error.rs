//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `CoreError`
//! into them via `From` impls or wrap it as one variant.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The error type for `lp-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown plane {0:?}")]
    UnknownPlane(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `lp-core` operations.
pub type CoreResult<T> = Result<T, CoreError>;
