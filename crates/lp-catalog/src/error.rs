use lp_core::{CoreError, Minutes};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(String),

    #[error("unknown plane {0:?}")]
    UnknownPlane(String),

    #[error(
        "activity {name:?} has inconsistent durations \
         (min {min}, default {default}, max {max}, adjustable {adjustable})"
    )]
    InvalidDurations {
        name: String,
        min: Minutes,
        default: Minutes,
        max: Minutes,
        adjustable: bool,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<CoreError> for CatalogError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::UnknownPlane(name) => CatalogError::UnknownPlane(name),
            CoreError::Parse(msg) => CatalogError::Parse(msg),
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
