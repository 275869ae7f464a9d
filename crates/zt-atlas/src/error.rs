//! Atlas error type.

use thiserror::Error;

/// Errors produced by `zt-atlas`.
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("city {0:?} not found in the registry")]
    UnknownCity(String),

    #[error("city {0:?} registered twice")]
    DuplicateCity(String),

    #[error("invalid road distance {km} km from {from:?} to {to:?}")]
    InvalidDistance { from: String, to: String, km: f64 },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for this crate.
pub type AtlasResult<T> = Result<T, AtlasError>;
