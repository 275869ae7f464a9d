//! Trip-subsystem error type.
//!
//! Every failure here is a synchronous input-validation failure surfaced
//! to the caller; nothing is retried, logged, or silently substituted.
//! The selection UI is expected to prevent most of these; the checks are
//! the defensive boundary, not the primary UX.

use thiserror::Error;

/// Errors produced by `zt-trip`.
#[derive(Debug, Error)]
pub enum TripError {
    #[error("city {0:?} not found in the registry")]
    UnknownCity(String),

    #[error("average speed must be a positive number, got {0} km/h")]
    NonPositiveSpeed(f64),

    #[error("fuel efficiency must be a positive number, got {0} km/L")]
    NonPositiveEfficiency(f64),

    #[error("fuel price must be a non-negative number, got {0} per litre")]
    NegativeFuelPrice(f64),
}

/// Shorthand result type for this crate.
pub type TripResult<T> = Result<T, TripError>;
