//! Error types for BarberMatch

use thiserror::Error;

/// BarberMatch error type
#[derive(Error, Debug)]
pub enum BarberMatchError {
    /// Plan identifier outside the closed set
    #[error("unknown plan: {0}")]
    UnknownPlan(String),

    /// Feature identifier outside the closed set
    #[error("unknown feature: {0}")]
    UnknownFeature(String),
}

/// Result type for BarberMatch
pub type BarberMatchResult<T> = Result<T, BarberMatchError>;
