//! Error types for curve construction and evaluation.

use crate::types::{InterpolationError, RateError};
use thiserror::Error;

/// Errors arising when building or querying a discount curve.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveError {
    /// The requested maturity is outside the valid range
    #[error("Invalid maturity: t = {t} (must be non-negative)")]
    InvalidMaturity {
        /// The invalid maturity value
        t: f64,
    },

    /// Not enough market samples to build the curve
    #[error("Insufficient curve data: got {got} samples, need at least {need}")]
    InsufficientData {
        /// Number of samples provided
        got: usize,
        /// Minimum number of samples required
        need: usize,
    },

    /// A discount factor sample is non-positive
    #[error("Invalid discount factor {df} at maturity {t} (must be positive)")]
    InvalidDiscountFactor {
        /// The maturity of the offending sample
        t: f64,
        /// The offending discount factor
        df: f64,
    },

    /// Interpolator construction or evaluation failed
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Rate conversion failed
    #[error("Rate error: {0}")]
    Rate(#[from] RateError),
}
