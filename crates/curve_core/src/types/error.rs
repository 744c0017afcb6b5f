//! Error types for structured error handling.
//!
//! This module provides:
//! - `RateError`: Errors from rate algebra operations
//! - `InterpolationError`: Errors from interpolator construction

use thiserror::Error;

/// Rate algebra errors.
///
/// Provides structured error handling for compounding and rate conversion
/// operations with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidFrequency`: Periodic compounding with zero periods per year
/// - `LengthMismatch`: Parallel input slices of different lengths
///
/// # Examples
/// ```
/// use curve_core::types::RateError;
///
/// let err = RateError::InvalidFrequency { m: 0 };
/// assert!(format!("{}", err).contains("0"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RateError {
    /// Periodic compounding frequency must be at least 1 period per year.
    #[error("Invalid compounding frequency: {m} periods per year")]
    InvalidFrequency {
        /// The invalid frequency value
        m: u32,
    },

    /// Parallel input slices must have the same length.
    #[error("Mismatched input lengths: got {left} and {right}")]
    LengthMismatch {
        /// Length of the first slice
        left: usize,
        /// Length of the second slice
        right: usize,
    },
}

/// Interpolation-related errors.
///
/// Provides structured error handling for interpolator construction
/// with descriptive context for each failure mode. Construction fails
/// before any fitting work is attempted; evaluation itself is total.
///
/// # Variants
/// - `InsufficientData`: Not enough sample points for the method
/// - `NonMonotonicData`: Sample x-values not strictly increasing
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use curve_core::types::InterpolationError;
///
/// let err = InterpolationError::InsufficientData { got: 1, need: 2 };
/// assert!(format!("{}", err).contains("need at least 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Insufficient sample points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Sample x-values are not strictly increasing.
    #[error("Sample points are not strictly increasing at index {index}")]
    NonMonotonicData {
        /// Index where the ordering violation was detected
        index: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
