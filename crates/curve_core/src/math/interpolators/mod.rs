//! Interpolation methods for curve construction.
//!
//! This module provides the 1D interpolators used by discount curve
//! interpolation, with full generic support through `T: Float` type
//! parameters.
//!
//! ## Available Interpolators
//!
//! - [`LinearInterpolator`]: Piecewise linear interpolation between samples
//! - [`CubicSplineInterpolator`]: Natural cubic spline with C² continuity
//! - [`PolynomialSpline`]: Reusable piecewise-cubic evaluation base
//!
//! ## Core Trait
//!
//! All interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> T`: Evaluate the fitted interpolant
//! - `domain() -> (T, T)`: Return the fitted sample range
//!
//! Strategy selection goes through [`InterpolationMethod`], whose
//! [`fit`](InterpolationMethod::fit) method is the kind-to-implementation
//! registry; the fitted strategy is returned as a static-dispatch
//! [`InterpolatorEnum`].
//!
//! ## Example
//!
//! ```
//! use curve_core::math::interpolators::{InterpolationMethod, Interpolator};
//!
//! let xs = [0.0_f64, 1.0, 2.0, 3.0];
//! let ys = [0.0, 1.0, 4.0, 9.0];
//!
//! let interp = InterpolationMethod::Linear.fit(&xs, &ys).unwrap();
//! let y = interp.interpolate(1.5);
//! assert!((y - 2.5).abs() < 1e-12);
//! ```

mod cubic_spline;
mod linear;
mod poly_spline;
mod traits;

// Re-export public types at module level
pub use cubic_spline::CubicSplineInterpolator;
pub use linear::LinearInterpolator;
pub use poly_spline::{PolynomialSpline, SegmentCoeffs};
pub use traits::Interpolator;

use crate::types::InterpolationError;
use num_traits::Float;

/// Interpolation method selector.
///
/// Tags the available interpolation strategies; [`Self::fit`] maps each tag
/// to its implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationMethod {
    /// Piecewise linear interpolation.
    Linear,
    /// Natural cubic spline interpolation.
    CubicSpline,
}

impl InterpolationMethod {
    /// Fit the selected interpolator to the given samples.
    ///
    /// # Errors
    ///
    /// Propagates the construction errors of the selected interpolator:
    /// mismatched lengths, insufficient samples, or non-increasing
    /// x-values.
    ///
    /// # Example
    ///
    /// ```
    /// use curve_core::math::interpolators::{InterpolationMethod, Interpolator};
    ///
    /// let interp = InterpolationMethod::CubicSpline
    ///     .fit(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0])
    ///     .unwrap();
    /// assert_eq!(interp.domain(), (0.0, 2.0));
    /// ```
    pub fn fit<T: Float>(
        self,
        xs: &[T],
        ys: &[T],
    ) -> Result<InterpolatorEnum<T>, InterpolationError> {
        match self {
            InterpolationMethod::Linear => {
                Ok(InterpolatorEnum::Linear(LinearInterpolator::new(xs, ys)?))
            }
            InterpolationMethod::CubicSpline => Ok(InterpolatorEnum::CubicSpline(
                CubicSplineInterpolator::new(xs, ys)?,
            )),
        }
    }
}

/// Static dispatch enum wrapping concrete interpolator implementations.
///
/// Avoids trait-object overhead while letting curve code hold "some fitted
/// interpolator" as a value.
#[derive(Debug, Clone)]
pub enum InterpolatorEnum<T: Float> {
    /// Piecewise linear interpolator
    Linear(LinearInterpolator<T>),
    /// Natural cubic spline interpolator
    CubicSpline(CubicSplineInterpolator<T>),
}

impl<T: Float> Interpolator<T> for InterpolatorEnum<T> {
    fn interpolate(&self, x: T) -> T {
        match self {
            InterpolatorEnum::Linear(interp) => interp.interpolate(x),
            InterpolatorEnum::CubicSpline(interp) => interp.interpolate(x),
        }
    }

    fn domain(&self) -> (T, T) {
        match self {
            InterpolatorEnum::Linear(interp) => interp.domain(),
            InterpolatorEnum::CubicSpline(interp) => interp.domain(),
        }
    }
}

/// Validate parallel sample slices: matching lengths, at least `need`
/// points, strictly increasing x-values.
pub(crate) fn validate_samples<T: Float>(
    xs: &[T],
    ys: &[T],
    need: usize,
) -> Result<(), InterpolationError> {
    if xs.len() != ys.len() {
        return Err(InterpolationError::InvalidInput(format!(
            "xs and ys must have same length: got {} and {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() < need {
        return Err(InterpolationError::InsufficientData {
            got: xs.len(),
            need,
        });
    }
    for i in 1..xs.len() {
        if xs[i] <= xs[i - 1] {
            return Err(InterpolationError::NonMonotonicData { index: i });
        }
    }
    Ok(())
}
