//! Interpolator trait definition.

use num_traits::Float;

/// Fit-once, evaluate-many 1D interpolator.
///
/// Implementations fit their model at construction time; evaluation is a
/// pure, total function of the query point. No implementation applies an
/// extrapolation *policy* — queries outside [`Self::domain`] produce the
/// documented mechanical behaviour of the method (flat hold for linear
/// interpolation, nearest-segment polynomial for splines), and callers that
/// need boundary semantics clamp before evaluating.
///
/// # Example
///
/// ```
/// use curve_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(&[0.0_f64, 1.0, 2.0], &[0.0, 2.0, 4.0]).unwrap();
/// assert_eq!(interp.domain(), (0.0, 2.0));
/// assert!((interp.interpolate(0.5) - 1.0).abs() < 1e-12);
/// ```
pub trait Interpolator<T: Float> {
    /// Evaluate the fitted interpolant at `x`.
    fn interpolate(&self, x: T) -> T;

    /// Return the fitted sample domain as `(x_min, x_max)`.
    fn domain(&self) -> (T, T);
}
