//! Natural cubic spline interpolation.

use super::poly_spline::{PolynomialSpline, SegmentCoeffs};
use super::{validate_samples, Interpolator};
use crate::types::InterpolationError;
use num_traits::Float;

/// Natural cubic spline interpolator with C² continuity.
///
/// Fits an interpolating cubic spline through all samples with zero second
/// derivative at both boundaries (no smoothing or penalty term), then stores
/// the segment coefficients in a [`PolynomialSpline`] for evaluation. The
/// spline is exact at the knots and smooth between them.
///
/// This type is one fitting rule over the shared [`PolynomialSpline`]
/// evaluation base; other spline flavours differ only in how the segment
/// coefficients are computed.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Construction
///
/// Samples must be supplied in strictly increasing x order; at least 3
/// points are required.
///
/// # Example
///
/// ```
/// use curve_core::math::interpolators::{Interpolator, CubicSplineInterpolator};
///
/// let xs = [0.0_f64, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 4.0, 9.0];
///
/// let interp = CubicSplineInterpolator::new(&xs, &ys).unwrap();
/// // Exact at knots
/// assert!((interp.interpolate(2.0) - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSplineInterpolator<T: Float> {
    /// Fitted piecewise-cubic segments
    spline: PolynomialSpline<T>,
}

impl<T: Float> CubicSplineInterpolator<T> {
    /// Construct a natural cubic spline from x and y samples.
    ///
    /// # Arguments
    ///
    /// * `xs` - Slice of strictly increasing x-coordinates
    /// * `ys` - Slice of corresponding y-values
    ///
    /// # Returns
    ///
    /// * `Ok(CubicSplineInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 3 samples
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched slice lengths
    /// * `Err(InterpolationError::NonMonotonicData)` - x-values not strictly increasing
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        validate_samples(xs, ys, 3)?;
        let coeffs = natural_coefficients(xs, ys);
        let spline = PolynomialSpline::new(xs.to_vec(), coeffs)?;
        Ok(Self { spline })
    }

    /// Returns a reference to the knot x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        self.spline.xs()
    }

    /// Returns the number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.spline.xs().len()
    }

    /// Returns true if the interpolator has no samples.
    /// Never true for a successfully constructed interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spline.xs().is_empty()
    }
}

/// Compute natural cubic spline segment coefficients.
///
/// Solves the tridiagonal system for the second derivatives M at the knots
/// (Thomas algorithm) with natural boundaries `M[0] = M[n-1] = 0`, then
/// derives the per-segment polynomial coefficients.
fn natural_coefficients<T: Float>(xs: &[T], ys: &[T]) -> Vec<SegmentCoeffs<T>> {
    let n = xs.len();
    let two = T::from(2.0).unwrap();
    let six = T::from(6.0).unwrap();

    // Intervals h[i] = x[i+1] - x[i]
    let h: Vec<T> = (0..n - 1).map(|i| xs[i + 1] - xs[i]).collect();

    // Interior equations:
    // h[i-1]*M[i-1] + 2*(h[i-1]+h[i])*M[i] + h[i]*M[i+1]
    //   = 6*((y[i+1]-y[i])/h[i] - (y[i]-y[i-1])/h[i-1])
    let interior = n - 2;

    let mut diag: Vec<T> = Vec::with_capacity(interior);
    let mut rhs: Vec<T> = Vec::with_capacity(interior);
    for i in 1..n - 1 {
        diag.push(two * (h[i - 1] + h[i]));
        rhs.push(six * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]));
    }

    // Thomas algorithm - forward elimination
    let mut c_prime: Vec<T> = Vec::with_capacity(interior);
    let mut d_prime: Vec<T> = Vec::with_capacity(interior);

    if interior > 1 {
        c_prime.push(h[1] / diag[0]);
    }
    d_prime.push(rhs[0] / diag[0]);

    for i in 1..interior {
        let denom = diag[i] - h[i] * c_prime[i - 1];
        if i < interior - 1 {
            c_prime.push(h[i + 1] / denom);
        }
        d_prime.push((rhs[i] - h[i] * d_prime[i - 1]) / denom);
    }

    // Thomas algorithm - back substitution; natural boundary leaves
    // m[0] and m[n-1] at zero.
    let mut m: Vec<T> = vec![T::zero(); n];
    m[n - 2] = d_prime[interior - 1];
    for i in (1..interior).rev() {
        m[i] = d_prime[i - 1] - c_prime[i - 1] * m[i + 1];
    }

    // Per-segment polynomial coefficients
    (0..n - 1)
        .map(|i| SegmentCoeffs {
            a: ys[i],
            b: (ys[i + 1] - ys[i]) / h[i] - h[i] * (two * m[i] + m[i + 1]) / six,
            c: m[i] / two,
            d: (m[i + 1] - m[i]) / (six * h[i]),
        })
        .collect()
}

impl<T: Float> Interpolator<T> for CubicSplineInterpolator<T> {
    /// Evaluate the spline at `x`.
    ///
    /// Delegates to the [`PolynomialSpline`] base: O(log n) segment lookup
    /// followed by cubic polynomial evaluation. Out-of-range queries
    /// continue the boundary segment's polynomial.
    fn interpolate(&self, x: T) -> T {
        self.spline.evaluate(x)
    }

    /// Return the fitted sample domain.
    #[inline]
    fn domain(&self) -> (T, T) {
        self.spline.domain()
    }
}
