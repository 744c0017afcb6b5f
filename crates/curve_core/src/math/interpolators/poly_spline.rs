//! Piecewise-cubic evaluation base shared by spline interpolators.

use crate::types::InterpolationError;
use num_traits::Float;

/// Polynomial coefficients for one cubic spline segment.
///
/// Represents a cubic polynomial `y = a + b*dx + c*dx² + d*dx³` with
/// `dx = x - x_i` measured from the segment's left knot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentCoeffs<T: Float> {
    /// Constant term (y-value at the segment's left knot)
    pub a: T,
    /// Linear coefficient
    pub b: T,
    /// Quadratic coefficient
    pub c: T,
    /// Cubic coefficient
    pub d: T,
}

/// Generic piecewise-cubic spline over fitted segment coefficients.
///
/// This is the evaluation base shared by all cubic spline flavours: segment
/// lookup and polynomial evaluation are flavour-independent, while the rule
/// computing [`SegmentCoeffs`] from samples is the extension point. A new
/// spline flavour supplies its own coefficients and reuses this type
/// unchanged (see [`CubicSplineInterpolator`](super::CubicSplineInterpolator)
/// for the natural-spline fitting rule).
///
/// # Segment lookup
///
/// Evaluation at `x` selects `idx`, the greatest knot index whose x-value is
/// at most `x`; queries above the last knot clamp to the last segment and
/// queries below the first knot clamp to the first. Lookup uses binary
/// search, equivalent by contract to a linear scan for the first knot ≥ x.
#[derive(Debug, Clone)]
pub struct PolynomialSpline<T: Float> {
    /// Strictly increasing knot x-coordinates
    xs: Vec<T>,
    /// Fitted coefficients, one set per segment (`xs.len() - 1` sets)
    coeffs: Vec<SegmentCoeffs<T>>,
}

impl<T: Float> PolynomialSpline<T> {
    /// Construct a piecewise-cubic spline from knots and fitted segment
    /// coefficients.
    ///
    /// # Returns
    ///
    /// * `Ok(PolynomialSpline)` - Successfully constructed spline
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 knots
    /// * `Err(InterpolationError::NonMonotonicData)` - Knots not strictly increasing
    /// * `Err(InterpolationError::InvalidInput)` - Coefficient count not `knots - 1`
    pub fn new(xs: Vec<T>, coeffs: Vec<SegmentCoeffs<T>>) -> Result<Self, InterpolationError> {
        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }
        for i in 1..xs.len() {
            if xs[i] <= xs[i - 1] {
                return Err(InterpolationError::NonMonotonicData { index: i });
            }
        }
        if coeffs.len() != xs.len() - 1 {
            return Err(InterpolationError::InvalidInput(format!(
                "expected {} segment coefficient sets, got {}",
                xs.len() - 1,
                coeffs.len()
            )));
        }
        Ok(Self { xs, coeffs })
    }

    /// Find the segment index for evaluation using binary search.
    ///
    /// Returns the index `i` such that `xs[i] <= x < xs[i+1]`,
    /// clamped to the valid segment range [0, n-2].
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);
        if pos == 0 {
            0
        } else if pos >= self.xs.len() {
            self.xs.len() - 2
        } else {
            pos - 1
        }
    }

    /// Evaluate the spline at `x`.
    ///
    /// Evaluates `θ_idx · [1, dx, dx², dx³]` with `dx = x - xs[idx]` for the
    /// segment located by [`find_segment`](Self::find_segment). Out-of-range
    /// queries continue the boundary segment's polynomial.
    pub fn evaluate(&self, x: T) -> T {
        let i = self.find_segment(x);
        let s = &self.coeffs[i];
        let dx = x - self.xs[i];
        s.a + dx * (s.b + dx * (s.c + dx * s.d))
    }

    /// Returns a reference to the knot x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Return the knot domain as `(x_min, x_max)`.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
