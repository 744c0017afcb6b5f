//! Linear interpolation implementation.

use super::{validate_samples, Interpolator};
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear interpolator.
///
/// Stores strictly increasing (x, y) samples and interpolates linearly
/// between adjacent points. Queries outside the sample domain hold the
/// nearest boundary value flat, matching standard array interpolation
/// behaviour.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Construction
///
/// Samples must be supplied in strictly increasing x order; at least 2
/// points are required. Violations are construction-time errors.
///
/// # Example
///
/// ```
/// use curve_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 2.0, 4.0, 6.0];
///
/// let interp = LinearInterpolator::new(&xs, &ys).unwrap();
/// assert_eq!(interp.domain(), (0.0, 3.0));
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    /// Strictly increasing x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values
    ys: Vec<T>,
}

impl<T: Float> LinearInterpolator<T> {
    /// Construct a linear interpolator from x and y samples.
    ///
    /// # Arguments
    ///
    /// * `xs` - Slice of strictly increasing x-coordinates
    /// * `ys` - Slice of corresponding y-values
    ///
    /// # Returns
    ///
    /// * `Ok(LinearInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 samples
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched slice lengths
    /// * `Err(InterpolationError::NonMonotonicData)` - x-values not strictly increasing
    ///
    /// # Example
    ///
    /// ```
    /// use curve_core::math::interpolators::LinearInterpolator;
    ///
    /// let interp = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
    ///
    /// let result = LinearInterpolator::new(&[0.0], &[0.0]);
    /// assert!(result.is_err());
    /// ```
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        validate_samples(xs, ys, 2)?;
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    /// Returns a reference to the x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-values.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no samples.
    /// Never true for a successfully constructed interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Find the segment index for interpolation using binary search.
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
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    /// Interpolate the value at `x`.
    ///
    /// Inside the domain, applies the linear interpolation formula on the
    /// enclosing segment (O(log n) binary search). Outside the domain,
    /// returns the nearest boundary sample's y-value (flat hold).
    ///
    /// # Formula
    ///
    /// ```text
    /// y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    /// ```
    ///
    /// # Example
    ///
    /// ```
    /// use curve_core::math::interpolators::{Interpolator, LinearInterpolator};
    ///
    /// let interp = LinearInterpolator::new(&[0.0_f64, 1.0, 2.0], &[0.0, 2.0, 4.0]).unwrap();
    ///
    /// assert!((interp.interpolate(0.5) - 1.0).abs() < 1e-12);
    /// // Flat hold outside the domain
    /// assert!((interp.interpolate(5.0) - 4.0).abs() < 1e-12);
    /// ```
    fn interpolate(&self, x: T) -> T {
        let n = self.xs.len();
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[n - 1] {
            return self.ys[n - 1];
        }

        let i = self.find_segment(x);

        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        let w = (x - x0) / (x1 - x0);
        y0 + (y1 - y0) * w
    }

    /// Return the fitted sample domain.
    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
