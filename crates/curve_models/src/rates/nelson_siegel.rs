//! Nelson-Siegel rate model.
//!
//! Three-factor parameterisation of the instantaneous forward curve:
//! ```text
//! f(t) = beta0 + (beta1 + beta2 * y) * exp(-y),    y = t / lambda
//! ```
//! where:
//! - beta0 = long-run level (f(t) -> beta0 as t -> inf)
//! - beta1 = short-end slope (f(0) = beta0 + beta1)
//! - beta2 = medium-term hump
//! - lambda = decay scale (must be positive)
//!
//! Period rates follow from the exact integral of f, so no quadrature is
//! involved.

use super::ParametricRateModel;
use num_traits::Float;

/// Nelson-Siegel model parameters.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use curve_models::rates::{NelsonSiegelModel, ParametricRateModel};
///
/// let model = NelsonSiegelModel::new(0.04_f64, -0.01, 0.02, 1.5).unwrap();
///
/// // Short end: beta0 + beta1
/// assert!((model.inst_forward(0.0) - 0.03).abs() < 1e-12);
///
/// // Invalid: non-positive decay scale
/// assert!(NelsonSiegelModel::new(0.04_f64, -0.01, 0.02, 0.0).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NelsonSiegelModel<T: Float> {
    /// Long-run forward level
    pub beta0: T,
    /// Short-end slope
    pub beta1: T,
    /// Medium-term hump
    pub beta2: T,
    /// Decay scale (lambda > 0)
    pub lambda: T,
}

impl<T: Float> NelsonSiegelModel<T> {
    /// Create a Nelson-Siegel model with validation.
    ///
    /// # Arguments
    ///
    /// * `beta0` - Long-run forward level
    /// * `beta1` - Short-end slope
    /// * `beta2` - Medium-term hump
    /// * `lambda` - Decay scale (must be positive and finite)
    ///
    /// # Returns
    ///
    /// `Some(NelsonSiegelModel)` if parameters are valid, `None` otherwise.
    pub fn new(beta0: T, beta1: T, beta2: T, lambda: T) -> Option<Self> {
        if lambda <= T::zero() || !lambda.is_finite() {
            return None;
        }
        Some(Self {
            beta0,
            beta1,
            beta2,
            lambda,
        })
    }
}

impl<T: Float> ParametricRateModel<T> for NelsonSiegelModel<T> {
    /// Return the instantaneous forward rate at time `t`.
    ///
    /// ```text
    /// f(t) = beta0 + (beta1 + beta2 * y) * exp(-y),    y = t / lambda
    /// ```
    fn inst_forward(&self, t: T) -> T {
        let y = t / self.lambda;
        self.beta0 + (self.beta1 + self.beta2 * y) * (-y).exp()
    }

    /// Return the continuously compounded rate over `(t0, t1)`.
    ///
    /// Exact average of the forward curve, using the antiderivatives
    /// of `exp(-t/lambda)` and `(t/lambda) * exp(-t/lambda)`.
    fn rate(&self, t0: T, t1: T) -> T {
        let dt = t1 - t0;
        let y1 = (-t0 / self.lambda).exp();
        let y2 = (-t1 / self.lambda).exp();
        let f1 = self.lambda * (y1 - y2) / dt;
        let f2 = ((self.lambda + t0) * y1 - (self.lambda + t1) * y2) / dt;

        self.beta0 + self.beta1 * f1 + self.beta2 * f2
    }
}
