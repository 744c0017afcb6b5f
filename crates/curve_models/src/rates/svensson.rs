//! Svensson rate model.
//!
//! Extends Nelson-Siegel with a second hump term on its own decay scale:
//! ```text
//! f(t) = beta0 + beta1 * exp(-y1) + beta2 * y1 * exp(-y1) + beta3 * y2 * exp(-y2)
//! y1 = t / lambda1,    y2 = t / lambda2
//! ```
//! The extra factor lets the forward curve carry two humps, which the
//! three-factor model cannot.

use super::{NelsonSiegelModel, ParametricRateModel};
use num_traits::Float;

/// Svensson model parameters.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use curve_models::rates::{ParametricRateModel, SvenssonModel};
///
/// let model = SvenssonModel::new(0.04_f64, -0.01, 0.02, 0.015, 1.5, 4.0).unwrap();
///
/// // Short end: beta0 + beta1
/// assert!((model.inst_forward(0.0) - 0.03).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SvenssonModel<T: Float> {
    /// Long-run forward level
    pub beta0: T,
    /// Short-end slope
    pub beta1: T,
    /// First hump
    pub beta2: T,
    /// Second hump
    pub beta3: T,
    /// First decay scale (lambda1 > 0)
    pub lambda1: T,
    /// Second decay scale (lambda2 > 0)
    pub lambda2: T,
}

impl<T: Float> SvenssonModel<T> {
    /// Create a Svensson model with validation.
    ///
    /// # Arguments
    ///
    /// * `beta0` - Long-run forward level
    /// * `beta1` - Short-end slope
    /// * `beta2` - First hump
    /// * `beta3` - Second hump
    /// * `lambda1` - First decay scale (must be positive and finite)
    /// * `lambda2` - Second decay scale (must be positive and finite)
    ///
    /// # Returns
    ///
    /// `Some(SvenssonModel)` if parameters are valid, `None` otherwise.
    pub fn new(beta0: T, beta1: T, beta2: T, beta3: T, lambda1: T, lambda2: T) -> Option<Self> {
        if lambda1 <= T::zero() || !lambda1.is_finite() {
            return None;
        }
        if lambda2 <= T::zero() || !lambda2.is_finite() {
            return None;
        }
        Some(Self {
            beta0,
            beta1,
            beta2,
            beta3,
            lambda1,
            lambda2,
        })
    }

    /// The Nelson-Siegel model obtained by dropping the second hump term.
    pub fn nelson_siegel(&self) -> NelsonSiegelModel<T> {
        NelsonSiegelModel {
            beta0: self.beta0,
            beta1: self.beta1,
            beta2: self.beta2,
            lambda: self.lambda1,
        }
    }
}

impl<T: Float> ParametricRateModel<T> for SvenssonModel<T> {
    /// Return the instantaneous forward rate at time `t`.
    fn inst_forward(&self, t: T) -> T {
        let y1 = t / self.lambda1;
        let y2 = t / self.lambda2;

        self.beta0
            + self.beta1 * (-y1).exp()
            + self.beta2 * y1 * (-y1).exp()
            + self.beta3 * y2 * (-y2).exp()
    }

    /// Return the continuously compounded rate over `(t0, t1)`.
    ///
    /// Exact average of the forward curve; each factor integrates in
    /// closed form on its own decay scale.
    fn rate(&self, t0: T, t1: T) -> T {
        let dt = t1 - t0;
        let y1 = (-t0 / self.lambda1).exp();
        let y2 = (-t1 / self.lambda1).exp();
        let y3 = (-t0 / self.lambda2).exp();
        let y4 = (-t1 / self.lambda2).exp();

        let f1 = self.lambda1 * (y1 - y2) / dt;
        let f2 = ((self.lambda1 + t0) * y1 - (self.lambda1 + t1) * y2) / dt;
        let f3 = ((self.lambda2 + t0) * y3 - (self.lambda2 + t1) * y4) / dt;

        self.beta0 + self.beta1 * f1 + self.beta2 * f2 + self.beta3 * f3
    }
}
