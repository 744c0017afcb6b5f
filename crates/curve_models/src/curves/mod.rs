//! Curves backed by parametric rate models.

use crate::rates::ParametricRateModel;
use curve_core::curves::{CurveError, YieldCurve};
use curve_core::rates::{self, Compounding};
use num_traits::Float;

/// Discount curve driven by a parametric rate model.
///
/// Wraps any [`ParametricRateModel`] and exposes it through
/// [`YieldCurve`]: the discount factor at maturity t comes from the
/// model's zero-to-t continuously compounded rate. Zero and forward
/// rates are derived through the trait defaults, so they stay consistent
/// with the discount factors by construction.
///
/// # Example
///
/// ```
/// use curve_core::curves::YieldCurve;
/// use curve_core::rates::Compounding;
/// use curve_models::curves::ParametricCurve;
/// use curve_models::rates::NelsonSiegelModel;
///
/// let model = NelsonSiegelModel::new(0.04_f64, -0.01, 0.02, 1.5).unwrap();
/// let curve = ParametricCurve::new(model);
///
/// let df = curve.discount_factor(5.0).unwrap();
/// assert!(df > 0.0 && df < 1.0);
///
/// // The curve's zero rate is the model's zero-to-t rate
/// let r = curve.zero_rate(5.0, Compounding::Continuous).unwrap();
/// assert!((df - (-r * 5.0).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParametricCurve<M> {
    /// The underlying rate model
    model: M,
}

impl<M> ParametricCurve<M> {
    /// Wrap a parametric rate model as a discount curve.
    #[inline]
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Return the underlying model.
    #[inline]
    pub fn model(&self) -> &M {
        &self.model
    }
}

impl<T, M> YieldCurve<T> for ParametricCurve<M>
where
    T: Float,
    M: ParametricRateModel<T>,
{
    /// Return the discount factor for maturity `t`.
    ///
    /// D(t) = exp(-r(0, t) * t) with r from the model; D(0) = 1 exactly,
    /// since the zero-to-zero period rate is degenerate.
    ///
    /// # Arguments
    ///
    /// * `t` - Time to maturity in years (must be >= 0)
    ///
    /// # Returns
    ///
    /// * `Ok(D(t))` - Discount factor at time t
    /// * `Err(CurveError::InvalidMaturity)` - If t < 0
    fn discount_factor(&self, t: T) -> Result<T, CurveError> {
        if t < T::zero() {
            return Err(CurveError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        if t == T::zero() {
            return Ok(T::one());
        }
        let rate = self.model.rate(T::zero(), t);
        Ok(rates::discount_factor(t, rate, Compounding::Continuous)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::{NelsonSiegelModel, SvenssonModel};
    use approx::assert_relative_eq;

    fn ns_curve() -> ParametricCurve<NelsonSiegelModel<f64>> {
        ParametricCurve::new(NelsonSiegelModel::new(0.04, -0.01, 0.02, 1.5).unwrap())
    }

    #[test]
    fn test_discount_factor_at_zero_is_one() {
        let curve = ns_curve();
        assert_eq!(curve.discount_factor(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_discount_factor_negative_maturity() {
        let curve = ns_curve();
        let result = curve.discount_factor(-1.0);
        match result.unwrap_err() {
            CurveError::InvalidMaturity { t } => assert_eq!(t, -1.0),
            _ => panic!("Expected InvalidMaturity error"),
        }
    }

    #[test]
    fn test_discount_factor_matches_model_rate() {
        let curve = ns_curve();
        let model = *curve.model();
        for t in [0.5, 1.0, 5.0, 20.0] {
            let df = curve.discount_factor(t).unwrap();
            let expected = (-model.rate(0.0, t) * t).exp();
            assert_relative_eq!(df, expected, max_relative = 1e-14);
        }
    }

    #[test]
    fn test_discount_factors_decrease_for_positive_rates() {
        let curve = ns_curve();
        let mut prev = 1.0;
        for t in [0.5, 1.0, 2.0, 5.0, 10.0, 30.0] {
            let df = curve.discount_factor(t).unwrap();
            assert!(df < prev, "df({}) = {} not below {}", t, df, prev);
            prev = df;
        }
    }

    #[test]
    fn test_zero_rate_recovers_model_rate() {
        let curve = ns_curve();
        let model = *curve.model();
        for t in [0.5, 2.0, 10.0] {
            let r = curve
                .zero_rate(t, curve_core::rates::Compounding::Continuous)
                .unwrap();
            assert_relative_eq!(r, model.rate(0.0, t), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_forward_rate_recovers_model_period_rate() {
        let curve = ns_curve();
        let model = *curve.model();
        for (t1, t2) in [(0.5, 1.0), (1.0, 5.0), (2.0, 10.0)] {
            let f = curve
                .forward_rate(t1, t2, curve_core::rates::Compounding::Continuous)
                .unwrap();
            assert_relative_eq!(f, model.rate(t1, t2), max_relative = 1e-10);
        }
    }

    #[test]
    fn test_svensson_curve() {
        let model = SvenssonModel::new(0.04_f64, -0.01, 0.02, 0.015, 1.5, 4.0).unwrap();
        let curve = ParametricCurve::new(model);
        let df = curve.discount_factor(5.0).unwrap();
        assert!(df > 0.0 && df < 1.0);
    }
}
