//! Discount curve trait definition.

use super::error::CurveError;
use crate::rates::{self, Compounding};
use num_traits::Float;

/// Generic discount curve trait.
///
/// All implementations must be generic over `T: Float` so the curve can be
/// used with both `f64` and `f32`.
///
/// Implementors provide `discount_factor` only; `zero_rate` and
/// `forward_rate` are derived from it through the rate algebra and must not
/// be overridden, so that all three views of a curve stay mutually
/// consistent by construction.
///
/// # Invariants
///
/// - D(0) = 1 (discount factor at time 0 is 1)
/// - D(t) > 0 for all t >= 0 (discount factors are positive)
/// - D(t1) >= D(t2) for t1 <= t2 on arbitrage-free curves
///
/// # Example
///
/// ```
/// use curve_core::curves::{YieldCurve, FlatCurve};
/// use curve_core::rates::Compounding;
///
/// let curve = FlatCurve::new(0.05_f64);
///
/// // Get discount factor for 1 year
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - 0.951229).abs() < 1e-5);
///
/// // Get zero rate
/// let rate = curve.zero_rate(1.0, Compounding::Continuous).unwrap();
/// assert!((rate - 0.05).abs() < 1e-10);
///
/// // Get forward rate
/// let fwd = curve.forward_rate(1.0, 2.0, Compounding::Continuous).unwrap();
/// assert!((fwd - 0.05).abs() < 1e-10);
/// ```
pub trait YieldCurve<T: Float> {
    /// Return the discount factor for maturity `t`.
    ///
    /// The discount factor D(t) represents the present value of 1 unit
    /// of currency received at time t.
    ///
    /// # Arguments
    ///
    /// * `t` - Time to maturity in years (must be >= 0)
    ///
    /// # Returns
    ///
    /// * `Ok(D(t))` - Discount factor at time t
    /// * `Err(CurveError::InvalidMaturity)` - If t < 0
    fn discount_factor(&self, t: T) -> Result<T, CurveError>;

    /// Return the zero rate for maturity `t` under the given compounding
    /// convention.
    ///
    /// The zero rate r(t) is the constant rate that, when compounded per
    /// `comp`, reproduces the discount factor D(t) over [0, t].
    ///
    /// # Arguments
    ///
    /// * `t` - Time to maturity in years (must be > 0)
    /// * `comp` - Compounding convention for the returned rate
    ///
    /// # Returns
    ///
    /// * `Ok(r(t))` - Zero rate at time t
    /// * `Err(CurveError::InvalidMaturity)` - If t <= 0
    ///
    /// # Derivation
    ///
    /// For continuous compounding:
    /// ```text
    /// r(t) = -ln(D(t)) / t
    /// ```
    fn zero_rate(&self, t: T, comp: Compounding) -> Result<T, CurveError> {
        if t <= T::zero() {
            return Err(CurveError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        let df = self.discount_factor(t)?;
        Ok(rates::implied_rate(t, df, comp)?)
    }

    /// Return the forward rate between t1 and t2 under the given compounding
    /// convention.
    ///
    /// The forward rate f(t1, t2) is the rate applicable for the period
    /// from t1 to t2, as implied by the current curve.
    ///
    /// # Arguments
    ///
    /// * `t1` - Start time in years (must be >= 0)
    /// * `t2` - End time in years (must be > t1)
    /// * `comp` - Compounding convention for the returned rate
    ///
    /// # Returns
    ///
    /// * `Ok(f(t1, t2))` - Forward rate between t1 and t2
    /// * `Err(CurveError::InvalidMaturity)` - If t2 <= t1
    ///
    /// # Derivation
    ///
    /// The forward discount factor D(t2) / D(t1) is solved for a rate over
    /// the period t2 - t1. For continuous compounding:
    /// ```text
    /// f(t1, t2) = -ln(D(t2) / D(t1)) / (t2 - t1)
    /// ```
    fn forward_rate(&self, t1: T, t2: T, comp: Compounding) -> Result<T, CurveError> {
        let dt = t2 - t1;
        if dt <= T::zero() {
            return Err(CurveError::InvalidMaturity {
                t: dt.to_f64().unwrap_or(0.0),
            });
        }
        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;
        Ok(rates::implied_rate(dt, df2 / df1, comp)?)
    }
}
