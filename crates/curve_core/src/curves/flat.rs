//! Flat discount curve implementation.

use super::error::CurveError;
use super::YieldCurve;
use crate::rates::{self, Compounding};
use num_traits::Float;

/// Flat discount curve with a constant interest rate.
///
/// A simple curve where the same rate applies to all maturities. Useful
/// for prototyping, testing, and scenarios with flat term structures.
///
/// The stored rate is interpreted under the curve's compounding convention;
/// [`FlatCurve::new`] defaults to continuous compounding.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use curve_core::curves::{YieldCurve, FlatCurve};
/// use curve_core::rates::Compounding;
///
/// let curve = FlatCurve::new(0.05_f64);
///
/// // Discount factor at t=1: exp(-0.05 * 1) ≈ 0.9512
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - 0.951229).abs() < 1e-5);
///
/// // The continuously compounded zero rate is constant
/// let r = curve.zero_rate(5.0, Compounding::Continuous).unwrap();
/// assert!((r - 0.05).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatCurve<T: Float> {
    /// The constant interest rate
    rate: T,
    /// Compounding convention the rate is quoted under
    compounding: Compounding,
}

impl<T: Float> FlatCurve<T> {
    /// Construct a flat curve with a continuously compounded rate.
    ///
    /// # Arguments
    ///
    /// * `rate` - The constant interest rate (continuously compounded)
    ///
    /// # Example
    ///
    /// ```
    /// use curve_core::curves::FlatCurve;
    ///
    /// let curve = FlatCurve::new(0.05_f64);
    /// assert_eq!(curve.rate(), 0.05);
    /// ```
    #[inline]
    pub fn new(rate: T) -> Self {
        Self {
            rate,
            compounding: Compounding::Continuous,
        }
    }

    /// Construct a flat curve with a rate quoted under an explicit
    /// compounding convention.
    ///
    /// # Example
    ///
    /// ```
    /// use curve_core::curves::{YieldCurve, FlatCurve};
    /// use curve_core::rates::Compounding;
    ///
    /// let curve = FlatCurve::with_compounding(0.05_f64, Compounding::ANNUAL);
    /// let df = curve.discount_factor(1.0).unwrap();
    /// assert!((df - 1.0 / 1.05).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn with_compounding(rate: T, compounding: Compounding) -> Self {
        Self { rate, compounding }
    }

    /// Return the constant rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Return the compounding convention the rate is quoted under.
    #[inline]
    pub fn compounding(&self) -> Compounding {
        self.compounding
    }
}

impl<T: Float> YieldCurve<T> for FlatCurve<T> {
    /// Return the discount factor for maturity `t`.
    ///
    /// For a flat curve with continuously compounded rate r:
    /// ```text
    /// D(t) = exp(-r * t)
    /// ```
    /// Other conventions discount through the corresponding
    /// capitalization factor.
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
        Ok(rates::discount_factor(t, self.rate, self.compounding)?)
    }
}
