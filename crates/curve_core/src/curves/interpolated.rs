//! Interpolated discount curve built from market samples.

use super::error::CurveError;
use super::interpolator::{CurveInterpolator, CurvePreset};
use super::YieldCurve;
use crate::rates::Compounding;
use num_traits::Float;
use std::fmt;

/// Discount curve bootstrapped over observed discount factors.
///
/// Holds the original maturity/discount samples alongside a fitted
/// [`CurveInterpolator`]. Queries between the knots interpolate under the
/// curve's [`CurvePreset`]; queries beyond them extrapolate flat-forward.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use curve_core::curves::{YieldCurve, InterpolatedCurve, CurvePreset};
///
/// let maturities = vec![1.0_f64, 2.0, 5.0, 10.0];
/// let discounts = vec![0.97, 0.94, 0.86, 0.74];
///
/// let curve = InterpolatedCurve::new(maturities, discounts, CurvePreset::Raw).unwrap();
///
/// // Exact at the pillars
/// assert!((curve.discount_factor(5.0).unwrap() - 0.86).abs() < 1e-10);
///
/// // Interpolated between them
/// let df = curve.discount_factor(3.0).unwrap();
/// assert!(df > 0.86 && df < 0.94);
/// ```
#[derive(Debug, Clone)]
pub struct InterpolatedCurve<T: Float> {
    /// Pillar maturities in years, strictly increasing
    maturities: Vec<T>,
    /// Observed discount factors at the pillars
    discounts: Vec<T>,
    /// Interpolation preset the curve was fitted with
    preset: CurvePreset,
    /// Fitted interpolation engine
    interp: CurveInterpolator<T>,
}

impl<T: Float> InterpolatedCurve<T> {
    /// Construct an interpolated curve from maturity/discount samples.
    ///
    /// # Arguments
    ///
    /// * `maturities` - Strictly increasing, strictly positive maturities
    /// * `discounts` - Strictly positive discount factors, one per maturity
    /// * `preset` - Interpolation preset to fit with
    ///
    /// # Returns
    ///
    /// * `Ok(InterpolatedCurve)` - Fitted curve
    /// * `Err(CurveError)` - Validation or fit failure, see [`CurveInterpolator::new`]
    pub fn new(
        maturities: Vec<T>,
        discounts: Vec<T>,
        preset: CurvePreset,
    ) -> Result<Self, CurveError> {
        let interp = CurveInterpolator::with_preset(&maturities, &discounts, preset)?;
        Ok(Self {
            maturities,
            discounts,
            preset,
            interp,
        })
    }

    /// Construct a curve with the default [`CurvePreset::Raw`] preset.
    ///
    /// # Example
    ///
    /// ```
    /// use curve_core::curves::{YieldCurve, InterpolatedCurve};
    ///
    /// let curve = InterpolatedCurve::raw(vec![1.0_f64, 2.0], vec![0.97, 0.94]).unwrap();
    /// assert!((curve.discount_factor(1.0).unwrap() - 0.97).abs() < 1e-10);
    /// ```
    pub fn raw(maturities: Vec<T>, discounts: Vec<T>) -> Result<Self, CurveError> {
        Self::new(maturities, discounts, CurvePreset::Raw)
    }

    /// Return the pillar maturities.
    #[inline]
    pub fn maturities(&self) -> &[T] {
        &self.maturities
    }

    /// Return the pillar discount factors.
    #[inline]
    pub fn discounts(&self) -> &[T] {
        &self.discounts
    }

    /// Return the preset the curve was fitted with.
    #[inline]
    pub fn preset(&self) -> CurvePreset {
        self.preset
    }

    /// Return the underlying interpolation engine.
    #[inline]
    pub fn interpolator(&self) -> &CurveInterpolator<T> {
        &self.interp
    }

    /// Return the number of pillars.
    #[inline]
    pub fn len(&self) -> usize {
        self.maturities.len()
    }

    /// Returns true if the curve has no pillars.
    /// Never true for a successfully constructed curve.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.maturities.is_empty()
    }
}

impl<T: Float> YieldCurve<T> for InterpolatedCurve<T> {
    /// Return the discount factor for maturity `t`.
    ///
    /// Inside the pillar domain the fitted interpolator is evaluated
    /// directly; outside it, the boundary zero rate is held flat.
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
        Ok(self.interp.discount_factor(t))
    }
}

impl<T: Float> fmt::Display for InterpolatedCurve<T> {
    /// Render the curve as a pillar table with continuously compounded
    /// zero rates alongside the discount factors.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " Maturity | Discount | Interest ")?;
        writeln!(f, "----------+----------+----------")?;
        for (t, df) in self.maturities.iter().zip(self.discounts.iter()) {
            let rate = self
                .zero_rate(*t, Compounding::Continuous)
                .map_err(|_| fmt::Error)?;
            writeln!(
                f,
                " {:>8.4} | {:>8.6} | {:>8.6} ",
                t.to_f64().unwrap_or(f64::NAN),
                df.to_f64().unwrap_or(f64::NAN),
                rate.to_f64().unwrap_or(f64::NAN)
            )?;
        }
        Ok(())
    }
}
