//! Curve interpolation engine: conversion + interpolation + extrapolation.

use super::error::CurveError;
use crate::math::interpolators::{InterpolationMethod, Interpolator, InterpolatorEnum};
use crate::rates::Conversion;
use num_traits::Float;

/// Named pairings of interpolation method and discount-factor conversion.
///
/// Each preset fixes where interpolation happens: directly on discount
/// factors, on their logarithm, or on the implied zero rates. The preset
/// names follow common market-data desk conventions.
///
/// The default preset is [`CurvePreset::Raw`] (linear on log-discounts),
/// which is equivalent to piecewise flat-forward interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurvePreset {
    /// Linear interpolation on log discount factors (piecewise flat forwards)
    #[default]
    Raw,
    /// Linear interpolation on continuously compounded zero rates
    LinearRates,
    /// Linear interpolation directly on discount factors
    LinearDiscount,
    /// Natural cubic spline on continuously compounded zero rates
    CubicSplineRates,
}

impl CurvePreset {
    /// The interpolation method this preset uses.
    #[inline]
    pub fn interpolation(self) -> InterpolationMethod {
        match self {
            Self::Raw | Self::LinearRates | Self::LinearDiscount => InterpolationMethod::Linear,
            Self::CubicSplineRates => InterpolationMethod::CubicSpline,
        }
    }

    /// The discount-factor conversion this preset interpolates through.
    #[inline]
    pub fn conversion(self) -> Conversion {
        match self {
            Self::Raw => Conversion::Logarithmic,
            Self::LinearRates | Self::CubicSplineRates => Conversion::ZeroRate,
            Self::LinearDiscount => Conversion::Identity,
        }
    }
}

/// Interpolates discount factors across maturities.
///
/// Composes a [`Conversion`] (mapping discount factors into the space
/// where interpolation happens) with an interpolator fitted in that space.
/// Queries inside the knot domain interpolate; queries outside extrapolate
/// flat-forward: the boundary knot's continuously compounded rate is held
/// constant, so extrapolated discount factors keep decaying geometrically
/// beyond the last knot.
///
/// Construction validates the samples; evaluation is total.
///
/// # Example
///
/// ```
/// use curve_core::curves::{CurveInterpolator, CurvePreset};
///
/// let maturities = [1.0_f64, 2.0, 5.0, 10.0];
/// let discounts = [0.97, 0.94, 0.86, 0.74];
///
/// let interp = CurveInterpolator::with_preset(
///     &maturities,
///     &discounts,
///     CurvePreset::Raw,
/// ).unwrap();
///
/// // Exact at the knots
/// assert!((interp.discount_factor(2.0) - 0.94).abs() < 1e-12);
/// // Interpolated between them
/// let df = interp.discount_factor(3.0);
/// assert!(df < 0.94 && df > 0.86);
/// ```
#[derive(Debug, Clone)]
pub struct CurveInterpolator<T: Float> {
    /// Conversion between discount factors and interpolation space
    conversion: Conversion,
    /// Interpolator fitted in the converted space
    interp: InterpolatorEnum<T>,
}

impl<T: Float> CurveInterpolator<T> {
    /// Build a curve interpolator from maturity/discount-factor samples.
    ///
    /// The samples are validated, converted into interpolation space via
    /// `conversion`, and fitted with `method`.
    ///
    /// # Arguments
    ///
    /// * `maturities` - Strictly increasing, strictly positive maturities
    /// * `discounts` - Strictly positive discount factors, one per maturity
    /// * `conversion` - Discount-factor conversion to interpolate through
    /// * `method` - Interpolation method applied in converted space
    ///
    /// # Returns
    ///
    /// * `Ok(CurveInterpolator)` - Fitted interpolator
    /// * `Err(CurveError::InsufficientData)` - Fewer than 2 samples
    /// * `Err(CurveError::InvalidMaturity)` - Non-positive or non-increasing maturities
    /// * `Err(CurveError::InvalidDiscountFactor)` - Non-positive discount factor
    /// * `Err(CurveError::Interpolation)` - Method-specific fit failure
    pub fn new(
        maturities: &[T],
        discounts: &[T],
        conversion: Conversion,
        method: InterpolationMethod,
    ) -> Result<Self, CurveError> {
        if maturities.len() < 2 {
            return Err(CurveError::InsufficientData {
                got: maturities.len(),
                need: 2,
            });
        }
        if maturities.len() != discounts.len() {
            return Err(CurveError::InsufficientData {
                got: discounts.len(),
                need: maturities.len(),
            });
        }
        let mut prev = T::zero();
        for (t, df) in maturities.iter().zip(discounts.iter()) {
            if *t <= prev {
                return Err(CurveError::InvalidMaturity {
                    t: t.to_f64().unwrap_or(0.0),
                });
            }
            if *df <= T::zero() {
                return Err(CurveError::InvalidDiscountFactor {
                    t: t.to_f64().unwrap_or(0.0),
                    df: df.to_f64().unwrap_or(0.0),
                });
            }
            prev = *t;
        }

        let converted = conversion.convert_slice(maturities, discounts)?;
        let interp = method.fit(maturities, &converted)?;
        Ok(Self { conversion, interp })
    }

    /// Build a curve interpolator from a named preset.
    pub fn with_preset(
        maturities: &[T],
        discounts: &[T],
        preset: CurvePreset,
    ) -> Result<Self, CurveError> {
        Self::new(
            maturities,
            discounts,
            preset.conversion(),
            preset.interpolation(),
        )
    }

    /// Return the discount factor at maturity `q`.
    ///
    /// The query is clamped to the knot domain, interpolated in converted
    /// space, and reverted to a discount factor. The clamped result is then
    /// re-expressed as a continuously compounded rate and re-discounted
    /// over the original (unclamped) maturity, which holds the boundary
    /// rate flat outside the domain.
    pub fn discount_factor(&self, q: T) -> T {
        let (lo, hi) = self.interp.domain();
        let qc = if q < lo {
            lo
        } else if q > hi {
            hi
        } else {
            q
        };
        let df = self.conversion.revert(qc, self.interp.interpolate(qc));
        // Hold the boundary zero rate flat over the unclamped maturity.
        let rate = -df.ln() / qc;
        (-rate * q).exp()
    }

    /// Return discount factors for a slice of maturities.
    pub fn discount_factors(&self, qs: &[T]) -> Vec<T> {
        qs.iter().map(|q| self.discount_factor(*q)).collect()
    }

    /// Return the knot domain `(t_min, t_max)`.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        self.interp.domain()
    }

    /// Return the conversion this interpolator was built with.
    #[inline]
    pub fn conversion(&self) -> Conversion {
        self.conversion
    }
}
