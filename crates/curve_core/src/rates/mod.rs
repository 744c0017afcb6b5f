//! Compounding conventions and elementwise rate algebra.
//!
//! This module provides the three mutually inverse operations relating a
//! rate, a time, and a discount factor under a compounding convention:
//!
//! - [`capitalization`]: growth factor of one unit over time `t` at rate `r`
//! - [`discount_factor`]: present value of one unit paid at time `t`
//! - [`implied_rate`]: the rate reproducing a given discount factor
//!
//! For all valid `(t, df, comp)`:
//!
//! ```text
//! discount_factor(t, implied_rate(t, df, comp), comp) == df
//! ```
//!
//! Slice variants ([`capitalizations`], [`discount_factors`],
//! [`implied_rates`]) apply the scalar operations elementwise over parallel
//! slices; mismatched lengths are rejected, never silently truncated.

pub mod convert;

pub use convert::Conversion;

use crate::types::RateError;
use num_traits::Float;

/// Compounding convention relating rate and time to a growth factor.
///
/// `Continuous` and `Simple` are distinguished conventions in their own
/// right, not limiting cases of `Periodic`. `Periodic(m)` carries the number
/// of compounding periods per year; the common frequencies are provided as
/// associated constants.
///
/// # Examples
///
/// ```
/// use curve_core::rates::Compounding;
///
/// assert_eq!(Compounding::SEMIANNUAL, Compounding::Periodic(2));
/// assert_ne!(Compounding::Continuous, Compounding::Simple);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Compounding {
    /// Continuous compounding: growth factor `exp(r * t)`.
    Continuous,
    /// Simple compounding: growth factor `1 + r * t`.
    Simple,
    /// Periodic compounding with `m` periods per year: `(1 + r/m)^(t*m)`.
    Periodic(u32),
}

impl Compounding {
    /// Annual compounding (1 period per year).
    pub const ANNUAL: Self = Self::Periodic(1);
    /// Semiannual compounding (2 periods per year).
    pub const SEMIANNUAL: Self = Self::Periodic(2);
    /// Quarterly compounding (4 periods per year).
    pub const QUARTERLY: Self = Self::Periodic(4);
    /// Monthly compounding (12 periods per year).
    pub const MONTHLY: Self = Self::Periodic(12);
}

/// Calculate the capitalization (growth) factor over time `t` at rate `r`.
///
/// # Formula
///
/// ```text
/// continuous:   exp(r * t)
/// simple:       1 + r * t
/// periodic(m):  (1 + r/m)^(t*m)
/// ```
///
/// # Errors
///
/// Returns [`RateError::InvalidFrequency`] for `Periodic(0)`.
///
/// # Examples
///
/// ```
/// use curve_core::rates::{capitalization, Compounding};
///
/// let cap = capitalization(2.0_f64, 0.05, Compounding::Simple).unwrap();
/// assert!((cap - 1.1).abs() < 1e-12);
/// ```
pub fn capitalization<T: Float>(t: T, r: T, comp: Compounding) -> Result<T, RateError> {
    match comp {
        Compounding::Continuous => Ok((r * t).exp()),
        Compounding::Simple => Ok(T::one() + r * t),
        Compounding::Periodic(0) => Err(RateError::InvalidFrequency { m: 0 }),
        Compounding::Periodic(m) => {
            let m = T::from(m).unwrap();
            Ok((T::one() + r / m).powf(t * m))
        }
    }
}

/// Calculate the discount factor for maturity `t` at rate `r`.
///
/// The discount factor is the reciprocal of the capitalization factor:
///
/// ```text
/// df(t, r, comp) = 1 / capitalization(t, r, comp)
/// ```
///
/// # Errors
///
/// Returns [`RateError::InvalidFrequency`] for `Periodic(0)`.
///
/// # Examples
///
/// ```
/// use curve_core::rates::{discount_factor, Compounding};
///
/// let df = discount_factor(1.0, 0.04, Compounding::Continuous).unwrap();
/// assert!((df - (-0.04_f64).exp()).abs() < 1e-12);
/// ```
pub fn discount_factor<T: Float>(t: T, r: T, comp: Compounding) -> Result<T, RateError> {
    Ok(capitalization(t, r, comp)?.recip())
}

/// Calculate the implied zero rate for maturity `t` and discount factor `df`.
///
/// Inverts [`discount_factor`] in the rate argument:
///
/// ```text
/// continuous:   -ln(df) / t
/// simple:       (1/df - 1) / t
/// periodic(m):  (df^(-1/(t*m)) - 1) * m
/// ```
///
/// # Errors
///
/// Returns [`RateError::InvalidFrequency`] for `Periodic(0)`. Numeric domain
/// violations (non-positive `df`, zero `t`) propagate from the underlying
/// arithmetic as NaN or infinity.
///
/// # Examples
///
/// ```
/// use curve_core::rates::{implied_rate, Compounding};
///
/// let r = implied_rate(1.0, (-0.04_f64).exp(), Compounding::Continuous).unwrap();
/// assert!((r - 0.04).abs() < 1e-12);
/// ```
pub fn implied_rate<T: Float>(t: T, df: T, comp: Compounding) -> Result<T, RateError> {
    match comp {
        Compounding::Continuous => Ok(-df.ln() / t),
        Compounding::Simple => Ok((df.recip() - T::one()) / t),
        Compounding::Periodic(0) => Err(RateError::InvalidFrequency { m: 0 }),
        Compounding::Periodic(m) => {
            let m = T::from(m).unwrap();
            Ok((df.powf(-(t * m).recip()) - T::one()) * m)
        }
    }
}

/// Elementwise [`capitalization`] over parallel time and rate slices.
///
/// # Errors
///
/// Returns [`RateError::LengthMismatch`] if the slices differ in length.
pub fn capitalizations<T: Float>(
    ts: &[T],
    rs: &[T],
    comp: Compounding,
) -> Result<Vec<T>, RateError> {
    check_lengths(ts, rs)?;
    ts.iter()
        .zip(rs.iter())
        .map(|(&t, &r)| capitalization(t, r, comp))
        .collect()
}

/// Elementwise [`discount_factor`] over parallel time and rate slices.
///
/// # Errors
///
/// Returns [`RateError::LengthMismatch`] if the slices differ in length.
///
/// # Examples
///
/// ```
/// use curve_core::rates::{discount_factors, Compounding};
///
/// let dfs = discount_factors(&[1.0, 2.0], &[0.03, 0.04], Compounding::Continuous).unwrap();
/// assert_eq!(dfs.len(), 2);
/// ```
pub fn discount_factors<T: Float>(
    ts: &[T],
    rs: &[T],
    comp: Compounding,
) -> Result<Vec<T>, RateError> {
    check_lengths(ts, rs)?;
    ts.iter()
        .zip(rs.iter())
        .map(|(&t, &r)| discount_factor(t, r, comp))
        .collect()
}

/// Elementwise [`implied_rate`] over parallel time and discount factor slices.
///
/// # Errors
///
/// Returns [`RateError::LengthMismatch`] if the slices differ in length.
pub fn implied_rates<T: Float>(
    ts: &[T],
    dfs: &[T],
    comp: Compounding,
) -> Result<Vec<T>, RateError> {
    check_lengths(ts, dfs)?;
    ts.iter()
        .zip(dfs.iter())
        .map(|(&t, &df)| implied_rate(t, df, comp))
        .collect()
}

#[inline]
fn check_lengths<T>(left: &[T], right: &[T]) -> Result<(), RateError> {
    if left.len() != right.len() {
        return Err(RateError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONVENTIONS: [Compounding; 6] = [
        Compounding::Continuous,
        Compounding::Simple,
        Compounding::ANNUAL,
        Compounding::SEMIANNUAL,
        Compounding::QUARTERLY,
        Compounding::MONTHLY,
    ];

    // ========================================
    // Capitalization Tests
    // ========================================

    #[test]
    fn test_capitalization_continuous() {
        let cap = capitalization(2.0, 0.05, Compounding::Continuous).unwrap();
        assert!((cap - 0.1_f64.exp()).abs() < 1e-12);
    }

    #[test]
    fn test_capitalization_simple() {
        let cap = capitalization(2.0, 0.05, Compounding::Simple).unwrap();
        assert!((cap - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_capitalization_periodic() {
        // Semiannual over 1 year at 6%: (1 + 0.03)^2
        let cap = capitalization(1.0, 0.06, Compounding::SEMIANNUAL).unwrap();
        assert!((cap - 1.03_f64.powi(2)).abs() < 1e-12);

        // Monthly over 2 years at 12%: (1 + 0.01)^24
        let cap = capitalization(2.0, 0.12, Compounding::MONTHLY).unwrap();
        assert!((cap - 1.01_f64.powi(24)).abs() < 1e-12);
    }

    #[test]
    fn test_capitalization_zero_rate_is_one() {
        for comp in CONVENTIONS {
            let cap = capitalization(5.0, 0.0, comp).unwrap();
            assert!(
                (cap - 1.0).abs() < 1e-12,
                "Failed for {:?}: got {}",
                comp,
                cap
            );
        }
    }

    #[test]
    fn test_capitalization_invalid_frequency() {
        let result = capitalization(1.0, 0.05, Compounding::Periodic(0));
        assert_eq!(result.unwrap_err(), RateError::InvalidFrequency { m: 0 });
    }

    // ========================================
    // Discount Factor Tests
    // ========================================

    #[test]
    fn test_discount_factor_continuous() {
        let df = discount_factor(1.0, 0.04, Compounding::Continuous).unwrap();
        assert!((df - (-0.04_f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_discount_factor_simple() {
        let df = discount_factor(1.0, 0.05, Compounding::Simple).unwrap();
        assert!((df - 1.0 / 1.05).abs() < 1e-12);
    }

    #[test]
    fn test_discount_factor_is_reciprocal_capitalization() {
        for comp in CONVENTIONS {
            let cap = capitalization(3.0, 0.04, comp).unwrap();
            let df = discount_factor(3.0, 0.04, comp).unwrap();
            assert!((cap * df - 1.0).abs() < 1e-12, "Failed for {:?}", comp);
        }
    }

    // ========================================
    // Implied Rate / Inverse Law Tests
    // ========================================

    #[test]
    fn test_implied_rate_continuous() {
        let r = implied_rate(2.0, (-0.08_f64).exp(), Compounding::Continuous).unwrap();
        assert!((r - 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_implied_rate_simple() {
        // df = 1/(1 + r*t) with r = 0.05, t = 2
        let r = implied_rate(2.0, 1.0 / 1.1, Compounding::Simple).unwrap();
        assert!((r - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_implied_rate_periodic() {
        // df = (1 + 0.03)^(-2) for semiannual 6% over 1 year
        let df = 1.03_f64.powi(-2);
        let r = implied_rate(1.0, df, Compounding::SEMIANNUAL).unwrap();
        assert!((r - 0.06).abs() < 1e-12);
    }

    #[test]
    fn test_implied_rate_invalid_frequency() {
        let result = implied_rate(1.0, 0.95, Compounding::Periodic(0));
        assert_eq!(result.unwrap_err(), RateError::InvalidFrequency { m: 0 });
    }

    #[test]
    fn test_inverse_law_all_conventions() {
        for comp in CONVENTIONS {
            for &t in &[0.25, 1.0, 5.0, 30.0] {
                for &df in &[0.2, 0.5, 0.9, 0.999, 1.0] {
                    let r = implied_rate(t, df, comp).unwrap();
                    let back = discount_factor(t, r, comp).unwrap();
                    assert!(
                        (back - df).abs() < 1e-9,
                        "Inverse law failed for {:?} at t={}, df={}: got {}",
                        comp,
                        t,
                        df,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_implied_rate_negative_df_propagates_nan() {
        // Numeric domain violation propagates from the arithmetic
        let r = implied_rate(1.0, -0.5, Compounding::Continuous).unwrap();
        assert!(r.is_nan());
    }

    // ========================================
    // Slice Variant Tests
    // ========================================

    #[test]
    fn test_discount_factors_elementwise() {
        let ts = [1.0, 2.0, 3.0];
        let rs = [0.03, 0.04, 0.05];
        let dfs = discount_factors(&ts, &rs, Compounding::Continuous).unwrap();
        for i in 0..3 {
            let expected = (-rs[i] * ts[i]).exp();
            assert!((dfs[i] - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_implied_rates_roundtrip() {
        let ts = [0.5, 1.0, 2.0];
        let dfs = [0.99, 0.97, 0.93];
        let rs = implied_rates(&ts, &dfs, Compounding::QUARTERLY).unwrap();
        let back = discount_factors(&ts, &rs, Compounding::QUARTERLY).unwrap();
        for (a, b) in back.iter().zip(dfs.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_slice_length_mismatch() {
        let result = capitalizations(&[1.0, 2.0], &[0.03], Compounding::Continuous);
        assert_eq!(
            result.unwrap_err(),
            RateError::LengthMismatch { left: 2, right: 1 }
        );

        let result = implied_rates(&[1.0], &[0.99, 0.97], Compounding::Simple);
        assert_eq!(
            result.unwrap_err(),
            RateError::LengthMismatch { left: 1, right: 2 }
        );
    }

    #[test]
    fn test_compounding_constants() {
        assert_eq!(Compounding::ANNUAL, Compounding::Periodic(1));
        assert_eq!(Compounding::SEMIANNUAL, Compounding::Periodic(2));
        assert_eq!(Compounding::QUARTERLY, Compounding::Periodic(4));
        assert_eq!(Compounding::MONTHLY, Compounding::Periodic(12));
    }

    #[test]
    fn test_with_f32() {
        let df = discount_factor(1.0_f32, 0.04, Compounding::Continuous).unwrap();
        assert!((df - (-0.04_f32).exp()).abs() < 1e-6);
    }
}
