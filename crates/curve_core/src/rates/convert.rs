//! Discount factor converters.
//!
//! Curve interpolation assumes that some function of the discount factor is
//! interpolated rather than the discount factor itself. A [`Conversion`]
//! maps discount factors into that interpolation space (`convert`) and back
//! (`revert`). Both directions are pure, stateless transforms; for every
//! variant `revert(t, convert(t, x)) ≈ x` on the variant's valid domain.

use crate::types::RateError;
use num_traits::Float;

/// Bidirectional transform between discount-factor space and an
/// interpolation-friendly space.
///
/// | Variant       | convert(t, x)   | revert(t, y)   |
/// |---------------|-----------------|----------------|
/// | `Identity`    | `x`             | `y`            |
/// | `Logarithmic` | `ln(x)`         | `exp(y)`       |
/// | `ZeroRate`    | `-ln(x) / t`    | `exp(-y * t)`  |
/// | `Inversion`   | `1 / x`         | `1 / y`        |
/// | `RateTime`    | `-ln(x)`        | `exp(-y)`      |
///
/// `ZeroRate` is the continuously compounded implied rate and its inverse
/// discounting. `RateTime` is the zero rate multiplied by time, which equals
/// the negated log discount factor.
///
/// # Examples
///
/// ```
/// use curve_core::rates::convert::Conversion;
///
/// let y = Conversion::Logarithmic.convert(1.0, 0.95_f64);
/// let x = Conversion::Logarithmic.revert(1.0, y);
/// assert!((x - 0.95).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Conversion {
    /// No conversion; interpolate discount factors directly.
    Identity,
    /// Log discount factors.
    Logarithmic,
    /// Continuously compounded zero rates.
    ZeroRate,
    /// Reciprocal discount factors (self-inverse transform).
    Inversion,
    /// Zero rate times time, i.e. the negated log discount factor.
    RateTime,
}

impl Conversion {
    /// Convert a discount factor `x` at maturity `t` to interpolation space.
    ///
    /// Numeric domain violations (e.g. a non-positive discount factor under
    /// `Logarithmic`) propagate from the arithmetic as NaN or infinity.
    #[inline]
    pub fn convert<T: Float>(self, t: T, x: T) -> T {
        match self {
            Conversion::Identity => x,
            Conversion::Logarithmic => x.ln(),
            Conversion::ZeroRate => -x.ln() / t,
            Conversion::Inversion => x.recip(),
            Conversion::RateTime => -x.ln(),
        }
    }

    /// Revert an interpolation-space value `y` at maturity `t` back to a
    /// discount factor.
    #[inline]
    pub fn revert<T: Float>(self, t: T, y: T) -> T {
        match self {
            Conversion::Identity => y,
            Conversion::Logarithmic => y.exp(),
            Conversion::ZeroRate => (-y * t).exp(),
            Conversion::Inversion => y.recip(),
            Conversion::RateTime => (-y).exp(),
        }
    }

    /// Elementwise [`Self::convert`] over parallel maturity and value slices.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::LengthMismatch`] if the slices differ in length.
    pub fn convert_slice<T: Float>(self, ts: &[T], xs: &[T]) -> Result<Vec<T>, RateError> {
        if ts.len() != xs.len() {
            return Err(RateError::LengthMismatch {
                left: ts.len(),
                right: xs.len(),
            });
        }
        Ok(ts
            .iter()
            .zip(xs.iter())
            .map(|(&t, &x)| self.convert(t, x))
            .collect())
    }

    /// Elementwise [`Self::revert`] over parallel maturity and value slices.
    ///
    /// # Errors
    ///
    /// Returns [`RateError::LengthMismatch`] if the slices differ in length.
    pub fn revert_slice<T: Float>(self, ts: &[T], ys: &[T]) -> Result<Vec<T>, RateError> {
        if ts.len() != ys.len() {
            return Err(RateError::LengthMismatch {
                left: ts.len(),
                right: ys.len(),
            });
        }
        Ok(ts
            .iter()
            .zip(ys.iter())
            .map(|(&t, &y)| self.revert(t, y))
            .collect())
    }

    /// Check that conversion and reversion round-trip at `(t, x)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use curve_core::rates::convert::Conversion;
    ///
    /// assert!(Conversion::ZeroRate.round_trips(5.0, 0.8_f64));
    /// ```
    pub fn round_trips<T: Float>(self, t: T, x: T) -> bool {
        let back = self.revert(t, self.convert(t, x));
        let tol = T::from(1e-9).unwrap();
        (back - x).abs() <= tol * x.abs().max(T::one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Conversion; 5] = [
        Conversion::Identity,
        Conversion::Logarithmic,
        Conversion::ZeroRate,
        Conversion::Inversion,
        Conversion::RateTime,
    ];

    #[test]
    fn test_identity_is_noop() {
        assert_eq!(Conversion::Identity.convert(1.0, 0.95), 0.95);
        assert_eq!(Conversion::Identity.revert(1.0, 0.95), 0.95);
    }

    #[test]
    fn test_logarithmic() {
        let y = Conversion::Logarithmic.convert(2.0, 0.9_f64);
        assert!((y - 0.9_f64.ln()).abs() < 1e-12);
        assert!((Conversion::Logarithmic.revert(2.0, y) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_zero_rate_matches_continuous_discounting() {
        // convert must produce the continuously compounded zero rate
        let t = 4.0;
        let df = 0.82_f64;
        let r = Conversion::ZeroRate.convert(t, df);
        assert!((r - (-df.ln() / t)).abs() < 1e-12);
        assert!((Conversion::ZeroRate.revert(t, r) - df).abs() < 1e-12);
    }

    #[test]
    fn test_inversion_is_self_inverse() {
        let y = Conversion::Inversion.convert(1.0, 0.8_f64);
        assert!((y - 1.25).abs() < 1e-12);
        // revert applies the same transform
        assert!((Conversion::Inversion.revert(1.0, y) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_rate_time_is_negated_log() {
        let t = 3.0;
        let df = 0.9_f64;
        let y = Conversion::RateTime.convert(t, df);
        assert!((y + Conversion::Logarithmic.convert(t, df)).abs() < 1e-12);
        // -ln(df) equals continuous zero rate times time
        let rt = Conversion::ZeroRate.convert(t, df) * t;
        assert!((y - rt).abs() < 1e-12);
        assert!((Conversion::RateTime.revert(t, y) - df).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip_all_variants() {
        for conv in ALL {
            for &t in &[0.1, 1.0, 7.0, 30.0] {
                for &x in &[0.2, 0.5, 0.95, 1.0] {
                    assert!(
                        conv.round_trips(t, x),
                        "Round trip failed for {:?} at t={}, x={}",
                        conv,
                        t,
                        x
                    );
                }
            }
        }
    }

    #[test]
    fn test_logarithmic_domain_violation_propagates() {
        let y = Conversion::Logarithmic.convert(1.0, -0.5_f64);
        assert!(y.is_nan());
    }

    #[test]
    fn test_convert_slice() {
        let ts = [1.0, 2.0, 5.0];
        let dfs = [0.97, 0.94, 0.86];
        let ys = Conversion::ZeroRate.convert_slice(&ts, &dfs).unwrap();
        for i in 0..3 {
            assert!((ys[i] - (-dfs[i].ln() / ts[i])).abs() < 1e-12);
        }
        let back = Conversion::ZeroRate.revert_slice(&ts, &ys).unwrap();
        for (a, b) in back.iter().zip(dfs.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_slice_length_mismatch() {
        let result = Conversion::Identity.convert_slice(&[1.0, 2.0], &[0.9]);
        assert_eq!(
            result.unwrap_err(),
            RateError::LengthMismatch { left: 2, right: 1 }
        );
        let result = Conversion::Identity.revert_slice(&[1.0], &[0.9, 0.8]);
        assert!(result.is_err());
    }
}
