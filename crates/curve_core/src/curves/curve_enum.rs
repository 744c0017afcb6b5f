//! Static-dispatch curve container.

use super::error::CurveError;
use super::flat::FlatCurve;
use super::interpolated::InterpolatedCurve;
use super::YieldCurve;
use num_traits::Float;

/// Enum over the concrete curve types in this crate.
///
/// Lets heterogeneous curves live in one collection or field without
/// trait objects, keeping dispatch static and the container `Clone`.
///
/// # Example
///
/// ```
/// use curve_core::curves::{CurveEnum, FlatCurve, InterpolatedCurve, YieldCurve};
///
/// let curves: Vec<CurveEnum<f64>> = vec![
///     FlatCurve::new(0.05).into(),
///     InterpolatedCurve::raw(vec![1.0, 2.0], vec![0.97, 0.94]).unwrap().into(),
/// ];
///
/// for curve in &curves {
///     assert!(curve.discount_factor(1.0).unwrap() > 0.0);
/// }
/// ```
#[derive(Debug, Clone)]
pub enum CurveEnum<T: Float> {
    /// Constant-rate curve
    Flat(FlatCurve<T>),
    /// Curve interpolated over market samples
    Interpolated(InterpolatedCurve<T>),
}

impl<T: Float> YieldCurve<T> for CurveEnum<T> {
    /// Delegate to the wrapped curve's discount factor.
    fn discount_factor(&self, t: T) -> Result<T, CurveError> {
        match self {
            Self::Flat(curve) => curve.discount_factor(t),
            Self::Interpolated(curve) => curve.discount_factor(t),
        }
    }
}

impl<T: Float> From<FlatCurve<T>> for CurveEnum<T> {
    fn from(curve: FlatCurve<T>) -> Self {
        Self::Flat(curve)
    }
}

impl<T: Float> From<InterpolatedCurve<T>> for CurveEnum<T> {
    fn from(curve: InterpolatedCurve<T>) -> Self {
        Self::Interpolated(curve)
    }
}
