//! Discount curve construction and evaluation.
//!
//! The [`YieldCurve`] trait defines the curve contract: implementors supply
//! discount factors, and zero and forward rates are derived from them.
//! Concrete curves:
//!
//! - [`FlatCurve`] - constant rate at all maturities
//! - [`InterpolatedCurve`] - fitted over market discount-factor samples
//! - [`CurveEnum`] - static-dispatch container over the above
//!
//! [`CurveInterpolator`] is the fitting engine behind [`InterpolatedCurve`],
//! usable directly when the trait wrapper is not needed.

mod curve_enum;
mod error;
mod flat;
mod interpolated;
mod interpolator;
mod traits;

pub use curve_enum::CurveEnum;
pub use error::CurveError;
pub use flat::FlatCurve;
pub use interpolated::InterpolatedCurve;
pub use interpolator::{CurveInterpolator, CurvePreset};
pub use traits::YieldCurve;
