//! # curve_core: Term-Structure Construction Foundation
//!
//! ## Foundation Layer Role
//!
//! curve_core is the bottom layer of the curve library, providing:
//! - Compounding conventions and elementwise rate algebra (`rates`)
//! - Discount factor converters for interpolation-space transforms (`rates::convert`)
//! - Numeric interpolators: linear and natural cubic spline (`math::interpolators`)
//! - Discount curve abstractions: flat, interpolated (`curves`)
//! - Error types: `RateError`, `InterpolationError`, `CurveError`
//!
//! ## Minimal Dependency Principle
//!
//! The foundation layer has no dependency on other curve_* crates, with
//! minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Derived error types
//! - serde: Serialisation of convention enums and errors (optional)
//!
//! All numeric code is generic over `T: num_traits::Float` and uses static
//! dispatch (enum-based) strategy selection rather than trait objects.
//!
//! ## Usage Examples
//!
//! ```rust
//! use curve_core::curves::{YieldCurve, FlatCurve, InterpolatedCurve, CurvePreset};
//! use curve_core::rates::Compounding;
//!
//! // Flat curve at 5% continuously compounded
//! let flat = FlatCurve::new(0.05_f64);
//! let df = flat.discount_factor(1.0).unwrap();
//! assert!((df - (-0.05_f64).exp()).abs() < 1e-12);
//!
//! // Interpolated discount curve (raw/log-discount interpolation)
//! let maturities = vec![1.0_f64, 2.0, 5.0, 10.0];
//! let discounts = vec![0.97, 0.94, 0.86, 0.74];
//! let curve = InterpolatedCurve::new(maturities, discounts, CurvePreset::Raw).unwrap();
//!
//! // Input discount factors are reproduced exactly at the knots
//! let df2 = curve.discount_factor(2.0).unwrap();
//! assert!((df2 - 0.94).abs() < 1e-12);
//!
//! // Zero and forward rates are derived from discount factors
//! let r5 = curve.zero_rate(5.0, Compounding::Continuous).unwrap();
//! assert!(r5 > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod curves;
pub mod math;
pub mod rates;
pub mod types;
