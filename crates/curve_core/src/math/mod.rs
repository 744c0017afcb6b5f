//! Numerical methods for curve construction.
//!
//! # Components
//!
//! - [`interpolators`]: 1D interpolation methods (linear, natural cubic
//!   spline) and the piecewise-cubic evaluation base they share.

pub mod interpolators;
