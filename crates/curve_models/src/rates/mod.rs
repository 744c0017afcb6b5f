//! Parametric rate models.
//!
//! A parametric rate model describes the whole term structure through a
//! small set of parameters: the instantaneous forward curve has a closed
//! form, and period rates are its exact averages. [`NelsonSiegelModel`]
//! and [`SvenssonModel`] are the two classic factor parameterisations.

mod nelson_siegel;
mod svensson;

pub use nelson_siegel::NelsonSiegelModel;
pub use svensson::SvenssonModel;

use num_traits::Float;

/// Closed-form parametric description of a rate term structure.
///
/// Implementors define the instantaneous forward curve f(t); the
/// continuously compounded rate over a period is its average:
///
/// ```text
/// rate(t0, t1) = (1 / (t1 - t0)) * ∫[t0, t1] f(s) ds
/// ```
///
/// Both methods are total over valid parameters; construction validates
/// the parameters so evaluation needs no error channel.
pub trait ParametricRateModel<T: Float> {
    /// Return the instantaneous forward rate at time `t`.
    fn inst_forward(&self, t: T) -> T;

    /// Return the continuously compounded rate over the period `(t0, t1)`.
    ///
    /// Requires `t1 > t0`; the result is unspecified for degenerate
    /// periods (callers guard the period before evaluating).
    fn rate(&self, t0: T, t1: T) -> T;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shared check: the period rate over a vanishing interval around t
    // approaches the instantaneous forward at t.
    fn assert_rate_matches_inst_forward<M: ParametricRateModel<f64>>(model: &M, t: f64) {
        let eps = 1e-6;
        let avg = model.rate(t, t + eps);
        let inst = model.inst_forward(t);
        assert!(
            (avg - inst).abs() < 1e-5,
            "At t={}: period rate {} vs instantaneous forward {}",
            t,
            avg,
            inst
        );
    }

    #[test]
    fn test_nelson_siegel_rate_consistent_with_inst_forward() {
        let model = NelsonSiegelModel::new(0.04_f64, -0.01, 0.02, 1.5).unwrap();
        for t in [0.1, 0.5, 1.0, 3.0, 10.0] {
            assert_rate_matches_inst_forward(&model, t);
        }
    }

    #[test]
    fn test_svensson_rate_consistent_with_inst_forward() {
        let model = SvenssonModel::new(0.04_f64, -0.01, 0.02, 0.015, 1.5, 4.0).unwrap();
        for t in [0.1, 0.5, 1.0, 3.0, 10.0] {
            assert_rate_matches_inst_forward(&model, t);
        }
    }
}
