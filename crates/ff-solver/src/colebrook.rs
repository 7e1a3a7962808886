//! Colebrook-White residual and its analytic derivative.
//!
//! The residual form is
//!
//! ```text
//! g(f) = 1/sqrt(f) + 2 log10( 2.51 / (Re sqrt(f)) + (eps/D) / 3.72 )
//! ```
//!
//! whose root is the Darcy friction factor for turbulent pipe flow.

use std::f64::consts::LN_10;

/// Laminar sublayer coefficient in the Colebrook-White equation.
pub const CW_REYNOLDS_COEFF: f64 = 2.51;

/// Divisor applied to relative roughness.
pub const CW_ROUGHNESS_DIVISOR: f64 = 3.72;

/// Colebrook-White residual at friction factor guess `f`.
///
/// `|f|` is used under both square roots so a transiently negative iterate
/// still evaluates to a finite value. `re` must be positive.
pub fn residual(f: f64, re: f64, eps_d: f64) -> f64 {
    let sqrt_f = f.abs().sqrt();
    let inv_sqrt = 1.0 / sqrt_f;
    let smooth = CW_REYNOLDS_COEFF / (re * sqrt_f);
    let rough = eps_d / CW_ROUGHNESS_DIVISOR;
    inv_sqrt + 2.0 * (smooth + rough).log10()
}

/// d(residual)/df.
///
/// The leading power term takes `f` as given, not `|f|`, so a negative
/// iterate yields NaN here while `residual` stays finite.
pub fn derivative(f: f64, re: f64, eps_d: f64) -> f64 {
    let rough = eps_d / CW_ROUGHNESS_DIVISOR;
    let smooth = CW_REYNOLDS_COEFF / (re * f.abs().sqrt());
    let chain = 1.0 + (2.0 * CW_REYNOLDS_COEFF) / (LN_10 * (rough + smooth) * re);
    -0.5 * f.powf(-1.5) * chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residual_vanishes_near_known_root() {
        // Smooth pipe at Re = 1e5: f ~ 0.017990
        let r = residual(0.017_989_773_084_273_8, 1e5, 0.0);
        assert!(r.abs() < 1e-9, "residual = {r}");
    }

    #[test]
    fn residual_uses_magnitude_of_guess() {
        let pos = residual(0.02, 5e4, 1e-4);
        let neg = residual(-0.02, 5e4, 1e-4);
        assert_eq!(pos, neg);
        assert!(neg.is_finite());
    }

    #[test]
    fn derivative_is_nan_for_negative_guess() {
        assert!(derivative(-0.02, 5e4, 1e-4).is_nan());
    }

    #[test]
    fn derivative_matches_central_difference() {
        let (re, eps_d) = (2.5e5, 1e-3);
        for f in [0.008, 0.015, 0.03, 0.06] {
            let h = 1e-7;
            let fd = (residual(f + h, re, eps_d) - residual(f - h, re, eps_d)) / (2.0 * h);
            let an = derivative(f, re, eps_d);
            let rel = ((fd - an) / an).abs();
            assert!(rel < 1e-5, "f={f}: analytic {an}, numeric {fd}");
        }
    }

    #[test]
    fn derivative_is_negative_on_physical_range() {
        for f in [1e-3, 1e-2, 0.1] {
            assert!(derivative(f, 1e4, 1e-3) < 0.0);
        }
    }
}
