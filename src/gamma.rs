//! Log-gamma evaluation.
//!
//! Thin wrappers over the C `lgamma` family as ported by `libm`, so poles,
//! infinities and NaN behave exactly like the platform routine.

/// Natural logarithm of `|Γ(x)|`.
///
/// Non-positive integers are poles and return `+∞`. The sign of `Γ(x)` is
/// discarded; use [`log_gamma_signed`] when it matters.
///
/// ```
/// use jagmath::log_gamma;
///
/// assert_eq!(log_gamma(1.0), 0.0);
/// assert!((log_gamma(5.0) - 24.0f64.ln()).abs() < 1e-12);
/// assert_eq!(log_gamma(0.0), f64::INFINITY);
/// ```
#[inline]
pub fn log_gamma(x: f64) -> f64 {
    libm::lgamma(x)
}

/// `ln|Γ(x)|` together with the sign of `Γ(x)` (`1` or `-1`).
///
/// On the negative axis Γ alternates sign between poles, e.g. `Γ(-0.5) < 0`.
#[inline]
pub fn log_gamma_signed(x: f64) -> (f64, i32) {
    libm::lgamma_r(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poles_are_positive_infinity() {
        for x in [0.0, -1.0, -2.0, -10.0] {
            assert_eq!(log_gamma(x), f64::INFINITY, "x = {}", x);
        }
    }

    #[test]
    fn half_integer() {
        // Γ(1/2) = √π
        let expected = std::f64::consts::PI.sqrt().ln();
        assert!((log_gamma(0.5) - expected).abs() < 1e-12);
    }

    #[test]
    fn sign_on_negative_axis() {
        let (lg, sign) = log_gamma_signed(-0.5);
        // Γ(-1/2) = -2√π
        assert_eq!(sign, -1);
        assert!((lg - (2.0 * std::f64::consts::PI.sqrt()).ln()).abs() < 1e-12);

        let (_, sign) = log_gamma_signed(3.5);
        assert_eq!(sign, 1);
    }

    #[test]
    fn large_argument_does_not_overflow() {
        // Γ(200) overflows f64, its logarithm does not.
        let lg = log_gamma(200.0);
        assert!(lg.is_finite());
        assert!((lg - 857.933_669_825_857_5).abs() < 1e-9);
    }

    #[test]
    fn nan_propagates() {
        assert!(log_gamma(f64::NAN).is_nan());
    }
}
