//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! Both functions are generic over `T: Float` so the same code serves
//! `f64` and `f32` callers.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function via the Abramowitz & Stegun rational
/// approximation (formula 7.1.26), maximum absolute error 1.5e-7.
///
/// erfc(x) = 1 - erf(x); negative arguments use erfc(-x) = 2 - erfc(x).
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();

    let abs_x = x.abs();

    // Abramowitz and Stegun constants (7.1.26)
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let t = one / (one + p * abs_x);

    // Horner's method for the degree-5 polynomial
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));

    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        two - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) for X ~ N(0, 1) as `0.5 * erfc(-x / sqrt(2))`.
///
/// # Accuracy
/// Absolute error bounded by 1.5e-7 for all finite x (the limit of the
/// A&S 7.1.26 approximation).
///
/// # Examples
/// ```
/// use quantix_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!((norm_cdf(1.96_f64) - 0.975).abs() < 1e-4);
/// assert!(norm_cdf(-4.0_f64) < 1e-4);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();

    half * erfc_approx(-x / sqrt_2)
}

/// Standard normal probability density function.
///
/// φ(x) = exp(-x² / 2) / sqrt(2π)
///
/// # Examples
/// ```
/// use quantix_core::math::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    frac_1_sqrt_2pi * (-half * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-7);
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        // Standard normal table values
        assert_relative_eq!(norm_cdf(1.0_f64), 0.8413447460685429, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.15865525393145707, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(1.96_f64), 0.9750021048517795, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.9772498680518208, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(3.0_f64), 0.9986501019683699, epsilon = 1e-6);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for x in [-3.0, -1.5, -0.25, 0.5, 1.0, 2.75] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_norm_cdf_monotonic_and_bounded() {
        let mut prev = norm_cdf(-8.0_f64);
        let mut x = -8.0;
        while x <= 8.0 {
            let c = norm_cdf(x);
            assert!((0.0..=1.0).contains(&c), "CDF out of [0, 1] at x = {}", x);
            assert!(c >= prev, "CDF not monotonic at x = {}", x);
            prev = c;
            x += 0.125;
        }
    }

    #[test]
    fn test_norm_cdf_extreme_values() {
        assert!(norm_cdf(8.0_f64) > 0.999999);
        assert!(norm_cdf(-8.0_f64) < 0.000001);
    }

    #[test]
    fn test_norm_pdf_at_zero() {
        assert_relative_eq!(norm_pdf(0.0_f64), FRAC_1_SQRT_2PI, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(1.0_f64), 0.24197072451914337, epsilon = 1e-9);
        assert_relative_eq!(norm_pdf(2.0_f64), 0.05399096651318806, epsilon = 1e-9);
    }

    #[test]
    fn test_norm_pdf_symmetric() {
        for x in [0.5, 1.0, 2.0, 3.5] {
            assert_relative_eq!(norm_pdf(x), norm_pdf(-x), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cdf_derivative_matches_pdf() {
        // Central difference of the CDF approximates the PDF; the erfc
        // approximation error compounds, so the tolerance is loose.
        let h = 1e-4;
        for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
            let numeric = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numeric, norm_pdf(x), epsilon = 1e-4);
        }
    }

    #[test]
    fn test_f32_compatibility() {
        assert!((norm_cdf(0.0_f32) - 0.5).abs() < 1e-5);
        assert!((norm_pdf(0.0_f32) - 0.3989423).abs() < 1e-5);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        // Arguments in the range where the approximation matters
        fn argument_strategy() -> impl Strategy<Value = f64> {
            -8.0..8.0
        }

        proptest! {
            #[test]
            fn prop_cdf_within_unit_interval(x in argument_strategy()) {
                let c = norm_cdf(x);
                prop_assert!((0.0..=1.0).contains(&c));
            }

            #[test]
            fn prop_cdf_symmetry(x in argument_strategy()) {
                prop_assert!((norm_cdf(x) + norm_cdf(-x) - 1.0).abs() < 3e-7);
            }

            #[test]
            fn prop_cdf_monotone(x in argument_strategy(), step in 0.01_f64..2.0) {
                // Allow for the approximation's 1.5e-7 wobble
                prop_assert!(norm_cdf(x + step) >= norm_cdf(x) - 3e-7);
            }

            #[test]
            fn prop_pdf_positive_and_peaked_at_zero(x in argument_strategy()) {
                let p = norm_pdf(x);
                prop_assert!(p > 0.0);
                prop_assert!(p <= norm_pdf(0.0));
            }
        }
    }
}
