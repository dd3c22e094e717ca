//! Special functions used by the window and filter design code.

use std::f64::consts::PI;

/// Normalized sinc function, `sin(πx) / (πx)`.
///
/// The removable singularity at `x = 0` evaluates to exactly `1.0`.
///
/// ```
/// use firdes::math::sinc;
///
/// assert_eq!(sinc(0.0), 1.0);
/// assert!(sinc(1.0).abs() < 1e-15);
/// ```
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        return 1.0;
    }
    let y = PI * x;
    y.sin() / y
}

/// Modified Bessel function of the first kind of order zero.
///
/// Evaluated through its power series `Σ ((x/2)^k / k!)^2`, summed until the
/// next term no longer changes the result. The series converges for every
/// finite `x`; the number of terms grows roughly linearly with `|x|`. Non-finite input
/// returns `NaN` for `NaN` and `+inf` for `±inf`.
///
/// ```
/// use firdes::math::besseli0;
///
/// assert_eq!(besseli0(0.0), 1.0);
/// ```
pub fn besseli0(x: f64) -> f64 {
    if !x.is_finite() {
        return x.abs();
    }
    let half = x / 2.0;
    let mut sum = 1.0;
    let mut term = 1.0;
    let mut k = 1.0;
    loop {
        term *= half / k;
        let sq = term * term;
        if sq <= sum * f64::EPSILON {
            break;
        }
        sum += sq;
        k += 1.0;
    }
    sum
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod tests {
    use super::*;

    #[test]
    fn sinc_zeros() {
        assert_eq!(sinc(0.0), 1.0);
        for k in 1..10 {
            assert!(sinc(k as f64).abs() < 1e-15);
            assert!(sinc(-(k as f64)).abs() < 1e-15);
        }
        assert!((sinc(0.5) - 2.0 / PI).abs() < 1e-15);
        assert_eq!(sinc(0.3), sinc(-0.3));
    }

    #[test]
    fn besseli0_non_finite() {
        assert!(besseli0(f64::NAN).is_nan());
        assert_eq!(besseli0(f64::INFINITY), f64::INFINITY);
        assert_eq!(besseli0(f64::NEG_INFINITY), f64::INFINITY);
        assert!(besseli0(500.0).is_finite());
    }

    #[test]
    fn besseli0_accuracy() {
        let input_x = [
            -3.75_f64, -2.0, -1.0, -0.1, -0.001, 0.0, 0.001, 0.01, 0.1, 0.3, 1.0, 1.5, 2.0, 3.0,
            3.75, 4.5, 6.0, 8.0, 10.0, 20.0,
        ];
        let test_x = [
            9.118945860844564_f64,
            2.279585302336067,
            1.266065877752008,
            1.002501562934095,
            1.000000250000016,
            1.000000000000000,
            1.000000250000016,
            1.000025000156250,
            1.002501562934095,
            1.022626879351597,
            1.266065877752008,
            1.646723189772891,
            2.279585302336067,
            4.880792585865025,
            9.118945860844564,
            17.481171855609279,
            67.234406976477985,
            4.275641157218048e2,
            2.815716628466255e3,
            4.355828255955355e7,
        ]; // Computed using MATLAB besseli()
        for (x, expected) in input_x.iter().zip(test_x) {
            let tol = 1e-12 * expected.abs();
            assert!(
                (besseli0(*x) - expected).abs() < tol,
                "abs({} - {}) < {} (x={})",
                besseli0(*x),
                expected,
                tol,
                x,
            );
        }
    }
}
