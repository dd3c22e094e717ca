//! Filter Taps
use std::f64::consts::PI;
use std::fmt;
use std::ops::Index;

use num_complex::Complex64;

/// Designed filter coefficients.
///
/// The vector is fixed once designed; it can be inspected and handed to a
/// [`FirFilter`](crate::FirFilter) but not modified in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Taps(Vec<f64>);

impl Taps {
    /// Wrap coefficients.
    pub fn new(taps: Vec<f64>) -> Self {
        Self(taps)
    }

    /// Number of taps
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no taps.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Coefficients in index order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Iterate over the coefficients.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// Take ownership of the coefficients.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Gain at zero frequency, i.e., the sum of all taps.
    pub fn dc_gain(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Complex frequency response at normalized frequency `freq` (cycles/sample).
    ///
    /// ```
    /// use firdes::Taps;
    ///
    /// let taps = Taps::new(vec![0.5, 0.5]);
    /// assert!(taps.response(0.5).norm() < 1e-12);
    /// ```
    pub fn response(&self, freq: f64) -> Complex64 {
        let omega = -2.0 * PI * freq;
        self.0
            .iter()
            .enumerate()
            .map(|(n, h)| Complex64::from_polar(*h, omega * n as f64))
            .sum()
    }

    /// Magnitude of the frequency response at `freq` in dB.
    pub fn magnitude_db(&self, freq: f64) -> f64 {
        20.0 * self.response(freq).norm().log10()
    }

    /// Whether `h[i] == h[N-1-i]` holds for all taps within `tol`.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        self.0
            .iter()
            .zip(self.0.iter().rev())
            .all(|(a, b)| (a - b).abs() <= tol)
    }
}

impl Index<usize> for Taps {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl AsRef<[f64]> for Taps {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Taps {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Taps> for Vec<f64> {
    fn from(taps: Taps) -> Self {
        taps.0
    }
}

/// Comma separated coefficients, no trailing separator.
impl fmt::Display for Taps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tap) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{tap:?}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moving_average_response() {
        let taps = Taps::new(vec![0.25; 4]);
        assert!((taps.dc_gain() - 1.0).abs() < 1e-15);
        assert!((taps.response(0.0).re - 1.0).abs() < 1e-15);
        // nulls at multiples of fs/4
        assert!(taps.response(0.25).norm() < 1e-12);
        assert!(taps.response(0.5).norm() < 1e-12);
        assert!(taps.magnitude_db(0.0).abs() < 1e-12);
    }

    #[test]
    fn symmetry() {
        assert!(Taps::new(vec![1.0, 2.0, 1.0]).is_symmetric(0.0));
        assert!(!Taps::new(vec![1.0, 2.0, 1.5]).is_symmetric(0.1));
        assert!(Taps::new(vec![]).is_symmetric(0.0));
    }

    #[test]
    fn display() {
        let taps = Taps::new(vec![1.0, -0.5, 2.5e-5]);
        assert_eq!(taps.to_string(), "1.0,-0.5,2.5e-5");
        assert_eq!(Taps::new(vec![1.0]).to_string(), "1.0");
    }
}
