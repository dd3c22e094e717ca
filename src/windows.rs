//! Window functions for FIR filter design.
//!
//! All windows are returned in their symmetric form (suitable for filter
//! design) unless noted otherwise. A window of length 1 is the constant
//! `[1.0]`, a window of length 0 is empty.
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::math::besseli0;
use crate::Error;

/// A rectangular window of a given length.
///
/// ```
/// use firdes::windows;
///
/// let taps = windows::rect(64);
/// assert!(taps.iter().all(|t| *t == 1.0));
/// ```
pub fn rect(len: usize) -> Vec<f64> {
    vec![1.0; len]
}

/// A generalized cosine window of a given length with coefficients `coeffs`.
/// If `periodic` is `false`, a symmetric window is returned, which is suitable for
/// filter design. If `periodic` is `true`, the window is computed for length `len + 1`
/// and truncated to the first `len` samples, which is useful for spectral analysis.
///
/// The generalized cosine window is on the form:
///```text
/// w[n] = sum_k (-1)^k * coeffs[k] * cos(2*π*k*n/(N-1)),     0 ≤ n < N.
///```
///
/// ```
/// use firdes::windows;
///
/// let taps = windows::gen_cos(38, &[0.5, 0.5], false);
/// assert_eq!(taps.len(), 38);
/// ```
pub fn gen_cos(len: usize, coeffs: &[f64], periodic: bool) -> Vec<f64> {
    let full = if periodic { len + 1 } else { len };
    if full <= 1 {
        return rect(len);
    }
    let denom = (full - 1) as f64;
    let mut taps: Vec<f64> = (0..full)
        .map(|n| {
            coeffs
                .iter()
                .enumerate()
                .map(|(k, c)| {
                    let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
                    sign * c * (2.0 * PI * (k * n) as f64 / denom).cos()
                })
                .sum()
        })
        .collect();
    taps.truncate(len);
    taps
}

/// A Blackman window of a given length. If `periodic` is `true` a periodic
/// window is returned, otherwise a symmetric window. See [`gen_cos`] for more details.
///
/// ```
/// use firdes::windows;
///
/// let taps = windows::blackman(59, false);
/// assert!((taps[29] - 1.0).abs() < 1e-12);
/// ```
pub fn blackman(len: usize, periodic: bool) -> Vec<f64> {
    gen_cos(len, &[0.42, 0.5, 0.08], periodic)
}

/// A Hamming window of a given length. See [`gen_cos`] for the meaning of `periodic`.
pub fn hamming(len: usize, periodic: bool) -> Vec<f64> {
    gen_cos(len, &[0.54, 0.46], periodic)
}

/// A Hann window of a given length. See [`gen_cos`] for the meaning of `periodic`.
pub fn hann(len: usize, periodic: bool) -> Vec<f64> {
    gen_cos(len, &[0.5, 0.5], periodic)
}

/// A Kaiser window of a given length and shape parameter `beta`.
///
/// ```
/// use firdes::windows;
///
/// let taps = windows::kaiser(38, 5.653);
/// assert_eq!(taps.len(), 38);
/// ```
pub fn kaiser(len: usize, beta: f64) -> Vec<f64> {
    if len <= 1 {
        return rect(len);
    }
    let alpha = (len - 1) as f64 / 2.0;
    let norm = besseli0(beta);
    (0..len)
        .map(|n| {
            let r = (n as f64 - alpha) / alpha;
            besseli0(beta * (1.0 - r * r).max(0.0).sqrt()) / norm
        })
        .collect()
}

/// Window applied to the truncated sinc kernel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Window {
    /// No tapering.
    Rectangular,
    /// Hann window.
    Hann,
    /// Hamming window.
    Hamming,
    /// Blackman window.
    #[default]
    Blackman,
    /// Kaiser window with the given shape parameter.
    Kaiser(KaiserBeta),
}

/// Largest accepted Kaiser shape parameter. `besseli0` overflows `f64` a little above 700.
pub const MAX_KAISER_BETA: f64 = 500.0;

/// Kaiser shape parameter in `[0, MAX_KAISER_BETA]`.
///
/// Larger values trade transition width for stopband attenuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaiserBeta(f64);

impl KaiserBeta {
    /// Validate a shape parameter.
    pub fn new(beta: f64) -> Result<Self, Error> {
        if !(0.0..=MAX_KAISER_BETA).contains(&beta) {
            return Err(Error::InvalidParameter(format!(
                "kaiser beta must be in [0, {MAX_KAISER_BETA}], got {beta}"
            )));
        }
        Ok(Self(beta))
    }

    /// The shape parameter.
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl Window {
    /// Kaiser window, rejecting `beta` outside `[0, MAX_KAISER_BETA]`.
    pub fn kaiser(beta: f64) -> Result<Self, Error> {
        KaiserBeta::new(beta).map(Window::Kaiser)
    }

    /// Symmetric window samples of length `len`.
    pub fn taps(&self, len: usize) -> Vec<f64> {
        match self {
            Window::Rectangular => rect(len),
            Window::Hann => hann(len, false),
            Window::Hamming => hamming(len, false),
            Window::Blackman => blackman(len, false),
            Window::Kaiser(beta) => kaiser(len, beta.get()),
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Window::Rectangular => write!(f, "rect"),
            Window::Hann => write!(f, "hann"),
            Window::Hamming => write!(f, "hamming"),
            Window::Blackman => write!(f, "blackman"),
            Window::Kaiser(beta) => write!(f, "kaiser:{}", beta.get()),
        }
    }
}

impl FromStr for Window {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.split_once(':') {
            Some(("kaiser", beta)) => {
                let beta = beta.trim().parse::<f64>().map_err(|_| {
                    Error::InvalidParameter(format!("invalid kaiser beta '{beta}'"))
                })?;
                Window::kaiser(beta)
            }
            Some(_) => Err(Error::InvalidParameter(format!("unknown window '{s}'"))),
            None => match s.as_str() {
                "rect" | "rectangular" => Ok(Window::Rectangular),
                "hann" | "hanning" => Ok(Window::Hann),
                "hamming" => Ok(Window::Hamming),
                "blackman" => Ok(Window::Blackman),
                "kaiser" => Err(Error::InvalidParameter(
                    "kaiser window needs a beta, e.g. 'kaiser:8.6'".to_string(),
                )),
                _ => Err(Error::InvalidParameter(format!("unknown window '{s}'"))),
            },
        }
    }
}

impl TryFrom<String> for Window {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod tests {
    use super::*;

    fn assert_half(window: &[f64], reference: &[f64], tol: f64) {
        let n = window.len();
        for (i, tap) in reference.iter().enumerate() {
            assert!(
                (window[i] - tap).abs() < tol,
                "abs({} - {}) < {} (tap {})",
                window[i],
                tap,
                tol,
                i
            );
            assert!((window[i] - window[n - 1 - i]).abs() < 1e-12, "tap {i} not symmetric");
        }
    }

    #[test]
    fn blackman_accuracy() {
        let test_taps = [
            0.000000000000000,
            0.002622240463032,
            0.010804137614933,
            0.025437526103984,
            0.047836464440438,
            0.079501212725209,
            0.121830058635970,
            0.175815273593484,
            0.241762085771086,
            0.319067599318524,
            0.406090274118759,
            0.500130613698768,
            0.597531218304494,
            0.693890766450019,
            0.784373343232954,
            0.864083342844346,
            0.928468223065274,
            0.973707602519644,
            0.997048017099080,
        ]; // First half of MATLAB blackman(38)
        assert_half(&blackman(38, false), &test_taps, 1e-9);
    }

    #[test]
    fn hamming_accuracy() {
        let test_taps = [
            0.080000000000000,
            0.086616681240054,
            0.106276375087901,
            0.138413507945853,
            0.182103553013518,
            0.236089627240563,
            0.298818649563673,
            0.368486020221058,
            0.443087535801966,
            0.520477046529772,
        ]; // MATLAB hamming(38)
        assert_half(&hamming(38, false), &test_taps, 1e-9);
    }

    #[test]
    fn hann_accuracy() {
        let test_taps = [
            0.000000000000000,
            0.007192044826146,
            0.028561277269458,
            0.063492943419406,
            0.110982122840780,
            0.169662638304959,
            0.237846358221384,
            0.313571761109846,
        ]; // MATLAB hann(38)
        assert_half(&hann(38, false), &test_taps, 1e-9);
    }

    #[test]
    fn kaiser_accuracy() {
        let test_taps = [
            0.020392806629217,
            0.041484435695145,
            0.070067692203354,
            0.106749242190360,
            0.151823492501156,
            0.205218380642171,
            0.266458522450125,
            0.334649288647039,
            0.408484172820245,
            0.486276388059038,
        ]; // MATLAB kaiser(38, 5.653)
        assert_half(&kaiser(38, 5.653), &test_taps, 1e-9);
    }

    #[test]
    fn periodic_drops_last_sample() {
        let periodic = blackman(16, true);
        let symmetric = blackman(17, false);
        assert_eq!(periodic.len(), 16);
        assert_eq!(&periodic[..], &symmetric[..16]);
    }

    #[test]
    fn degenerate_lengths() {
        assert!(blackman(0, false).is_empty());
        assert_eq!(blackman(1, false), vec![1.0]);
        assert_eq!(kaiser(1, 8.6), vec![1.0]);
        assert_eq!(Window::Hann.taps(1), vec![1.0]);
    }

    #[test]
    fn parse_window() {
        assert_eq!("blackman".parse::<Window>().unwrap(), Window::Blackman);
        assert_eq!(" Hamming ".parse::<Window>().unwrap(), Window::Hamming);
        assert_eq!("rect".parse::<Window>().unwrap(), Window::Rectangular);
        assert_eq!(
            "kaiser:8.6".parse::<Window>().unwrap(),
            Window::kaiser(8.6).unwrap()
        );
        assert!("kaiser".parse::<Window>().is_err());
        assert!("kaiser:-1".parse::<Window>().is_err());
        assert!("kaiser:abc".parse::<Window>().is_err());
        assert!("triangle".parse::<Window>().is_err());
        assert_eq!(Window::default(), Window::Blackman);
    }

    #[test]
    fn kaiser_beta_range() {
        assert!(Window::kaiser(0.0).is_ok());
        assert!(Window::kaiser(MAX_KAISER_BETA).is_ok());
        assert!(matches!(
            Window::kaiser(1000.0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(Window::kaiser(f64::NAN).is_err());
        assert!(Window::kaiser(f64::INFINITY).is_err());
        assert!("kaiser:nan".parse::<Window>().is_err());
        assert!("kaiser:1e3".parse::<Window>().is_err());
    }

    #[test]
    fn kaiser_at_max_beta_is_finite() {
        let window = Window::kaiser(MAX_KAISER_BETA).unwrap().taps(31);
        assert!(window.iter().all(|w| w.is_finite() && *w > 0.0));
        assert!((window[15] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for w in [
            Window::Rectangular,
            Window::Hann,
            Window::Hamming,
            Window::Blackman,
            Window::kaiser(5.5).unwrap(),
        ] {
            assert_eq!(w.to_string().parse::<Window>().unwrap(), w);
        }
    }
}
