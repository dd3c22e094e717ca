//! Windowed-sinc low-pass filter design.
use serde::Deserialize;

use crate::math::sinc;
use crate::windows::Window;
use crate::Error;
use crate::Result;
use crate::Taps;

/// Parameters of a low-pass filter: sample rate, cutoff frequency and number of taps.
///
/// Construction validates the parameters, so every `FilterSpec` can be designed.
///
/// ```
/// use firdes::FilterSpec;
///
/// let spec = FilterSpec::new(8_000_000.0, 80_000.0, 59).unwrap();
/// assert_eq!(spec.center(), 29);
/// assert!(FilterSpec::new(8_000_000.0, 80_000.0, 58).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawFilterSpec")]
pub struct FilterSpec {
    sample_rate: f64,
    cutoff: f64,
    num_taps: usize,
}

#[derive(Deserialize)]
struct RawFilterSpec {
    sample_rate: f64,
    cutoff: f64,
    taps: usize,
}

impl TryFrom<RawFilterSpec> for FilterSpec {
    type Error = Error;

    fn try_from(raw: RawFilterSpec) -> Result<Self> {
        FilterSpec::new(raw.sample_rate, raw.cutoff, raw.taps)
    }
}

impl FilterSpec {
    /// Validate and create filter parameters.
    ///
    /// Fails with [`Error::InvalidParameter`] if `sample_rate` is not a positive finite
    /// number, `cutoff` is not in `(0, sample_rate / 2)`, or `num_taps` is zero or even.
    pub fn new(sample_rate: f64, cutoff: f64, num_taps: usize) -> Result<Self> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "sample rate must be positive, got {sample_rate}"
            )));
        }
        if !(cutoff > 0.0 && cutoff < sample_rate / 2.0) {
            return Err(Error::InvalidParameter(format!(
                "cutoff must be in (0, {}), got {cutoff}",
                sample_rate / 2.0
            )));
        }
        if num_taps == 0 || num_taps % 2 == 0 {
            return Err(Error::InvalidParameter(format!(
                "number of taps must be odd, got {num_taps}"
            )));
        }
        Ok(Self {
            sample_rate,
            cutoff,
            num_taps,
        })
    }

    /// Skips validation; only for parameters known to be valid.
    pub(crate) const fn new_unchecked(sample_rate: f64, cutoff: f64, num_taps: usize) -> Self {
        Self {
            sample_rate,
            cutoff,
            num_taps,
        }
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Cutoff frequency in Hz.
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Filter length.
    pub fn num_taps(&self) -> usize {
        self.num_taps
    }

    /// Cutoff in cycles/sample, in `(0, 1/2)`.
    pub fn normalized_cutoff(&self) -> f64 {
        self.cutoff / self.sample_rate
    }

    /// Index of the center tap.
    pub fn center(&self) -> usize {
        (self.num_taps - 1) / 2
    }

    /// Design the filter with a Blackman window.
    pub fn design(&self) -> Taps {
        lowpass(self, &Window::Blackman)
    }
}

/// Constructs a lowpass FIR filter with unit DC gain using the specified window.
///
/// The ideal (sinc) impulse response is centered on the middle tap, tapered by
/// `window` and scaled so that the taps sum to one.
///
/// ```
/// use firdes::{lowpass, FilterSpec, Window};
///
/// let spec = FilterSpec::new(800_000.0, 72_000.0, 115).unwrap();
/// let taps = lowpass(&spec, &Window::Blackman);
/// assert_eq!(taps.len(), 115);
/// assert!((taps.dc_gain() - 1.0).abs() < 1e-9);
/// ```
pub fn lowpass(spec: &FilterSpec, window: &Window) -> Taps {
    debug!(
        "designing lowpass: fs {} Hz, cutoff {} Hz, {} taps, {} window",
        spec.sample_rate, spec.cutoff, spec.num_taps, window
    );

    let ratio = 2.0 * spec.normalized_cutoff();
    let center = spec.center() as f64;
    let win = window.taps(spec.num_taps);

    let mut taps: Vec<f64> = win
        .iter()
        .enumerate()
        .map(|(i, w)| sinc(ratio * (i as f64 - center)) * w)
        .collect();

    let sum: f64 = taps.iter().sum();
    for tap in taps.iter_mut() {
        *tap /= sum;
    }

    Taps::new(taps)
}
