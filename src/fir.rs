use std::cmp::Ordering;
use std::marker::PhantomData;
use std::ops::Add;
use std::ops::Mul;

use num_traits::Zero;

use crate::ComputationStatus;
use crate::Filter;
use crate::Taps;

/// A non-resampling FIR filter. Calling `filter()` on this struct always
/// produces exactly as many samples as it consumes.
///
/// Works for every sample type that can be scaled by an `f64` tap, in
/// particular `f64` and `Complex<f64>`.
///
/// ```
/// use firdes::{Filter, FirFilter};
///
/// let fir = FirFilter::<f64>::new(vec![1.0, 2.0, 3.0]);
///
/// let input = [1.0, 2.0, 3.0];
/// let mut output = [0.0];
/// fir.filter(&input, &mut output);
/// assert_eq!(output[0], 14.0);
/// ```
#[derive(Debug, Clone)]
pub struct FirFilter<SampleType> {
    taps: Vec<f64>,
    _sampletype: PhantomData<SampleType>,
}

impl<SampleType> FirFilter<SampleType> {
    /// Create a new non-resampling FIR filter using the given taps.
    pub fn new(taps: impl Into<Vec<f64>>) -> Self {
        Self {
            taps: taps.into(),
            _sampletype: PhantomData,
        }
    }

    /// Taps of the filter.
    pub fn taps(&self) -> &[f64] {
        &self.taps
    }
}

impl<SampleType> From<Taps> for FirFilter<SampleType> {
    fn from(taps: Taps) -> Self {
        Self::new(taps)
    }
}

impl<SampleType> Filter<SampleType, SampleType> for FirFilter<SampleType>
where
    SampleType: Copy + Zero + Add<Output = SampleType> + Mul<f64, Output = SampleType>,
{
    fn filter(
        &self,
        input: &[SampleType],
        output: &mut [SampleType],
    ) -> (usize, usize, ComputationStatus) {
        let num_taps = self.taps.len();
        let num_producable_samples = (input.len() + 1).saturating_sub(num_taps);
        let (n, status) = match num_producable_samples.cmp(&output.len()) {
            Ordering::Greater => (output.len(), ComputationStatus::InsufficientOutput),
            Ordering::Equal => (num_producable_samples, ComputationStatus::BothSufficient),
            Ordering::Less => (num_producable_samples, ComputationStatus::InsufficientInput),
        };

        for (k, out) in output.iter_mut().take(n).enumerate() {
            *out = input[k..k + num_taps]
                .iter()
                .zip(self.taps.iter())
                .fold(SampleType::zero(), |acc, (x, t)| acc + *x * *t);
        }

        (n, n, status)
    }

    fn length(&self) -> usize {
        self.taps.len()
    }
}
