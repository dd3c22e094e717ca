#![warn(missing_docs)]

//! Windowed-sinc low-pass FIR filter design.
//!
//! The ideal low-pass impulse response (a sinc) is truncated to an odd number of taps,
//! tapered with a window (Blackman by default), and normalized to unity DC gain.
//!
//! ## Example
//! ```
//! use firdes::FilterSpec;
//!
//! fn main() -> firdes::Result<()> {
//!     let spec = FilterSpec::new(8_000_000.0, 80_000.0, 59)?;
//!     let taps = spec.design();
//!
//!     assert_eq!(taps.len(), 59);
//!     print!("{}", firdes::format::csv(&taps));
//!     Ok(())
//! }
//! ```

/// Logging macro
#[macro_use]
pub extern crate tracing;

pub use num_complex;

pub use crate::config::Config;
pub use crate::config::NamedFilter;
pub use error::Error;
pub use error::Result;
pub use fir::FirFilter;
pub use firdes::lowpass;
pub use firdes::FilterSpec;
pub use format::Format;
pub use taps::Taps;
pub use windows::Window;

pub mod config;
mod error;
mod fir;
pub mod firdes;
pub mod format;
pub mod logging;
pub mod math;
pub mod taps;
pub mod windows;

/// Represents the status of a computation.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ComputationStatus {
    /// Indicates that the output buffer could hold more samples, if more
    /// input samples were present.
    InsufficientInput,

    /// Indicates that more output samples can be computed from the given input,
    /// but there is not enough available space in the output buffer.
    InsufficientOutput,

    /// Indicates that as many samples as possible could be computed from the
    /// input buffer, and that the output buffer was exactly filled.
    BothSufficient,
}

/// Trait for a state-less filter
pub trait Filter<InputType, OutputType> {
    /// Filters `input` into `output`. The filter keeps no state between calls, so one
    /// instance can serve several independent streams.
    ///
    /// Returns a tuple containing, in order:
    /// - The number of samples consumed from the input,
    /// - The number of samples produced in the output, and
    /// - A `ComputationStatus` which indicates whether the buffers were undersized.
    ///
    /// Elements of `output` beyond what is produced are left unchanged.
    fn filter(
        &self,
        input: &[InputType],
        output: &mut [OutputType],
    ) -> (usize, usize, ComputationStatus);
    /// Returns the filter length, i.e., the number of input samples required to compute an
    /// output.
    fn length(&self) -> usize;
}
