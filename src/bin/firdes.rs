use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use firdes::logging;
use firdes::Config;
use firdes::FilterSpec;
use firdes::Format;
use firdes::NamedFilter;
use firdes::Window;
use tracing::info;

#[derive(Parser, Debug)]
#[clap(version, about = "Design windowed-sinc low-pass FIR filters")]
struct Args {
    /// Sample rate in Hz
    #[clap(long, requires_all = ["cutoff", "taps"])]
    sample_rate: Option<f64>,
    /// Cutoff frequency in Hz
    #[clap(long, requires_all = ["sample_rate", "taps"])]
    cutoff: Option<f64>,
    /// Number of taps (odd)
    #[clap(long, requires_all = ["sample_rate", "cutoff"])]
    taps: Option<usize>,
    /// Window: rect, hann, hamming, blackman or kaiser:<beta>
    #[clap(long)]
    window: Option<Window>,
    /// Output format: csv or rust
    #[clap(long)]
    format: Option<Format>,
    /// Configuration file
    #[clap(long)]
    config: Option<PathBuf>,
}

impl Args {
    /// Apply command line overrides on top of the loaded configuration.
    fn apply(&self, config: &mut Config) -> firdes::Result<()> {
        if let (Some(sample_rate), Some(cutoff), Some(taps)) =
            (self.sample_rate, self.cutoff, self.taps)
        {
            let spec = FilterSpec::new(sample_rate, cutoff, taps)?;
            config.filters = vec![NamedFilter::new("taps", spec)];
        }
        if let Some(window) = self.window {
            config.window = window;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log = logging::init(Config::default().log_level);
    let mut config = Config::load(args.config.as_deref())?;
    log.set_level(config.log_level);
    args.apply(&mut config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for filter in &config.filters {
        let taps = firdes::lowpass(&filter.spec, &config.window);
        info!(
            "{}: {} taps, dc gain {}, center {}",
            filter.name,
            taps.len(),
            taps.dc_gain(),
            taps[filter.spec.center()]
        );
        out.write_all(config.format.render(&filter.name, &taps).as_bytes())?;
    }
    out.flush()?;

    Ok(())
}
