//! Logging setup for the command line tool.
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::reload;
use tracing_subscriber::Registry;

/// Environment variable with additional filter directives.
pub const LOG_ENV: &str = "FIRDES_LOG";

/// Handle to change the level of the installed subscriber.
pub struct LogHandle(reload::Handle<EnvFilter, Registry>);

impl LogHandle {
    /// Replace the default directive, e.g., once the configuration is loaded.
    pub fn set_level(&self, level: LevelFilter) {
        if let Err(e) = self.0.reload(env_filter(level)) {
            debug!("could not change log level: {e}");
        }
    }
}

fn env_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy()
}

/// Install a compact stderr subscriber.
///
/// `level` is the default directive; directives from [`LOG_ENV`] are applied on top.
/// Calling this more than once keeps the first subscriber.
pub fn init(level: LevelFilter) -> LogHandle {
    let format = fmt::layer()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_target(false)
        .compact();

    let (filter, handle) = reload::Layer::new(env_filter(level));

    if tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .try_init()
        .is_err()
    {
        debug!("logger already initialized");
    }
    LogHandle(handle)
}
