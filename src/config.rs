//! Configuration Management
//!
//! Sources, in increasing priority: built-in defaults, the user config
//! (`<config dir>/firdes/config.toml`), the project config (`firdes.toml` in
//! the working directory, or an explicitly given file), and environment
//! variables prefixed with `FIRDES_`.
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use config::File;
use config::FileFormat;
use config::Source;
use config::Value;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use crate::format::Format;
use crate::windows::Window;
use crate::Error;
use crate::FilterSpec;
use crate::Result;

/// A filter to design, with the name used when printing it.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedFilter {
    /// Identifier, e.g., used as array name by [`Format::Rust`].
    pub name: String,
    /// Filter parameters.
    pub spec: FilterSpec,
}

impl NamedFilter {
    /// Create a named filter.
    pub fn new(name: impl Into<String>, spec: FilterSpec) -> Self {
        Self {
            name: name.into(),
            spec,
        }
    }
}

#[derive(Deserialize)]
struct FilterEntry {
    name: Option<String>,
    #[serde(flatten)]
    spec: FilterSpec,
}

/// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LevelFilter,
    /// Window used for all filters
    pub window: Window,
    /// Output format
    pub format: Format,
    /// Filters to design, in output order
    pub filters: Vec<NamedFilter>,
    misc: HashMap<String, Value>,
}

impl Config {
    /// Load the configuration from all sources.
    ///
    /// If `path` is given, it replaces the project config and must exist and be valid.
    /// Problems with the implicit user and project config files are logged and the
    /// defaults are kept.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let user = dirs::config_dir().map(|mut user| {
            user.push("firdes");
            user.push("config.toml");
            user
        });
        match path {
            Some(p) => Config::load_sources(user, p, true),
            None => Config::load_sources(user, Path::new("firdes.toml"), false),
        }
    }

    fn load_sources(user: Option<PathBuf>, project: &Path, required: bool) -> Result<Config> {
        let mut settings = ::config::Config::builder();

        // user config
        if let Some(user) = user {
            settings = settings.add_source(File::from(user).required(false));
        }

        // project config
        settings = settings.add_source(
            File::new(&project.to_string_lossy(), FileFormat::Toml).required(required),
        );

        // env config
        settings = settings.add_source(::config::Environment::with_prefix("firdes"));

        let config = settings
            .build()
            .map_err(Error::from)
            .and_then(Config::from_settings);
        match config {
            Ok(c) => Ok(c),
            Err(e) if required => Err(e),
            Err(e) => {
                warn!("error reading config, using defaults: {e}");
                Ok(Config::default())
            }
        }
    }

    /// Get an unrecognized value from the config.
    pub fn get_value(&self, name: &str) -> Option<&Value> {
        self.misc.get(name)
    }

    /// Try to parse an unrecognized value from the config.
    pub fn get<T: FromStr>(&self, name: &str) -> Option<T> {
        self.misc
            .get(name)
            .and_then(|v| v.clone().into_string().ok())
            .and_then(|v| v.parse::<T>().ok())
    }

    /// Parse a configuration from TOML text on top of the defaults.
    ///
    /// ```
    /// use firdes::Config;
    ///
    /// let c = Config::from_toml("window = \"hann\"").unwrap();
    /// assert_eq!(c.window, firdes::Window::Hann);
    /// assert_eq!(c.filters.len(), 2);
    /// ```
    pub fn from_toml(s: &str) -> Result<Config> {
        let settings = ::config::Config::builder()
            .add_source(File::from_str(s, FileFormat::Toml))
            .build()?;
        Config::from_settings(settings)
    }

    fn from_settings(settings: ::config::Config) -> Result<Config> {
        let mut c = Config::default();
        let map = settings.collect()?;
        for (k, v) in map.into_iter() {
            match k.as_str() {
                "log_level" => {
                    c.log_level = config_parse::<LevelFilter>(&k, &v)?;
                }
                "window" => {
                    c.window = config_parse::<Window>(&k, &v)?;
                }
                "format" => {
                    c.format = config_parse::<Format>(&k, &v)?;
                }
                "filters" => {
                    c.filters = parse_filters(v)?;
                }
                _ => {
                    debug!("unrecognized config key {k}");
                    c.misc.insert(k, v);
                }
            }
        }
        Ok(c)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            #[cfg(debug_assertions)]
            log_level: LevelFilter::DEBUG,
            #[cfg(not(debug_assertions))]
            log_level: LevelFilter::INFO,
            window: Window::Blackman,
            format: Format::Csv,
            filters: vec![
                NamedFilter::new("taps1", FilterSpec::new_unchecked(8_000_000.0, 80_000.0, 59)),
                NamedFilter::new("taps2", FilterSpec::new_unchecked(800_000.0, 72_000.0, 115)),
            ],
            misc: HashMap::new(),
        }
    }
}

fn parse_filters(v: Value) -> Result<Vec<NamedFilter>> {
    let entries: Vec<FilterEntry> = v
        .try_deserialize()
        .map_err(|e| Error::InvalidParameter(format!("invalid filter list: {e}")))?;
    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(i, e)| NamedFilter {
            name: e.name.unwrap_or_else(|| format!("taps{}", i + 1)),
            spec: e.spec,
        })
        .collect())
}

fn config_parse<T: FromStr>(key: &str, v: &Value) -> Result<T> {
    v.clone()
        .into_string()
        .ok()
        .and_then(|s| s.parse::<T>().ok())
        .ok_or_else(|| Error::InvalidParameter(format!("invalid config value for {key}: {v}")))
}
