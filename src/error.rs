use thiserror::Error;

/// Errors raised while validating filter parameters or loading configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// A filter or window parameter is outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// An explicitly requested configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type with [`Error`] as error.
pub type Result<T> = std::result::Result<T, Error>;
