//! Flip layout error types

use thiserror::Error;

/// Errors raised while configuring a flip layout
#[derive(Error, Debug)]
pub enum FlipError {
    /// Configuration values out of range
    #[error("Invalid flip config: {0}")]
    InvalidConfig(String),

    /// Configuration source could not be parsed
    #[error("Failed to parse flip config: {0}")]
    ConfigParse(String),
}

impl From<toml::de::Error> for FlipError {
    fn from(err: toml::de::Error) -> Self {
        FlipError::ConfigParse(err.to_string())
    }
}

/// Result type for flip layout operations
pub type Result<T> = std::result::Result<T, FlipError>;
