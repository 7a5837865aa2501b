use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    /// A `[before]` or `[after]` section describes a period that cannot be analysed.
    #[error("Invalid [{section}] period: {source}")]
    InvalidPeriod {
        section: &'static str,
        #[source]
        source: CoreError,
    },

    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}
