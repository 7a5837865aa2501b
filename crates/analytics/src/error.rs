use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// A divisor was zero or negative. Carries the field name and the reason.
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("Error in calculation of '{0}': result does not fit in a decimal")]
    Calculation(String),
}

impl From<CoreError> for AnalyticsError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput { field, reason } => AnalyticsError::InvalidInput(field, reason),
        }
    }
}
