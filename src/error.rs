use thiserror::Error;

/// Rejections of the raw weight text typed by the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightInputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("weight must be greater than zero, got {0}")]
    NotPositive(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightError {
    /// The selection pointed at a name the catalog does not know.
    #[error("no celestial body named '{0}' in the catalog")]
    UnknownBody(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("wheel config block is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
