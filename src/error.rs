use thiserror::Error;

/// Caller contract violations. The analysis pipeline has no other failure
/// mode: splitting, matching and scoring are total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl GeoError {
    pub(crate) fn empty(field: &str) -> Self {
        GeoError::InvalidInput(format!("{field} text must not be empty"))
    }
}
