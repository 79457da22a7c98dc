//! Errors raised while loading or validating calculator inputs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("row {row} ({name}): {source}")]
    Row {
        row: usize,
        name: String,
        #[source]
        source: Box<InputError>,
    },
}

impl InputError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        InputError::InvalidField { field, reason: reason.into() }
    }
}
