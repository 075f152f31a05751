//! Error types for variant lookup and JSON decoding.

use thiserror::Error;

/// Failure to resolve a variant name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No declared variant carries this name.
    #[error("No TestEnum variant named '{name}'")]
    NotFound {
        /// The name that was looked up.
        name: String,
    },
}

/// Failure to decode a `TestEnum` from JSON.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The input was not valid JSON.
    #[error("Invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    /// The JSON value was not a string.
    #[error("Expected an enum string, found {found}")]
    ExpectedEnumString {
        /// JSON type of the value that was found.
        found: &'static str,
    },

    /// The string did not name a declared variant.
    #[error("'{value}' is not a valid TestEnum value")]
    InvalidEnumValue {
        /// The unrecognized string.
        value: String,
    },
}

impl DecodeError {
    /// Stable message key identifying the kind of failure.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            DecodeError::Syntax(_) => "error.expected.jsvalue",
            DecodeError::ExpectedEnumString { .. } => "error.expected.enumstring",
            DecodeError::InvalidEnumValue { .. } => "error.expected.validenumvalue",
        }
    }
}

impl From<LookupError> for DecodeError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotFound { name } => DecodeError::InvalidEnumValue { value: name },
        }
    }
}
