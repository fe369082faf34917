//! Error types for structer.

use thiserror::Error;

/// All possible errors from populating a record.
///
/// Leaf values that fail to parse (a boolean, number or duration) are not
/// errors: the field keeps its zero value. Only structured literals are
/// strict.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The populate target is not a record.
    #[error("invalid argument: expected a record, got {0}")]
    InvalidArgument(String),

    /// A sequence, mapping or record literal is not valid JSON for its type.
    #[error("malformed default for '{path}': {message}")]
    MalformedDefault { path: String, message: String },
}

impl Error {
    pub(crate) fn malformed(path: &str, err: serde_json::Error) -> Self {
        Error::MalformedDefault {
            path: path.to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type for populate operations.
pub type Result<T> = std::result::Result<T, Error>;
