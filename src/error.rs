use thiserror::Error;

/// Convenience result type for query and loading operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Error type returned across the crate.
///
/// Loading and querying share this single enum.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The input document is not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset itself is absent (empty document, JSON `null`, ...).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// An argument is outside the domain of the operation.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A numeric operation found a present value that is not a number.
    #[error("non-numeric value for property '{property}' at record {index} (raw='{raw}')")]
    NonNumeric {
        index: usize,
        property: String,
        raw: String,
    },

    /// A record does not have the expected shape (e.g. no `fields` object).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A field value could not be converted into a [`crate::types::Value`].
    #[error("failed to parse value at row {row} field '{field}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        field: String,
        raw: String,
        message: String,
    },
}

impl QueryError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
