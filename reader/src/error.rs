//! Reader error types
//!
//! - `ReaderError`: what a fetch or a presentation step can fail with
//! - `SchemaError`: registry-internal validation errors

use thiserror::Error;

/// Errors surfaced to the presentation layer.
///
/// None of them is retried; each one degrades only the view that asked.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// Network failure or a non-success status
    #[error("Request failed: {0}")]
    Request(String),

    /// Body was not well-formed JSON (or protobuf)
    #[error("Malformed response: {0}")]
    Parse(String),

    /// Well-formed body that does not match the expected shape
    #[error("Invalid response: {0}")]
    Schema(String),

    /// Not an ISO calendar date
    #[error("Invalid date: {0}")]
    DateParse(String),
}

/// Errors from the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// First structural mismatch, as `<field path>: <reason>`
    #[error("{0}")]
    Mismatch(String),

    /// Value passed validation but could not be decoded
    #[error("decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// Schema generation or compilation error
    #[error("schema generation error: {0}")]
    Generation(String),
}

impl From<SchemaError> for ReaderError {
    fn from(e: SchemaError) -> Self {
        ReaderError::Schema(e.to_string())
    }
}

impl ReaderError {
    /// Short kind label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            ReaderError::Request(_) => "request",
            ReaderError::Parse(_) => "parse",
            ReaderError::Schema(_) => "schema",
            ReaderError::DateParse(_) => "date_parse",
        }
    }
}
