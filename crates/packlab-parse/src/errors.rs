use packlab_core::ValidationReport;
use thiserror::Error;

/// Failure taxonomy for the pack parsing pipeline.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input is not parseable as JSON even after preprocessing.
    #[error("json syntax error: {message}")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },
    /// The input parses as JSON but violates the pack schema.
    #[error("pack validation failed: {0}")]
    Schema(ValidationReport),
    /// File read failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// URL fetch returned a non-success status.
    #[error("http error {status}: {message}")]
    Http { status: u16, message: String },
    /// URL fetch failed at the transport level.
    #[error("network error: {0}")]
    Network(String),
    /// The source tagged union specified an unrecognized kind.
    #[error("unsupported source kind: {0}")]
    UnsupportedSource(String),
}

impl ParseError {
    /// Rendered per-field messages when this is a schema failure.
    pub fn validation_errors(&self) -> Option<Vec<String>> {
        match self {
            ParseError::Schema(report) => Some(report.rendered_errors()),
            _ => None,
        }
    }
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;
