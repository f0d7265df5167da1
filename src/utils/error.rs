//! Error handling for the export surfaces
//!
//! The math compiler and segmenter never fail; errors only come from reading
//! requests (I/O, JSON) and from rejecting unusable input.

use std::fmt;

use chatdoc_omml_backend::RenderError;

/// Export error type
#[derive(Debug)]
pub enum ExportError {
    /// The request parsed but cannot be exported
    InvalidInput { message: String },
    /// The request body is not valid JSON for a chat export
    Json { message: String, line: usize, column: usize },
    /// IO error (for file operations)
    Io { message: String },
    /// Math rendering failed where no fallback applies
    Render(RenderError),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::InvalidInput { message } => write!(f, "Invalid input: {}", message),
            ExportError::Json {
                message,
                line,
                column,
            } => write!(
                f,
                "Malformed request at line {}, column {}: {}",
                line, column, message
            ),
            ExportError::Io { message } => write!(f, "IO error: {}", message),
            ExportError::Render(err) => write!(f, "Render error: {}", err),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Render(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Json {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

impl From<RenderError> for ExportError {
    fn from(err: RenderError) -> Self {
        ExportError::Render(err)
    }
}

impl ExportError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ExportError::InvalidInput {
            message: message.into(),
        }
    }
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
