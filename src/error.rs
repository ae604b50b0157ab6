//! Unified error type for the perfeval library.
//!
//! Library code uses `EvalError` while CLI code uses `anyhow::Result`
//! for convenience.
//!
//! # Error Categories
//!
//! - **Io**: File system operations (open, read, write)
//! - **Parse**: Malformed prediction records (bad score, bad label, short lines)
//! - **Format**: Invalid persisted-sweep file structure (headers, column counts)
//! - **Validation**: Invalid parameters (sweep base, point count)

use std::fmt;
use std::path::PathBuf;

/// Unified error type for the perfeval library.
#[derive(Debug)]
pub enum EvalError {
    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: std::io::Error,
    },

    /// Malformed record on a specific input line (1-based).
    Parse { line: usize, detail: String },

    /// Invalid file format (header, column structure).
    Format { path: PathBuf, detail: String },

    /// Validation error (invalid parameters, data invariants).
    Validation(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Io {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "I/O error during {} on '{}': {}",
                    operation,
                    path.display(),
                    source
                )
            }
            EvalError::Parse { line, detail } => {
                write!(f, "Parse error at line {}: {}", line, detail)
            }
            EvalError::Format { path, detail } => {
                write!(f, "Invalid format in '{}': {}", path.display(), detail)
            }
            EvalError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EvalError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EvalError {
    fn from(err: std::io::Error) -> Self {
        EvalError::Io {
            path: PathBuf::new(),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for Results using EvalError.
pub type Result<T> = std::result::Result<T, EvalError>;

// ============================================================================
// Helper constructors
// ============================================================================

impl EvalError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, operation: &'static str, source: std::io::Error) -> Self {
        EvalError::Io {
            path: path.into(),
            operation,
            source,
        }
    }

    /// Create a parse error for a 1-based input line.
    pub fn parse(line: usize, detail: impl Into<String>) -> Self {
        EvalError::Parse {
            line,
            detail: detail.into(),
        }
    }

    /// Create a format error.
    pub fn format(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        EvalError::Format {
            path: path.into(),
            detail: detail.into(),
        }
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        EvalError::Validation(msg.into())
    }
}

// ============================================================================
// Tests
// ============================================================================
