//! Error types for pattern generation and file injection

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for all pattern operations
#[derive(Debug, Error)]
pub enum PatternError {
    /// Reading or writing a target file failed
    #[error("Failed to {operation} '{}': {source}", .path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Target file has no `<pattern>` element with the expected id
    #[error("No <pattern id=\"{pattern_id}\"> element found in '{}'", .path.display())]
    PatternNotFound {
        /// Path of the file that was searched
        path: PathBuf,
        /// Pattern id that was searched for
        pattern_id: String,
    },

    /// Configuration parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Target descriptor could not be parsed
    #[error("Invalid target '{value}': {reason}")]
    InvalidTarget {
        /// Raw descriptor text
        value: String,
        /// Explanation of what is wrong with it
        reason: String,
    },

    /// Pattern matcher could not be compiled
    #[error("Failed to build pattern matcher: {source}")]
    InvalidMatcher {
        /// Underlying regex error
        #[from]
        source: regex::Error,
    },

    /// Console subscriber could not be installed
    #[error("Failed to initialize logging: {source}")]
    Logger {
        /// Underlying subscriber error
        #[from]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Result type alias for pattern operations
pub type Result<T> = std::result::Result<T, PatternError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PatternError {
    PatternError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid target error
pub fn invalid_target(value: &str, reason: &impl ToString) -> PatternError {
    PatternError::InvalidTarget {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Wrap an I/O error with the path and operation that produced it
pub fn file_system(path: &Path, operation: &'static str, source: std::io::Error) -> PatternError {
    PatternError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}
