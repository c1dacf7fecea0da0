//! Error types for chord resolution, rasterization and sheet export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all chart operations
///
/// Only caller mistakes and I/O failures end up here. Conditions the pipeline can
/// recover from are reported as [`crate::io::diagnostics::Advisory`] values instead.
#[derive(Debug)]
pub enum ChartError {
    /// Note name outside the known vocabulary
    UnknownNote {
        /// The name that failed to parse
        name: String,
    },

    /// Chord quality suffix outside the known table
    UnknownChordKind {
        /// The suffix that failed to parse
        name: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Diagrams placed on one sheet must share a footprint
    DimensionMismatch {
        /// Footprint of the first diagram (height, width)
        expected: (usize, usize),
        /// Footprint of the offending diagram (height, width)
        found: (usize, usize),
        /// Grid position of the offending diagram (row, col)
        position: (usize, usize),
    },

    /// Nothing to compose
    EmptySheet,

    /// Failed to encode or save the sheet image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNote { name } => write!(f, "Unknown note name '{name}'"),
            Self::UnknownChordKind { name } => write!(f, "Unknown chord kind '{name}'"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::DimensionMismatch {
                expected,
                found,
                position,
            } => {
                write!(
                    f,
                    "Diagram at row {} col {} is {}x{}, expected {}x{}",
                    position.0, position.1, found.0, found.1, expected.0, expected.1
                )
            }
            Self::EmptySheet => write!(f, "Sheet contains no diagrams"),
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for chart results
pub type Result<T> = std::result::Result<T, ChartError>;

impl From<image::ImageError> for ChartError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for ChartError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ChartError {
    ChartError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
