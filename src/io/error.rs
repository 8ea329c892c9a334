//! Error types for enumeration, background workers and output

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all wall operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Input validation failed at the boundary
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// More walls than the caller is willing to materialise
    TooManyWalls {
        /// Number of walls the request would produce
        count: u128,
        /// Configured maximum
        limit: u128,
    },

    /// Wall count does not fit in a `u128`
    CountOverflow {
        /// Number of rows of the width
        rows: usize,
        /// Requested wall height
        height: usize,
    },

    /// Enumeration was stopped before completion
    Cancelled,

    /// Background worker thread could not be created
    WorkerSpawn {
        /// Underlying I/O error from the thread builder
        source: std::io::Error,
    },

    /// Background worker exited without posting a result
    WorkerDisconnected,

    /// Background worker panicked
    WorkerPanicked,

    /// Rendering was requested but no wall exists for the dimensions
    NoWalls {
        /// Requested width
        width: i64,
        /// Requested height
        height: usize,
    },

    /// Failed to encode or save a rendered image
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

    /// JSON encoding failed
    Serialization {
        /// Underlying serializer error
        source: serde_json::Error,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::TooManyWalls { count, limit } => {
                write!(
                    f,
                    "Request produces {count} walls, more than the limit of {limit}"
                )
            }
            Self::CountOverflow { rows, height } => {
                write!(
                    f,
                    "Wall count for {rows} rows stacked {height} high overflows"
                )
            }
            Self::Cancelled => write!(f, "Enumeration was cancelled"),
            Self::WorkerSpawn { source } => {
                write!(f, "Failed to start worker thread: {source}")
            }
            Self::WorkerDisconnected => {
                write!(f, "Worker exited without returning a result")
            }
            Self::WorkerPanicked => write!(f, "Worker thread panicked"),
            Self::NoWalls { width, height } => {
                write!(f, "No walls exist for width {width} and height {height}")
            }
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
            Self::Serialization { source } => {
                write!(f, "Failed to encode JSON: {source}")
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } | Self::WorkerSpawn { source } => Some(source),
            Self::Serialization { source } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for wall results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Attaches the path and operation to raw I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`AlgorithmError::FileSystem`] naming the path
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| AlgorithmError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for AlgorithmError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for AlgorithmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
