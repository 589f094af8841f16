//! Error types for grid access, fill operations and the presentation layer

use std::fmt;
use std::path::PathBuf;

/// Main error type for all grid and fill operations
#[derive(Debug)]
pub enum FloodError {
    /// Direct cell access outside the grid
    ///
    /// Only raised by `get`/`set`. Fill operations validate the start cell
    /// first and treat an out-of-bounds start as a no-op.
    OutOfBounds {
        /// Requested cell as `[x, y]`
        position: [usize; 2],
        /// Grid dimensions as `(width, height)`
        dimensions: (usize, usize),
    },

    /// Structurally invalid input, such as a grid without cells
    InvalidArgument {
        /// Name of the offending argument
        argument: &'static str,
        /// Explanation of what is wrong with it
        reason: String,
    },

    /// User supplied parameter could not be parsed or validated
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered image or animation
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

impl fmt::Display for FloodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Cell ({}, {}) is out of bounds for a {}x{} grid",
                    position[0], position[1], dimensions.0, dimensions.1
                )
            }
            Self::InvalidArgument { argument, reason } => {
                write!(f, "Invalid argument '{argument}': {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
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
        }
    }
}

impl std::error::Error for FloodError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fill results
pub type Result<T> = std::result::Result<T, FloodError>;

impl From<image::ImageError> for FloodError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for FloodError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid argument error
pub fn invalid_argument(argument: &'static str, reason: &impl ToString) -> FloodError {
    FloodError::InvalidArgument {
        argument,
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FloodError {
    FloodError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
