//! Error types for image loading, tiling and export operations

use std::fmt;
use std::path::PathBuf;

/// Failure to resolve an image reference into a decoded bitmap
#[derive(Debug)]
pub enum LoadError {
    /// The reference was an empty string (for example an unfilled placeholder variant)
    Empty,

    /// A `data:` URI could not be split into header and payload
    MalformedDataUri {
        /// What was wrong with the URI
        reason: String,
    },

    /// The base64 payload of a data URI failed to decode
    Base64 {
        /// Underlying decoder error
        source: base64::DecodeError,
    },

    /// The source cannot be reached from this process
    Unreachable {
        /// The reference as given by the caller
        reference: String,
        /// Why the source is unreachable
        reason: String,
    },

    /// Reading a local file failed
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Bytes were read but are not a decodable image
    Undecodable {
        /// Short description of the source (path or data URI header)
        reference: String,
        /// Underlying decoder error
        source: image::ImageError,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Image reference is empty"),
            Self::MalformedDataUri { reason } => write!(f, "Malformed data URI: {reason}"),
            Self::Base64 { source } => write!(f, "Invalid base64 payload: {source}"),
            Self::Unreachable { reference, reason } => {
                write!(f, "Image source '{reference}' is unreachable: {reason}")
            }
            Self::Io { path, source } => {
                write!(f, "Failed to read '{}': {source}", path.display())
            }
            Self::Undecodable { reference, source } => {
                write!(f, "Failed to decode image '{reference}': {source}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Base64 { source } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::Undecodable { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Main error type for all pattern generation operations
#[derive(Debug)]
pub enum PatternError {
    /// Source image could not be loaded
    Load(LoadError),

    /// Image has no usable square region
    DegenerateImage {
        /// Source width in pixels
        width: u32,
        /// Source height in pixels
        height: u32,
    },

    /// Encoding a bitmap to PNG failed
    Encode {
        /// Underlying encoder error
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

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(err) => write!(f, "{err}"),
            Self::DegenerateImage { width, height } => {
                write!(
                    f,
                    "Image of size {width}x{height} has no square region to tile"
                )
            }
            Self::Encode { source } => write!(f, "Failed to encode image: {source}"),
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(err) => Some(err),
            Self::Encode { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pattern generation results
pub type Result<T> = std::result::Result<T, PatternError>;

impl From<LoadError> for PatternError {
    fn from(err: LoadError) -> Self {
        Self::Load(err)
    }
}

impl From<base64::DecodeError> for LoadError {
    fn from(source: base64::DecodeError) -> Self {
        Self::Base64 { source }
    }
}

impl From<std::io::Error> for PatternError {
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
) -> PatternError {
    PatternError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
