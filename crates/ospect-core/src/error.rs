//! Error types for the ospect-core library.

use thiserror::Error;

/// Main error type for the ospect library.
#[derive(Error, Debug)]
pub enum OspectError {
    /// Show-output extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Filter-registry invocation error.
    #[error("filter error: {0}")]
    Filter(#[from] FilterError),

    /// JSON conversion error at the registry boundary.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while extracting records from show output.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A duration token did not have the `hh:mm:ss` shape.
    #[error("malformed duration: {token}")]
    MalformedDuration { token: String },

    /// A captured token could not be converted to its field type.
    #[error("failed to parse {field}: {value}")]
    Parse { field: String, value: String },

    /// The cross-reference peer address is absent from the BFD list.
    #[error("{peer} not in bfd neighbor list")]
    PeerNotFound { peer: String },
}

/// Errors raised by the filter registry's uniform call surface.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The filter was invoked with the wrong number or type of arguments.
    #[error("{filter} expects {expected}")]
    Argument { filter: String, expected: String },
}

/// Result type for the ospect library.
pub type Result<T> = std::result::Result<T, OspectError>;
