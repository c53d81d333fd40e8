//! Error types for dockgen
//!
//! Uses `thiserror` for library errors; the binary wraps everything in
//! `anyhow` at the top level.

use thiserror::Error;

/// Result type alias for dockgen operations
pub type DockgenResult<T> = Result<T, DockgenError>;

/// Main error type for dockgen operations
#[derive(Error, Debug)]
pub enum DockgenError {
    /// Backend platform identifier outside the supported set.
    ///
    /// Fatal: generation aborts before any file is written.
    #[error("unsupported backend platform '{platform}'")]
    UnsupportedPlatform { platform: String },

    /// Project descriptor is structurally invalid (e.g. not a JSON object,
    /// or missing `backendPlatform`)
    #[error("invalid project descriptor: {message}")]
    InvalidDescriptor { message: String },

    /// A service catalog resource failed to parse
    #[error("invalid service catalog '{catalog}': {message}")]
    InvalidCatalog { catalog: String, message: String },

    /// Template or raw asset id not present in the embedded set
    #[error("unknown template '{id}'")]
    UnknownTemplate { id: String },

    /// Template rendering error
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
