//! Error types and exit codes for thumbsketch.
//!
//! Every failure in the pipeline is fatal: the tool performs one generation
//! attempt and either finishes or reports the error and exits. There is no
//! retry or local recovery anywhere.

use std::path::PathBuf;

use thiserror::Error;

/// Process exit codes.
///
/// The contract is flat: `0` on success, `1` on any runtime failure.
/// Argument parsing errors are reported by clap with its own usage exit code.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Any runtime failure (credentials, input files, API, transport, I/O).
    pub const ERROR: i32 = 1;
}

/// Top-level error type for thumbsketch operations.
#[derive(Debug, Error)]
pub enum ThumbsketchError {
    /// Required credential missing from both the flag and the environment.
    #[error("environment variable '{0}' not set")]
    MissingCredential(&'static str),

    /// Input post or reference image does not exist.
    #[error("file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The post has no front-matter block to record the image in.
    #[error("no front-matter block in {}", .0.display())]
    MissingFrontMatter(PathBuf),

    /// The images API answered with a non-success status.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Raw response body, kept verbatim for diagnosis.
        body: String,
    },

    /// Network-level failure: connection, TLS, invalid URL.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered successfully but the payload could not be interpreted.
    #[error("failed to parse API response: {0}")]
    Parse(String),

    /// A successful response carried neither inline image data nor a URL.
    #[error("no image data in API response")]
    NoImageData,

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ThumbsketchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<base64::DecodeError> for ThumbsketchError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for thumbsketch operations.
pub type Result<T> = std::result::Result<T, ThumbsketchError>;

// ============================================================================
// Tests
// ============================================================================
