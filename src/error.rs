use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can stop a submission. The `Display` text of each
/// variant is the message surfaced in the error panel, so these stay
/// single-line and free of internal detail.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Failed to read file: {0}")]
    ReadFile(std::io::Error),

    #[error("Failed to send request: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success answer from the extraction service. `message` is the
    /// response body verbatim, or the fixed fallback when the body was
    /// empty.
    #[error("{message}")]
    Service { status: StatusCode, message: String },

    #[error("Failed to read response body: {0}")]
    Decode(reqwest::Error),

    #[error("Failed to save spreadsheet: {0}")]
    Save(std::io::Error),
}
