//! Issue creation error types.

use thiserror::Error;

/// Errors that can occur while creating a Redmine issue.
#[derive(Debug, Error)]
pub enum CreateError {
    /// The base URL does not produce a valid endpoint.
    #[error("redmine url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request could not be sent.
    #[error("redmine server: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status of 300 or above.
    #[error("response status code {status}")]
    Status { status: u16 },
}
