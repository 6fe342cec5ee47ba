//! Issue search error types.

use thiserror::Error;

/// Errors that can occur while fetching a page of SonarQube issues.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The search URL could not be parsed.
    #[error("sonarqube url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request could not be sent or the body could not be read.
    #[error("sonarqube server: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with anything other than 200.
    #[error("sonarqube server response status code is {status}, expected 200")]
    Status { status: u16 },

    /// The body is not a valid search response.
    #[error("sonarqube response body: {0}")]
    Decode(#[from] serde_json::Error),
}
