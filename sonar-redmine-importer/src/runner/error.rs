//! Runner error types.

/// Errors that abort an import run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A page of SonarQube issues could not be fetched.
    #[error(transparent)]
    Fetch(#[from] crate::sonarqube::FetchError),

    /// HTTP client initialization errors.
    #[error("HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
