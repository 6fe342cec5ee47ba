//! Redmine issue creation.
//!
//! Each transformed issue is posted on its own to `<base>/issues.json`,
//! authenticated with the `X-Redmine-API-Key` header. The response body is
//! not read.

mod error;
mod types;

pub use error::CreateError;
pub use types::{CustomField, DestinationIssue, IssueRequest, PRIORITY_NORMAL, STATUS_NEW};

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, info_span, Instrument};
use url::Url;

/// Header carrying the Redmine API key.
pub const API_KEY_HEADER: &str = "X-Redmine-API-Key";

/// Client for the Redmine issues endpoint.
#[derive(Debug, Clone)]
pub struct RedmineClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl RedmineClient {
    /// Creates a client for a Redmine instance.
    pub fn new(http: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Returns the issue creation endpoint.
    pub fn issues_url(&self) -> String {
        format!("{}/issues.json", self.base_url)
    }

    /// Posts one issue.
    ///
    /// # Errors
    ///
    /// Returns [`CreateError`] if the endpoint URL is invalid, the request
    /// fails, or the server responds with a status of 300 or above.
    pub async fn create_issue(&self, issue: &DestinationIssue) -> Result<(), CreateError> {
        let endpoint = self.issues_url();
        let span = info_span!("create_issue", subject = %issue.subject);

        async {
            let url = Url::parse(&endpoint).map_err(|e| CreateError::InvalidUrl {
                url: endpoint.clone(),
                reason: e.to_string(),
            })?;

            let response = self
                .http
                .post(url)
                .header(CONTENT_TYPE, "application/json")
                .header(API_KEY_HEADER, &self.api_key)
                .json(&IssueRequest { issue })
                .send()
                .await?;

            let status = response.status();
            if status.as_u16() >= 300 {
                return Err(CreateError::Status {
                    status: status.as_u16(),
                });
            }

            debug!(status = status.as_u16(), "Issue accepted");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
