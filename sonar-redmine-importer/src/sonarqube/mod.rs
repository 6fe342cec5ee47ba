//! Paginated SonarQube issue search.
//!
//! The search URL is used as given for the first page. Later pages append a
//! `pageIndex` query parameter. The fetcher fetches one page per call; the
//! runner decides how many pages there are from the first page's paging
//! block (see [`Paging::page_count`]).

mod error;
mod types;

pub use error::FetchError;
pub use types::{Flow, Location, Paging, SearchResponse, SourceIssue, TextRange};

use reqwest::{Client, StatusCode};
use tracing::{debug, info_span, Instrument};
use url::Url;

/// Builds the URL of a result page.
///
/// Page 1 is the search URL unchanged. Later pages get `&pageIndex=<page>`
/// appended, so the search URL is expected to carry a query already.
#[must_use]
pub fn page_url(search_url: &str, page: u64) -> String {
    if page <= 1 {
        return search_url.to_string();
    }
    format!("{search_url}&pageIndex={page}")
}

/// Client for the SonarQube issue search endpoint.
#[derive(Debug, Clone)]
pub struct SonarqubeClient {
    http: Client,
    search_url: String,
}

impl SonarqubeClient {
    /// Creates a client for a search URL that already carries its filters.
    pub fn new(http: Client, search_url: impl Into<String>) -> Self {
        Self {
            http,
            search_url: search_url.into(),
        }
    }

    /// Returns the base search URL.
    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// Fetches and decodes a single result page.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the URL is malformed, the request fails, the
    /// status is not 200 or the body is not a search response.
    pub async fn fetch_page(&self, page: u64) -> Result<SearchResponse, FetchError> {
        let url = page_url(&self.search_url, page);
        let span = info_span!("fetch_page", page, url = %url);

        async {
            let parsed = parse_search_url(&url)?;
            debug!("Requesting issue page");

            let response = self
                .http
                .get(parsed)
                .send()
                .await
                .map_err(FetchError::Transport)?;

            if response.status() != StatusCode::OK {
                return Err(FetchError::Status {
                    status: response.status().as_u16(),
                });
            }

            let body = response.text().await.map_err(FetchError::Transport)?;
            let response: SearchResponse = serde_json::from_str(&body)?;

            debug!(
                issues = response.issues.len(),
                total = response.paging.total,
                "Received issue page"
            );
            Ok(response)
        }
        .instrument(span)
        .await
    }
}

fn parse_search_url(url: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
