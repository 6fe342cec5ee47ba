//! Orchestrates a SonarQube to Redmine import run.
//!
//! Pages are fetched one after another. Every issue on a page is transformed
//! and posted before the next page is requested, with a fixed pause after
//! each post. A page that cannot be fetched ends the run; an issue that
//! cannot be transformed or created is logged and skipped.

mod config;
mod error;

pub use config::{RunnerConfig, DEFAULT_REQUEST_DELAY};
pub use error::RunnerError;

use crate::rate_limit::RequestPacer;
use crate::redmine::RedmineClient;
use crate::sonarqube::{SonarqubeClient, SourceIssue};
use crate::summary::{FailureStage, ImportResult, RunSummary};
use crate::templates::TemplateRenderer;
use crate::transform::transform_issue;
use reqwest::Client;
use tracing::{error, info, info_span, Instrument};

/// Orchestrates a full import run.
pub struct Runner {
    config: RunnerConfig,
    sonarqube: SonarqubeClient,
    redmine: RedmineClient,
    renderer: TemplateRenderer,
    pacer: RequestPacer,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Client`] if the HTTP client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let sonarqube = SonarqubeClient::new(http.clone(), config.search_url());
        let redmine = RedmineClient::new(
            http,
            config.redmine().base_url(),
            config.redmine().api_key(),
        );
        let pacer = RequestPacer::new(config.request_delay());

        Ok(Self {
            config,
            sonarqube,
            redmine,
            renderer: TemplateRenderer::new(),
            pacer,
        })
    }

    /// Replaces the subject and description renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: TemplateRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Executes the full import.
    ///
    /// The number of pages is taken from the first page's paging block and
    /// never re-evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Fetch`] if any page cannot be fetched. Issues
    /// already created stay created.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new(self.config.dry_run());

        info!(
            url = %self.sonarqube.search_url(),
            request_delay_ms = self.pacer.interval().as_millis() as u64,
            dry_run = self.config.dry_run(),
            "Fetching SonarQube issues"
        );
        let first = self.sonarqube.fetch_page(1).await?;
        summary.pages_fetched += 1;

        let pages = first.paging.page_count();
        info!(
            total = first.paging.total,
            page_size = first.paging.page_size,
            pages,
            "Found SonarQube issues"
        );

        self.import_page(1, &first.issues, &mut summary).await;

        for page in 2..=pages {
            let response = self.sonarqube.fetch_page(page).await?;
            summary.pages_fetched += 1;
            self.import_page(page, &response.issues, &mut summary).await;
        }

        Ok(summary)
    }

    async fn import_page(&self, page: u64, issues: &[SourceIssue], summary: &mut RunSummary) {
        let span = info_span!("import_page", page, count = issues.len());

        async {
            info!("Importing page");
            for issue in issues {
                let result = self.import_issue(issue).await;
                summary.record_result(&result);
            }
        }
        .instrument(span)
        .await;
    }

    async fn import_issue(&self, issue: &SourceIssue) -> ImportResult {
        let destination =
            match transform_issue(self.config.redmine(), &self.renderer, issue) {
                Ok(destination) => destination,
                Err(e) => {
                    error!(
                        issue_key = %issue.key,
                        error = %e,
                        issue = ?issue,
                        "Failed to transform issue"
                    );
                    return ImportResult::Failed {
                        key: issue.key.clone(),
                        stage: FailureStage::Transform,
                        error: e.to_string(),
                    };
                }
            };

        if self.config.dry_run() {
            info!(
                issue_key = %issue.key,
                subject = %destination.subject,
                estimated_hours = destination.estimated_hours,
                "[DRY RUN] Would create issue"
            );
            return ImportResult::Previewed {
                key: issue.key.clone(),
                subject: destination.subject,
            };
        }

        let result = match self.redmine.create_issue(&destination).await {
            Ok(()) => {
                info!(issue_key = %issue.key, subject = %destination.subject, "Issue created");
                ImportResult::Created {
                    key: issue.key.clone(),
                    subject: destination.subject,
                }
            }
            Err(e) => {
                error!(
                    issue_key = %issue.key,
                    error = %e,
                    issue = ?issue,
                    "Failed to create issue"
                );
                ImportResult::Failed {
                    key: issue.key.clone(),
                    stage: FailureStage::Create,
                    error: e.to_string(),
                }
            }
        };

        self.pacer.pause().await;
        result
    }
}
