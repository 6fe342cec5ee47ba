//! Runner configuration.

use crate::config::RedmineSettings;
use std::time::Duration;

/// Pause after each Redmine request unless configured otherwise.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(2);

/// Configuration for an import run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// SonarQube issue search URL, without a `pageIndex` parameter.
    search_url: String,
    /// Redmine destination settings.
    redmine: RedmineSettings,
    /// Pause after every issue creation attempt.
    request_delay: Duration,
    /// Whether to transform issues without creating them.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(search_url: impl Into<String>, redmine: RedmineSettings) -> Self {
        Self {
            search_url: search_url.into(),
            redmine,
            request_delay: DEFAULT_REQUEST_DELAY,
            dry_run: false,
        }
    }

    /// Sets the pause between Redmine requests.
    pub fn with_request_delay(mut self, request_delay: Duration) -> Self {
        self.request_delay = request_delay;
        self
    }

    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the SonarQube search URL.
    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// Returns the Redmine settings.
    pub fn redmine(&self) -> &RedmineSettings {
        &self.redmine
    }

    /// Returns the pause between Redmine requests.
    pub fn request_delay(&self) -> Duration {
        self.request_delay
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
