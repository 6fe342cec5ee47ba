//! Run summary types.

use super::result::ImportResult;

/// Summary of a complete run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of SonarQube pages fetched.
    pub pages_fetched: u64,

    /// Number of SonarQube issues read.
    pub issues_seen: usize,

    /// Number of Redmine issues successfully created.
    pub issues_created: usize,

    /// Number of issues transformed in dry-run mode.
    pub issues_previewed: usize,

    /// Number of issues skipped after a transform or create error.
    pub issues_failed: usize,

    /// One line per skipped issue: key, failed step and error.
    pub failures: Vec<String>,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with an issue result.
    pub fn record_result(&mut self, result: &ImportResult) {
        self.issues_seen += 1;
        match result {
            ImportResult::Created { .. } => self.issues_created += 1,
            ImportResult::Previewed { .. } => self.issues_previewed += 1,
            ImportResult::Failed { key, stage, error } => {
                self.issues_failed += 1;
                self.failures.push(format!("{key} ({stage}): {error}"));
            }
        }
    }

    /// Returns true if any issue was skipped.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.issues_failed > 0
    }
}
