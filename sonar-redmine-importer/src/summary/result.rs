//! Per-issue import outcomes.

use std::fmt;

/// Step at which importing an issue failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    /// Rendering the subject or description.
    Transform,
    /// Posting the issue to Redmine.
    Create,
}

impl FailureStage {
    /// Returns the stage as a lowercase string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transform => "transform",
            Self::Create => "create",
        }
    }
}

impl fmt::Display for FailureStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of importing a single SonarQube issue.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportResult {
    /// The Redmine issue was created.
    Created {
        /// SonarQube issue key.
        key: String,
        /// Subject of the created issue.
        subject: String,
    },

    /// Dry run: the issue was transformed but not sent.
    Previewed {
        /// SonarQube issue key.
        key: String,
        /// Subject the issue would have.
        subject: String,
    },

    /// The issue was skipped after an error.
    Failed {
        /// SonarQube issue key.
        key: String,
        /// Step that failed.
        stage: FailureStage,
        /// Error message.
        error: String,
    },
}
