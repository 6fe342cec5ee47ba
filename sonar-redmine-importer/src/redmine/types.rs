//! Redmine issue payload types.

use serde::{Deserialize, Serialize};

/// Status id Redmine assigns to "New".
pub const STATUS_NEW: &str = "1";

/// Priority id Redmine assigns to "Normal".
pub const PRIORITY_NORMAL: &str = "2";

/// A custom field value on a Redmine issue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomField {
    pub id: String,
    pub value: String,
}

/// The issue created in Redmine for one SonarQube finding.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DestinationIssue {
    pub project_id: String,
    pub tracker_id: String,
    pub status_id: String,
    pub priority_id: String,
    pub subject: String,
    pub description: String,
    pub parent_issue_id: String,
    pub estimated_hours: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomField>,
}

/// Request body for `POST /issues.json`.
#[derive(Debug, Serialize)]
pub struct IssueRequest<'a> {
    pub issue: &'a DestinationIssue,
}
