//! SonarQube to Redmine issue transformation.

use crate::config::RedmineSettings;
use crate::duration::parse_effort_hours;
use crate::redmine::{DestinationIssue, PRIORITY_NORMAL, STATUS_NEW};
use crate::sonarqube::SourceIssue;
use crate::templates::{TemplateError, TemplateRenderer};
use tracing::warn;

/// Builds the Redmine issue for a SonarQube finding.
///
/// Status, priority, project, tracker and parent come from constants and
/// `settings`. The estimate is read from the issue's debt; an unreadable
/// debt is logged and estimated as zero hours.
///
/// # Errors
///
/// Returns [`TemplateError`] if the subject or description fails to render.
pub fn transform_issue(
    settings: &RedmineSettings,
    renderer: &TemplateRenderer,
    issue: &SourceIssue,
) -> Result<DestinationIssue, TemplateError> {
    let description = renderer.render_description(issue)?;
    let subject = renderer.render_subject(issue)?;

    let estimated_hours = match parse_effort_hours(&issue.debt) {
        Ok(hours) => hours,
        Err(e) => {
            warn!(
                issue_key = %issue.key,
                error = %e,
                issue = ?issue,
                "Cannot determine duration of the issue"
            );
            0.0
        }
    };

    Ok(DestinationIssue {
        project_id: settings.project_id().to_string(),
        tracker_id: settings.tracker_id().to_string(),
        status_id: STATUS_NEW.to_string(),
        priority_id: PRIORITY_NORMAL.to_string(),
        subject,
        description,
        parent_issue_id: settings.parent_issue_id().to_string(),
        estimated_hours,
        custom_fields: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> RedmineSettings {
        RedmineSettings::new("https://redmine.example.com", "secret")
            .with_project_id("demo")
            .with_tracker_id("3")
            .with_parent_issue_id("42")
    }

    fn sample_issue(debt: &str) -> SourceIssue {
        SourceIssue {
            key: "AXyz".to_string(),
            rule: "squid:S1234".to_string(),
            component: "demo:src/main.go".to_string(),
            message: "Fix this".to_string(),
            debt: debt.to_string(),
            effort: debt.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn fills_fixed_and_configured_fields() {
        let renderer = TemplateRenderer::new();
        let issue = transform_issue(&settings(), &renderer, &sample_issue("1h30min")).unwrap();

        assert_eq!(issue.project_id, "demo");
        assert_eq!(issue.tracker_id, "3");
        assert_eq!(issue.status_id, "1");
        assert_eq!(issue.priority_id, "2");
        assert_eq!(issue.parent_issue_id, "42");
        assert_eq!(issue.subject, "S1234: Fix this - main.go");
        assert!(issue.description.contains("Rule: squid:S1234\n"));
        assert_eq!(issue.estimated_hours, 1.5);
        assert!(issue.custom_fields.is_empty());
    }

    #[test]
    fn unparsable_debt_estimates_zero_hours() {
        let renderer = TemplateRenderer::new();
        let issue = transform_issue(&settings(), &renderer, &sample_issue("2d")).unwrap();

        assert_eq!(issue.estimated_hours, 0.0);
        assert_eq!(issue.subject, "S1234: Fix this - main.go");
    }

    #[test]
    fn empty_debt_estimates_zero_hours() {
        let renderer = TemplateRenderer::new();
        let issue = transform_issue(&settings(), &renderer, &sample_issue("")).unwrap();

        assert_eq!(issue.estimated_hours, 0.0);
    }
}
