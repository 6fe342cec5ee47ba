//! Template renderer.

use super::{file_name, squid_prefix, TemplateError, DESCRIPTION_TEMPLATE, SUBJECT_TEMPLATE};
use crate::sonarqube::SourceIssue;
use handlebars::{handlebars_helper, no_escape, Handlebars};
use serde_json::{json, Value};

handlebars_helper!(squid_helper: |rule: str| squid_prefix(rule));
handlebars_helper!(file_name_helper: |component: str| file_name(component));

/// Creates a configured Handlebars registry with custom helpers.
///
/// The registry is configured with:
/// - No HTML escaping (plain text output)
/// - Strict mode (catches missing variables)
/// - `squid` and `file_name` helpers for the subject line
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);

    hbs.register_helper("squid", Box::new(squid_helper));
    hbs.register_helper("file_name", Box::new(file_name_helper));

    hbs
}

/// Renders issue subjects and descriptions.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
    subject_template: String,
    description_template: String,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a renderer using [`SUBJECT_TEMPLATE`] and [`DESCRIPTION_TEMPLATE`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_templates(SUBJECT_TEMPLATE, DESCRIPTION_TEMPLATE)
    }

    /// Creates a renderer with custom subject and description templates.
    ///
    /// Templates may use the `squid` and `file_name` helpers and the fields
    /// `key`, `rule`, `component`, `message`, `line`, `text_range.*`, `type`,
    /// `debt`, `effort` and `tags`.
    #[must_use]
    pub fn with_templates(
        subject_template: impl Into<String>,
        description_template: impl Into<String>,
    ) -> Self {
        Self {
            handlebars: create_handlebars_registry(),
            subject_template: subject_template.into(),
            description_template: description_template.into(),
        }
    }

    /// Renders `"<squid> <message> - <file name>"` for an issue.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_subject(&self, issue: &SourceIssue) -> Result<String, TemplateError> {
        self.render_template("subject", &self.subject_template, &issue_data(issue))
    }

    /// Renders the multi-section description for an issue.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_description(&self, issue: &SourceIssue) -> Result<String, TemplateError> {
        self.render_template("description", &self.description_template, &issue_data(issue))
    }

    fn render_template(
        &self,
        name: &'static str,
        template: &str,
        data: &Value,
    ) -> Result<String, TemplateError> {
        self.handlebars
            .render_template(template, data)
            .map_err(|source| TemplateError {
                template: name,
                source,
            })
    }
}

fn issue_data(issue: &SourceIssue) -> Value {
    json!({
        "key": issue.key,
        "rule": issue.rule,
        "component": issue.component,
        "message": issue.message,
        "line": issue.line,
        "text_range": {
            "start_line": issue.text_range.start_line,
            "end_line": issue.text_range.end_line,
            "start_offset": issue.text_range.start_offset,
            "end_offset": issue.text_range.end_offset
        },
        "type": issue.issue_type,
        "debt": issue.debt,
        "effort": issue.effort,
        "tags": issue.tags
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sonarqube::TextRange;

    fn sample_issue() -> SourceIssue {
        SourceIssue {
            key: "AXyz".to_string(),
            rule: "squid:S1234".to_string(),
            component: "src/main.go".to_string(),
            message: "Fix this".to_string(),
            line: 12,
            text_range: TextRange {
                start_line: 12,
                end_line: 13,
                start_offset: 4,
                end_offset: 9,
            },
            issue_type: "CODE_SMELL".to_string(),
            debt: "10min".to_string(),
            effort: "10min".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn renders_subject() {
        let renderer = TemplateRenderer::new();
        let subject = renderer.render_subject(&sample_issue()).unwrap();
        assert_eq!(subject, "S1234: Fix this - main.go");
    }

    #[test]
    fn subject_without_rule_colon_starts_with_space() {
        let renderer = TemplateRenderer::new();
        let mut issue = sample_issue();
        issue.rule = "S1234".to_string();

        let subject = renderer.render_subject(&issue).unwrap();
        assert_eq!(subject, " Fix this - main.go");
    }

    #[test]
    fn subject_without_component_slash_has_empty_file() {
        let renderer = TemplateRenderer::new();
        let mut issue = sample_issue();
        issue.component = "main.go".to_string();

        let subject = renderer.render_subject(&issue).unwrap();
        assert_eq!(subject, "S1234: Fix this - ");
    }

    #[test]
    fn renders_description_layout() {
        let renderer = TemplateRenderer::new();
        let description = renderer.render_description(&sample_issue()).unwrap();

        let expected = concat!(
            "\n",
            "Message: Fix this\n",
            "\n",
            "Component: src/main.go\n",
            "Line: 12\n",
            "\n",
            "Text range:\n",
            "\t- start line: 12\n",
            "\t- end line: 13\n",
            "\t- start offset 4\n",
            "\t- end offset 9\t\n",
            "\n",
            "Key: AXyz\n",
            "Rule: squid:S1234\n",
            "Type: CODE_SMELL\n",
            "Debt: 10min\n",
            "Effort: 10min\n",
            "\n",
            "Tags: \n",
            "\t- a\n",
            "\t- b\n",
        );
        assert_eq!(description, expected);
    }

    #[test]
    fn description_without_tags_has_no_bullets() {
        let renderer = TemplateRenderer::new();
        let mut issue = sample_issue();
        issue.tags.clear();

        let description = renderer.render_description(&issue).unwrap();
        assert!(description.ends_with("Effort: 10min\n\nTags: \n"));
        assert!(!description.contains("\t- a"));
    }

    #[test]
    fn missing_field_fails_in_strict_mode() {
        let renderer = TemplateRenderer::with_templates("{{severity_label}}", DESCRIPTION_TEMPLATE);

        let err = renderer.render_subject(&sample_issue()).unwrap_err();
        assert_eq!(err.template, "subject");
        assert!(renderer.render_description(&sample_issue()).is_ok());
    }

    #[test]
    fn custom_templates_use_helpers() {
        let renderer =
            TemplateRenderer::with_templates("[{{squid rule}}] {{file_name component}}", "{{key}}");

        assert_eq!(renderer.render_subject(&sample_issue()).unwrap(), "[S1234:] main.go");
        assert_eq!(renderer.render_description(&sample_issue()).unwrap(), "AXyz");
    }

    #[test]
    fn no_html_escaping() {
        let renderer = TemplateRenderer::new();
        let mut issue = sample_issue();
        issue.message = "Replace <T> with \"T\" & more".to_string();

        let subject = renderer.render_subject(&issue).unwrap();
        assert_eq!(subject, "S1234: Replace <T> with \"T\" & more - main.go");
    }
}
