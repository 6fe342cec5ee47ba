//! Subject and description rendering using Handlebars.
//!
//! Both texts are plain text (no HTML escaping). The subject uses two
//! helpers, `squid` and `file_name`, that shorten the rule and component
//! identifiers.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer};

/// Template for the one-line issue subject.
pub const SUBJECT_TEMPLATE: &str = "{{squid rule}} {{message}} - {{file_name component}}";

/// Template for the issue description.
pub const DESCRIPTION_TEMPLATE: &str = "
Message: {{message}}

Component: {{component}}
Line: {{line}}

Text range:
\t- start line: {{text_range.start_line}}
\t- end line: {{text_range.end_line}}
\t- start offset {{text_range.start_offset}}
\t- end offset {{text_range.end_offset}}\t

Key: {{key}}
Rule: {{rule}}
Type: {{type}}
Debt: {{debt}}
Effort: {{effort}}

Tags: {{#each tags}}
\t- {{this}}{{/each}}
";

/// Returns the rule code after the last `:` followed by a colon.
///
/// `"squid:S1234"` becomes `"S1234:"`. Rules without a colon, or ending in
/// one, give an empty string.
#[must_use]
pub fn squid_prefix(rule: &str) -> String {
    match rule.rfind(':') {
        Some(idx) if idx + 1 < rule.len() => format!("{}:", &rule[idx + 1..]),
        _ => String::new(),
    }
}

/// Returns the component path segment after the last `/`.
///
/// Components without a slash, or ending in one, give an empty string.
#[must_use]
pub fn file_name(component: &str) -> String {
    match component.rfind('/') {
        Some(idx) if idx + 1 < component.len() => component[idx + 1..].to_string(),
        _ => String::new(),
    }
}
