//! Template rendering error types.

/// Subject or description rendering failed.
#[derive(Debug, thiserror::Error)]
#[error("cannot render {template} template: {source}")]
pub struct TemplateError {
    /// Which template failed, `subject` or `description`.
    pub template: &'static str,
    #[source]
    pub source: handlebars::RenderError,
}
