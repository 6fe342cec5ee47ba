//! Redmine destination settings.

/// Where and how transformed issues are created in Redmine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedmineSettings {
    /// Base URL of the Redmine instance, without a trailing slash.
    base_url: String,
    /// API key sent in the `X-Redmine-API-Key` header.
    api_key: String,
    /// Project the issues are created in.
    project_id: String,
    /// Tracker assigned to every issue.
    tracker_id: String,
    /// Parent issue of every created issue.
    parent_issue_id: String,
}

impl RedmineSettings {
    /// Creates settings for a Redmine instance with empty ids.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Sets the destination project id.
    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = project_id.into();
        self
    }

    /// Sets the tracker id.
    pub fn with_tracker_id(mut self, tracker_id: impl Into<String>) -> Self {
        self.tracker_id = tracker_id.into();
        self
    }

    /// Sets the parent issue id.
    pub fn with_parent_issue_id(mut self, parent_issue_id: impl Into<String>) -> Self {
        self.parent_issue_id = parent_issue_id.into();
        self
    }

    /// Returns the Redmine base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the destination project id.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the tracker id.
    pub fn tracker_id(&self) -> &str {
        &self.tracker_id
    }

    /// Returns the parent issue id.
    pub fn parent_issue_id(&self) -> &str {
        &self.parent_issue_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_every_field() {
        let settings = RedmineSettings::new("https://redmine.example.com", "secret")
            .with_project_id("demo")
            .with_tracker_id("3")
            .with_parent_issue_id("42");

        assert_eq!(settings.base_url(), "https://redmine.example.com");
        assert_eq!(settings.api_key(), "secret");
        assert_eq!(settings.project_id(), "demo");
        assert_eq!(settings.tracker_id(), "3");
        assert_eq!(settings.parent_issue_id(), "42");
    }
}
