#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod duration;
pub mod rate_limit;
pub mod redmine;
pub mod runner;
pub mod sonarqube;
pub mod summary;
pub mod templates;
pub mod transform;

pub use config::RedmineSettings;
pub use duration::{parse_effort_hours, DurationParseError};
pub use rate_limit::RequestPacer;
pub use redmine::{CreateError, CustomField, DestinationIssue, RedmineClient};
pub use runner::{Runner, RunnerConfig, RunnerError, DEFAULT_REQUEST_DELAY};
pub use sonarqube::{page_url, FetchError, Paging, SearchResponse, SonarqubeClient, SourceIssue};
pub use summary::{FailureStage, ImportResult, RunSummary};
pub use templates::{
    create_handlebars_registry, file_name, squid_prefix, TemplateError, TemplateRenderer,
};
pub use transform::transform_issue;
