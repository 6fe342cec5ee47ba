//! SonarQube issue search response types.

use serde::{Deserialize, Deserializer, Serialize};

/// Reads an explicit `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A page of results from `api/issues/search`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchResponse {
    /// Paging block of this page.
    #[serde(deserialize_with = "null_as_default")]
    pub paging: Paging,

    /// Issues on this page.
    #[serde(deserialize_with = "null_as_default")]
    pub issues: Vec<SourceIssue>,
}

/// Paging metadata returned with each page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Paging {
    /// 1-based index of this page.
    #[serde(deserialize_with = "null_as_default")]
    pub page_index: u64,

    /// Maximum number of issues per page.
    #[serde(deserialize_with = "null_as_default")]
    pub page_size: u64,

    /// Total number of issues matching the search.
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
}

impl Paging {
    /// Number of pages to request for this result set.
    ///
    /// Always `total / page_size + 1`, so an exact multiple of the page size
    /// yields one trailing page that is empty. A zero page size yields a
    /// single page.
    #[must_use]
    pub fn page_count(&self) -> u64 {
        match self.total.checked_div(self.page_size) {
            Some(full_pages) => full_pages + 1,
            None => 1,
        }
    }
}

/// Position of an issue inside a source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextRange {
    #[serde(deserialize_with = "null_as_default")]
    pub start_line: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub end_line: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub start_offset: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub end_offset: u64,
}

/// A secondary location attached to an issue flow.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Location {
    #[serde(deserialize_with = "null_as_default")]
    pub component: String,
    #[serde(deserialize_with = "null_as_default")]
    pub text_range: TextRange,
    #[serde(rename = "msg", deserialize_with = "null_as_default")]
    pub message: String,
}

/// A group of locations describing an execution flow.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Flow {
    #[serde(deserialize_with = "null_as_default")]
    pub locations: Vec<Location>,
}

/// A single finding reported by SonarQube.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceIssue {
    /// Unique issue key.
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,

    /// Rule identifier, e.g. `squid:S1234`.
    #[serde(deserialize_with = "null_as_default")]
    pub rule: String,

    #[serde(deserialize_with = "null_as_default")]
    pub severity: String,

    /// Component path, e.g. `project:src/main.go`.
    #[serde(deserialize_with = "null_as_default")]
    pub component: String,

    #[serde(deserialize_with = "null_as_default")]
    pub project: String,

    #[serde(deserialize_with = "null_as_default")]
    pub line: u64,

    #[serde(deserialize_with = "null_as_default")]
    pub hash: String,

    #[serde(deserialize_with = "null_as_default")]
    pub text_range: TextRange,

    #[serde(deserialize_with = "null_as_default")]
    pub flows: Vec<Flow>,

    #[serde(deserialize_with = "null_as_default")]
    pub status: String,

    #[serde(deserialize_with = "null_as_default")]
    pub message: String,

    /// Remediation effort, e.g. `1h30min`.
    #[serde(deserialize_with = "null_as_default")]
    pub effort: String,

    /// Technical debt, usually the same value as `effort`.
    #[serde(deserialize_with = "null_as_default")]
    pub debt: String,

    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub creation_date: String,

    #[serde(deserialize_with = "null_as_default")]
    pub update_date: String,

    /// Issue type, e.g. `CODE_SMELL`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub issue_type: String,
}
