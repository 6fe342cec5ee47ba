//! Run summary types and helpers.

mod result;
mod run_summary;

pub use result::{FailureStage, ImportResult};
pub use run_summary::RunSummary;
