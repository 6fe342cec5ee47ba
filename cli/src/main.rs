//! CLI for the SonarQube to Redmine issue importer.
//!
//! Fetches every issue matching a SonarQube issue search and creates one
//! Redmine issue for each of them.

use clap::Parser;
use sonar_redmine_importer::{RedmineSettings, RunSummary, Runner, RunnerConfig, RunnerError};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Import SonarQube issues into Redmine.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Sonarqube issues search URL (without pageIndex query param).
    #[arg(long, default_value = "http://localhost:9000/api/issues/search")]
    sonarqube_issues_search_url: String,

    /// Redmine base URL.
    #[arg(long, default_value = "")]
    redmine_base_url: String,

    /// Redmine API key.
    #[arg(long, default_value = "")]
    redmine_api_key: String,

    /// Redmine project identifier.
    #[arg(long, default_value = "")]
    redmine_project_id: String,

    /// Redmine tracker identifier.
    #[arg(long, default_value = "")]
    redmine_tracker_id: String,

    /// Redmine parent issue identifier.
    #[arg(long, default_value = "")]
    redmine_parent_issue_id: String,

    /// Pause after each Redmine request, in milliseconds.
    #[arg(long, default_value_t = 2000)]
    request_delay_ms: u64,

    /// Transform issues and log them without creating anything in Redmine.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Help and version are not errors.
            if e.use_stderr() {
                println!("{e}");
            } else {
                let _ = e.print();
            }
            return parse_error_exit_code(&e);
        }
    };

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{e}");
            ExitCode::from(1)
        }
    }
}

/// Exit code for a failed argument parse: 1 for invalid flags, 0 for help
/// and version output.
fn parse_error_exit_code(error: &clap::Error) -> ExitCode {
    if error.use_stderr() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let redmine = RedmineSettings::new(args.redmine_base_url, args.redmine_api_key)
        .with_project_id(args.redmine_project_id)
        .with_tracker_id(args.redmine_tracker_id)
        .with_parent_issue_id(args.redmine_parent_issue_id);

    let config = RunnerConfig::new(args.sonarqube_issues_search_url, redmine)
        .with_request_delay(Duration::from_millis(args.request_delay_ms))
        .with_dry_run(args.dry_run);

    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Pages fetched: {}", summary.pages_fetched);
    println!("  Issues found: {}", summary.issues_seen);

    if summary.dry_run {
        println!("  Issues previewed: {}", summary.issues_previewed);
    } else {
        println!("  Issues created: {}", summary.issues_created);
    }
    println!("  Issues failed: {}", summary.issues_failed);

    if summary.has_failures() {
        println!("\nSkipped issues:");
        for failure in &summary.failures {
            println!("  {failure}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_local_sonarqube() {
        let args = Args::try_parse_from(["sonar-redmine-importer"]).unwrap();

        assert_eq!(
            args.sonarqube_issues_search_url,
            "http://localhost:9000/api/issues/search"
        );
        assert_eq!(args.redmine_base_url, "");
        assert_eq!(args.request_delay_ms, 2000);
        assert!(!args.dry_run);
    }

    #[test]
    fn parses_redmine_flags() {
        let args = Args::try_parse_from([
            "sonar-redmine-importer",
            "--sonarqube-issues-search-url",
            "http://sonar/api/issues/search?componentKeys=demo",
            "--redmine-base-url",
            "http://redmine",
            "--redmine-api-key",
            "secret",
            "--redmine-project-id",
            "demo",
            "--redmine-tracker-id",
            "3",
            "--redmine-parent-issue-id",
            "42",
            "--request-delay-ms",
            "0",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(args.redmine_api_key, "secret");
        assert_eq!(args.redmine_parent_issue_id, "42");
        assert_eq!(args.request_delay_ms, 0);
        assert!(args.dry_run);
    }

    #[test]
    fn rejects_unknown_flags_with_exit_code_one() {
        let err = Args::try_parse_from(["sonar-redmine-importer", "--bogus"]).unwrap_err();

        assert!(err.use_stderr());
        assert_eq!(parse_error_exit_code(&err), ExitCode::from(1));
    }

    #[test]
    fn help_exits_successfully() {
        let err = Args::try_parse_from(["sonar-redmine-importer", "--help"]).unwrap_err();

        assert_eq!(parse_error_exit_code(&err), ExitCode::SUCCESS);
    }

    #[test]
    fn invalid_delay_exits_with_code_one() {
        let err = Args::try_parse_from(["sonar-redmine-importer", "--request-delay-ms", "soon"])
            .unwrap_err();

        assert_eq!(parse_error_exit_code(&err), ExitCode::from(1));
    }
}
