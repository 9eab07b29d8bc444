//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::github_client_http::HttpGitHubClient;
use crate::adapters::report_file::FileReportSink;
use crate::app::{
    AppContext,
    commands::report::{self, ReportOptions},
};

pub use crate::domain::{AppError, GitHubApiConfig, Report, ReportConfig, ReportRow};

/// Result of a report run written to disk.
#[derive(Debug, Clone)]
pub struct ReportResult {
    /// Number of repositories processed.
    pub repositories: usize,
    /// Path the report was written to.
    pub output_path: PathBuf,
    /// The report, also available in memory.
    pub report: Report,
}

/// Create an `AppContext` backed by the GitHub REST API and a report file.
///
/// Fails before any network activity when the token is missing.
fn create_context(
    config: &ReportConfig,
) -> Result<AppContext<HttpGitHubClient, FileReportSink>, AppError> {
    let github = HttpGitHubClient::from_env_with_config(&config.github)?;
    let sink = FileReportSink::new(config.output_path.clone());
    Ok(AppContext::new(github, sink))
}

// =============================================================================
// Report Command API
// =============================================================================

/// Export per-file ownership for every repository in the configured organization.
///
/// The report is written to `config.output_path` only when every repository
/// succeeded, and is also returned.
pub fn generate_report(config: &ReportConfig) -> Result<ReportResult, AppError> {
    config.validate()?;
    let ctx = create_context(config)?;

    let options = ReportOptions { organization: config.organization.clone() };
    let outcome = report::execute(&ctx, &options)?;

    Ok(ReportResult {
        repositories: outcome.repositories,
        output_path: config.output_path.clone(),
        report: outcome.report,
    })
}
