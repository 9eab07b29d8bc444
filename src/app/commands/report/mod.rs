//! Report command implementation.
//!
//! Lists the organization's repositories, resolves ownership for every file
//! and hands the finished table to the report sink. Nothing is written unless
//! every repository was processed.

mod branch_head;
mod builder;
mod ownership_file;
mod repositories;
mod tree;

use crate::app::AppContext;
use crate::domain::{AppError, Report};
use crate::ports::{GitHubPort, ReportSink};

pub use branch_head::resolve_head;
pub use builder::build_report;
pub use ownership_file::{decode_contents, resolve_ownership_file};
pub use repositories::{PAGE_SIZE, list_repositories};
pub use tree::list_files;

/// Options for the report command.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Organization whose repositories are scanned.
    pub organization: String,
}

/// Result of a completed report run.
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    /// Number of repositories processed.
    pub repositories: usize,
    /// The report as written to the sink.
    pub report: Report,
}

/// Execute the report command.
pub fn execute<G: GitHubPort, S: ReportSink>(
    ctx: &AppContext<G, S>,
    options: &ReportOptions,
) -> Result<ReportOutcome, AppError> {
    let repositories = list_repositories(ctx.github(), &options.organization)?;
    let report = build_report(ctx.github(), &repositories)?;

    ctx.publish(&report)?;

    Ok(ReportOutcome { repositories: repositories.len(), report })
}
