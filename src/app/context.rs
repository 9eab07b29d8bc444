use tracing::info;

use crate::domain::{AppError, Report};
use crate::ports::{GitHubPort, ReportSink};

/// Collaborators for one report run: where ownership data is read from and
/// where the finished table goes.
pub struct AppContext<G: GitHubPort, S: ReportSink> {
    github: G,
    sink: S,
}

impl<G: GitHubPort, S: ReportSink> AppContext<G, S> {
    pub fn new(github: G, sink: S) -> Self {
        Self { github, sink }
    }

    /// Source of repositories, trees and ownership files.
    pub fn github(&self) -> &G {
        &self.github
    }

    #[cfg(test)]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Hand a completed report to the sink.
    ///
    /// Callers only publish once every repository has been processed.
    pub fn publish(&self, report: &Report) -> Result<(), AppError> {
        self.sink.write_report(report)?;
        info!(rows = report.len(), "Report written");
        Ok(())
    }
}
