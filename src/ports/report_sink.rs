use crate::domain::{AppError, Report};

/// Port for persisting a finished report.
pub trait ReportSink {
    /// Persist the full report. Called once per run, after every repository succeeded.
    fn write_report(&self, report: &Report) -> Result<(), AppError>;
}
