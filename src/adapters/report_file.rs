use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, Report};
use crate::ports::ReportSink;

/// Writes the report as comma-separated text to a file path.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    path: PathBuf,
}

impl FileReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for FileReportSink {
    fn write_report(&self, report: &Report) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, report.to_csv())?;
        Ok(())
    }
}
