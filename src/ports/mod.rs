mod github;
mod report_sink;

pub use github::{FileContents, GitHubPort};
pub use report_sink::ReportSink;
