pub mod report_config;

pub use report_config::{DEFAULT_ORGANIZATION, DEFAULT_OUTPUT_FILE, GitHubApiConfig, ReportConfig};
