//! Report configuration domain models.

use std::path::PathBuf;

use url::Url;

use crate::domain::AppError;

/// Organization scanned when none is supplied on the command line.
pub const DEFAULT_ORGANIZATION: &str = "my-org";

/// File the report is written to when none is supplied.
pub const DEFAULT_OUTPUT_FILE: &str = "codeowners.csv";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for a single report run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Organization whose repositories are scanned.
    pub organization: String,
    /// Destination of the delimited report.
    pub output_path: PathBuf,
    /// GitHub API configuration.
    pub github: GitHubApiConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            organization: DEFAULT_ORGANIZATION.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            github: GitHubApiConfig::default(),
        }
    }
}

impl ReportConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.organization.trim().is_empty() {
            return Err(AppError::config_error("organization must not be empty"));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(AppError::config_error("output_path must not be empty"));
        }
        self.github.validate()?;
        Ok(())
    }
}

/// GitHub API configuration.
#[derive(Debug, Clone)]
pub struct GitHubApiConfig {
    /// GitHub REST API base URL.
    pub api_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GitHubApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: DEFAULT_TIMEOUT_SECS }
    }
}

impl GitHubApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if self.api_url.cannot_be_a_base() {
            return Err(AppError::config_error(format!(
                "api_url '{}' cannot be used as a base URL",
                self.api_url
            )));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.github.com").expect("Default API URL must be valid")
}
