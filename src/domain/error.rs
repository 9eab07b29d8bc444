use std::io;

use thiserror::Error;

/// Library-wide error type for codeowners-report operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required environment variable is missing or empty.
    #[error("Environment variable '{0}' is not set")]
    EnvironmentVariableMissing(String),

    /// GitHub API request failed or returned a non-success status.
    #[error("GitHub API error{}: {}", status_suffix(.status), .message)]
    GitHubApi { message: String, status: Option<u16> },

    /// Ownership file payload could not be decoded to text.
    #[error("Failed to decode ownership file: {0}")]
    ContentDecode(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" ({})", code)).unwrap_or_default()
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// HTTP status carried by an upstream failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::GitHubApi { status, .. } => *status,
            _ => None,
        }
    }
}
