//! codeowners-report: export per-file CODEOWNERS ownership across a GitHub organization.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{ReportResult, generate_report};
pub use domain::{AppError, GitHubApiConfig, OwnershipRules, Report, ReportConfig, ReportRow};
