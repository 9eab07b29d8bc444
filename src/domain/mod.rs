pub mod codeowners;
pub mod configuration;
pub mod error;
pub mod report;
pub mod repository;

pub use codeowners::{CODEOWNERS_PATHS, OwnerPattern, OwnershipRule, OwnershipRules};
pub use configuration::{DEFAULT_ORGANIZATION, DEFAULT_OUTPUT_FILE, GitHubApiConfig, ReportConfig};
pub use error::AppError;
pub use report::{REPORT_HEADER, Report, ReportRow};
pub use repository::{BranchHead, EntryKind, Repository, RepositoryTree, TreeEntry};
