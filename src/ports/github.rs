//! GitHub REST API port definition.

use crate::domain::{AppError, Repository, RepositoryTree};

/// Raw payload of the contents endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContents {
    /// Encoded file body as sent by the API (base64 with line breaks).
    pub content: String,
    /// Encoding name reported by the API, usually `base64`.
    pub encoding: String,
}

/// Port for the GitHub API calls the report needs.
///
/// Every method performs exactly one request.
pub trait GitHubPort {
    /// List one page of non-archived repositories in an organization.
    ///
    /// An empty page marks the end of the listing.
    fn list_repositories(
        &self,
        organization: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Repository>, AppError>;

    /// Commit SHA that `refs/heads/{branch}` points to.
    fn get_branch_sha(&self, repository: &str, branch: &str) -> Result<String, AppError>;

    /// Recursive tree listing at a commit.
    fn get_tree(&self, repository: &str, sha: &str) -> Result<RepositoryTree, AppError>;

    /// Contents of a file on the default branch; `Ok(None)` when it does not exist.
    fn get_file_contents(
        &self,
        repository: &str,
        path: &str,
    ) -> Result<Option<FileContents>, AppError>;
}
