use tracing::warn;

use crate::domain::{AppError, BranchHead, RepositoryTree};
use crate::ports::GitHubPort;

/// Fetch the recursive tree at `head`.
///
/// All entry kinds are returned; callers pick the blobs.
pub fn list_files(github: &impl GitHubPort, head: &BranchHead) -> Result<RepositoryTree, AppError> {
    let tree = github.get_tree(&head.repository.full_name, &head.sha)?;

    if tree.truncated {
        warn!(
            repository = %head.repository.full_name,
            entries = tree.entries.len(),
            "Tree listing was truncated by the API; report for this repository is incomplete"
        );
    }

    Ok(tree)
}
