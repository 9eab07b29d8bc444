use crate::domain::{AppError, BranchHead, Repository};
use crate::ports::GitHubPort;

/// Resolve the tip commit of the repository's default branch.
pub fn resolve_head(
    github: &impl GitHubPort,
    repository: &Repository,
) -> Result<BranchHead, AppError> {
    let sha = github.get_branch_sha(&repository.full_name, &repository.default_branch)?;
    Ok(BranchHead { repository: repository.clone(), sha })
}
