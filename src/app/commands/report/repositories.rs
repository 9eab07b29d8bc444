//! Organization repository listing.

use tracing::info;

use crate::domain::{AppError, Repository};
use crate::ports::GitHubPort;

/// Repositories requested per listing page.
pub const PAGE_SIZE: u32 = 100;

/// List every non-archived repository of `organization`.
///
/// Pages are requested from 1 upward until an empty page comes back. Order is
/// the endpoint's order; nothing is deduplicated or sorted.
pub fn list_repositories(
    github: &impl GitHubPort,
    organization: &str,
) -> Result<Vec<Repository>, AppError> {
    info!(organization, "Listing repositories");

    let mut repositories = Vec::new();
    let mut page = 1;

    loop {
        let batch = github.list_repositories(organization, page, PAGE_SIZE)?;
        if batch.is_empty() {
            break;
        }
        repositories.extend(batch);
        page += 1;
    }

    info!(count = repositories.len(), "Repository list acquired");
    Ok(repositories)
}
