use tracing::info;

use super::branch_head::resolve_head;
use super::ownership_file::resolve_ownership_file;
use super::tree::list_files;
use crate::domain::{AppError, OwnershipRules, Report, Repository};
use crate::ports::GitHubPort;

/// Build the ownership report for `repositories`, in order.
///
/// A failed head or tree lookup aborts the whole build. Ownership file
/// problems only leave that repository's owners blank.
pub fn build_report(
    github: &impl GitHubPort,
    repositories: &[Repository],
) -> Result<Report, AppError> {
    let mut report = Report::new();

    for (idx, repository) in repositories.iter().enumerate() {
        info!(
            repository = %repository.full_name,
            "Processing repository {}/{}",
            idx + 1,
            repositories.len()
        );

        let head = resolve_head(github, repository)?;
        let tree = list_files(github, &head)?;
        let rules =
            resolve_ownership_file(github, repository).map(|text| OwnershipRules::parse(&text));

        for entry in tree.blobs() {
            let owner = rules.as_ref().and_then(|rules| rules.owner(&entry.path));
            report.push(&repository.full_name, &entry.path, owner);
        }
    }

    Ok(report)
}
