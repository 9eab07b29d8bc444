//! Ownership file lookup.
//!
//! A missing ownership file is a normal condition. Every failure here is logged
//! and treated as "no file" so the run continues.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use tracing::{debug, warn};

use crate::domain::{AppError, CODEOWNERS_PATHS, Repository};
use crate::ports::{FileContents, GitHubPort};

/// Fetch and decode the repository's ownership file.
///
/// Locations are tried in order and the next one is only consulted when the
/// previous one does not exist.
pub fn resolve_ownership_file(
    github: &impl GitHubPort,
    repository: &Repository,
) -> Option<String> {
    for path in CODEOWNERS_PATHS {
        match fetch(github, repository, path) {
            Ok(Some(text)) => {
                debug!(repository = %repository.full_name, path, "Found ownership file");
                return Some(text);
            }
            Ok(None) => {
                debug!(repository = %repository.full_name, path, "No ownership file");
            }
            Err(err) => {
                warn!(
                    repository = %repository.full_name,
                    path,
                    "Failed to fetch ownership file: {}",
                    err
                );
                return None;
            }
        }
    }

    None
}

fn fetch(
    github: &impl GitHubPort,
    repository: &Repository,
    path: &str,
) -> Result<Option<String>, AppError> {
    match github.get_file_contents(&repository.full_name, path)? {
        Some(contents) => decode_contents(&contents).map(Some),
        None => Ok(None),
    }
}

/// Decode a contents payload to text.
///
/// The API wraps base64 output at 60 columns, so whitespace is dropped first.
pub fn decode_contents(contents: &FileContents) -> Result<String, AppError> {
    if contents.encoding != "base64" {
        return Err(AppError::ContentDecode(format!(
            "unsupported encoding '{}'",
            contents.encoding
        )));
    }

    let compact: String = contents.content.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD.decode(compact).map_err(|e| AppError::ContentDecode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::ContentDecode(e.to_string()))
}
