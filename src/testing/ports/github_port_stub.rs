use std::collections::HashMap;
use std::sync::Mutex;

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::domain::{AppError, EntryKind, Repository, RepositoryTree, TreeEntry};
use crate::ports::{FileContents, GitHubPort};

/// Scripted in-memory GitHub API.
///
/// Unscripted heads and trees fail with 404; unscripted files are absent.
#[derive(Default)]
pub struct FakeGitHub {
    pages: Vec<Result<Vec<Repository>, u16>>,
    heads: HashMap<String, Result<String, u16>>,
    trees: HashMap<String, Result<RepositoryTree, u16>>,
    files: HashMap<(String, String), Result<FileContents, u16>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listing page.
    pub fn with_page(mut self, repositories: Vec<Repository>) -> Self {
        self.pages.push(Ok(repositories));
        self
    }

    /// Append a listing page that fails with `status`.
    pub fn with_failing_page(mut self, status: u16) -> Self {
        self.pages.push(Err(status));
        self
    }

    /// Script a repository whose head is `sha` and whose blobs are `paths`.
    pub fn with_repository(self, full_name: &str, sha: &str, paths: &[&str]) -> Self {
        let tree = RepositoryTree {
            entries: paths.iter().map(|path| TreeEntry::new(*path, EntryKind::Blob)).collect(),
            truncated: false,
        };
        self.with_head(full_name, sha).with_tree(full_name, tree)
    }

    pub fn with_head(mut self, full_name: &str, sha: &str) -> Self {
        self.heads.insert(full_name.to_string(), Ok(sha.to_string()));
        self
    }

    pub fn with_failing_head(mut self, full_name: &str, status: u16) -> Self {
        self.heads.insert(full_name.to_string(), Err(status));
        self
    }

    pub fn with_tree(mut self, full_name: &str, tree: RepositoryTree) -> Self {
        self.trees.insert(full_name.to_string(), Ok(tree));
        self
    }

    pub fn with_failing_tree(mut self, full_name: &str, status: u16) -> Self {
        self.trees.insert(full_name.to_string(), Err(status));
        self
    }

    /// Script a file; the text is served base64-encoded with line breaks like the API does.
    pub fn with_file(self, full_name: &str, path: &str, text: &str) -> Self {
        self.with_raw_file(
            full_name,
            path,
            FileContents { content: wrap_base64(text), encoding: "base64".to_string() },
        )
    }

    pub fn with_raw_file(mut self, full_name: &str, path: &str, contents: FileContents) -> Self {
        self.files.insert((full_name.to_string(), path.to_string()), Ok(contents));
        self
    }

    pub fn with_failing_file(mut self, full_name: &str, path: &str, status: u16) -> Self {
        self.files.insert((full_name.to_string(), path.to_string()), Err(status));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn wrap_base64(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    let mut wrapped = String::new();
    for chunk in encoded.as_bytes().chunks(60) {
        wrapped.push_str(std::str::from_utf8(chunk).unwrap());
        wrapped.push('\n');
    }
    wrapped
}

fn api_error(status: u16) -> AppError {
    AppError::GitHubApi { message: format!("scripted failure {}", status), status: Some(status) }
}

impl GitHubPort for FakeGitHub {
    fn list_repositories(
        &self,
        organization: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Repository>, AppError> {
        self.record(format!("list {} page={} per_page={}", organization, page, per_page));
        match page.checked_sub(1).and_then(|idx| self.pages.get(idx as usize)) {
            Some(Ok(repositories)) => Ok(repositories.clone()),
            Some(Err(status)) => Err(api_error(*status)),
            None => Ok(Vec::new()),
        }
    }

    fn get_branch_sha(&self, repository: &str, branch: &str) -> Result<String, AppError> {
        self.record(format!("head {} {}", repository, branch));
        match self.heads.get(repository) {
            Some(Ok(sha)) => Ok(sha.clone()),
            Some(Err(status)) => Err(api_error(*status)),
            None => Err(api_error(404)),
        }
    }

    fn get_tree(&self, repository: &str, sha: &str) -> Result<RepositoryTree, AppError> {
        self.record(format!("tree {} {}", repository, sha));
        match self.trees.get(repository) {
            Some(Ok(tree)) => Ok(tree.clone()),
            Some(Err(status)) => Err(api_error(*status)),
            None => Err(api_error(404)),
        }
    }

    fn get_file_contents(
        &self,
        repository: &str,
        path: &str,
    ) -> Result<Option<FileContents>, AppError> {
        self.record(format!("contents {} {}", repository, path));
        match self.files.get(&(repository.to_string(), path.to_string())) {
            Some(Ok(contents)) => Ok(Some(contents.clone())),
            Some(Err(status)) => Err(api_error(*status)),
            None => Ok(None),
        }
    }
}
