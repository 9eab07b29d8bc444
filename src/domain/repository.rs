//! Repository, reference and tree models returned by the GitHub API port.

/// A repository in the organization listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Fully-qualified name (`org/name`).
    pub full_name: String,
    /// Name of the default branch.
    pub default_branch: String,
}

impl Repository {
    pub fn new(full_name: impl Into<String>, default_branch: impl Into<String>) -> Self {
        Self { full_name: full_name.into(), default_branch: default_branch.into() }
    }
}

/// Tip commit of a repository's default branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchHead {
    pub repository: Repository,
    pub sha: String,
}

/// Kind of a git tree entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Blob,
    Tree,
    /// Submodule gitlink.
    Commit,
    Other(String),
}

impl EntryKind {
    pub fn parse(value: &str) -> Self {
        match value {
            "blob" => EntryKind::Blob,
            "tree" => EntryKind::Tree,
            "commit" => EntryKind::Commit,
            other => EntryKind::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub path: String,
    pub kind: EntryKind,
}

impl TreeEntry {
    pub fn new(path: impl Into<String>, kind: EntryKind) -> Self {
        Self { path: path.into(), kind }
    }

    pub fn is_blob(&self) -> bool {
        self.kind == EntryKind::Blob
    }
}

/// Recursive tree listing at a reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryTree {
    pub entries: Vec<TreeEntry>,
    /// Upstream stopped listing before the end of the tree.
    pub truncated: bool,
}

impl RepositoryTree {
    /// Blob entries in tree order.
    pub fn blobs(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.iter().filter(|entry| entry.is_blob())
    }
}
