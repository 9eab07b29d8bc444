//! CODEOWNERS path patterns.
//!
//! Patterns follow gitignore conventions as GitHub applies them to CODEOWNERS:
//! - a trailing `/` restricts the pattern to directories, so it owns the subtree;
//! - a pattern with a `/` elsewhere is anchored at the repository root;
//! - a pattern without a `/` matches any path component, the basename included;
//! - `*` stays within one segment, `**` crosses segments.

use glob::{MatchOptions, Pattern, PatternError};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A compiled CODEOWNERS pattern.
#[derive(Debug, Clone)]
pub struct OwnerPattern {
    glob: Pattern,
    anchored: bool,
    directory_only: bool,
    /// `docs/*` owns the direct children of `docs/` only.
    direct_children_only: bool,
}

impl OwnerPattern {
    pub fn new(raw: &str) -> Result<Self, PatternError> {
        let directory_only = raw.ends_with('/');
        let trimmed = raw.trim_end_matches('/');
        let anchored = trimmed.contains('/') || raw.starts_with('/');
        let body = trimmed.trim_start_matches('/');

        // A bare `/` owns the whole repository.
        if body.is_empty() {
            return Ok(Self {
                glob: Pattern::new("**")?,
                anchored: true,
                directory_only: false,
                direct_children_only: false,
            });
        }

        let direct_children_only =
            anchored && !directory_only && (body == "*" || body.ends_with("/*"));

        Ok(Self {
            glob: Pattern::new(&escape_brackets(body))?,
            anchored,
            directory_only,
            direct_children_only,
        })
    }

    /// Whether the pattern owns `path` (a repository-relative file path).
    pub fn matches(&self, path: &str) -> bool {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return false;
        }

        if self.anchored { self.matches_anchored(path) } else { self.matches_component(path) }
    }

    fn matches_anchored(&self, path: &str) -> bool {
        if !self.directory_only && self.glob.matches_with(path, MATCH_OPTIONS) {
            return true;
        }
        if self.direct_children_only {
            return false;
        }
        ancestors(path).any(|dir| self.glob.matches_with(dir, MATCH_OPTIONS))
    }

    fn matches_component(&self, path: &str) -> bool {
        let segments: Vec<&str> = path.split('/').collect();
        let candidates = if self.directory_only {
            &segments[..segments.len() - 1]
        } else {
            &segments[..]
        };
        candidates.iter().any(|segment| self.glob.matches_with(segment, MATCH_OPTIONS))
    }
}

/// CODEOWNERS has no character classes, so `[` and `]` match themselves.
fn escape_brackets(body: &str) -> String {
    let mut escaped = String::with_capacity(body.len());
    for c in body.chars() {
        match c {
            '[' | ']' => escaped.push_str(&Pattern::escape(&c.to_string())),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Proper ancestor directories of `path`, shallowest first.
fn ancestors(path: &str) -> impl Iterator<Item = &str> {
    path.match_indices('/').map(move |(idx, _)| &path[..idx])
}
