//! Ownership rule parsing and last-match resolution.

use tracing::warn;

use super::pattern::OwnerPattern;

/// A single `pattern owner...` line.
#[derive(Debug, Clone)]
pub struct OwnershipRule {
    pub pattern: OwnerPattern,
    /// First owner listed on the line; `None` for a pattern without owners.
    pub owner: Option<String>,
    /// 1-based line number in the ownership file.
    pub line: usize,
}

/// Ordered rule set parsed from one ownership file.
#[derive(Debug, Clone, Default)]
pub struct OwnershipRules {
    rules: Vec<OwnershipRule>,
}

impl OwnershipRules {
    /// Parse ownership-file text.
    ///
    /// Blank lines and comments are ignored. Patterns that fail to compile are
    /// skipped with a warning.
    pub fn parse(text: &str) -> Self {
        let mut rules = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let line_number = idx + 1;
            let mut tokens =
                line.split_whitespace().take_while(|token| !token.starts_with('#'));

            let Some(raw_pattern) = tokens.next() else {
                continue;
            };

            match OwnerPattern::new(raw_pattern) {
                Ok(pattern) => rules.push(OwnershipRule {
                    pattern,
                    owner: tokens.next().map(str::to_string),
                    line: line_number,
                }),
                Err(err) => {
                    warn!(
                        line = line_number,
                        pattern = raw_pattern,
                        "Skipping invalid CODEOWNERS pattern: {}",
                        err
                    );
                }
            }
        }

        Self { rules }
    }

    /// Owner of `path`: the owner of the last rule that matches it.
    pub fn owner(&self, path: &str) -> Option<&str> {
        self.matching_rule(path).and_then(|rule| rule.owner.as_deref())
    }

    /// Last rule in file order that matches `path`.
    pub fn matching_rule(&self, path: &str) -> Option<&OwnershipRule> {
        self.rules.iter().rev().find(|rule| rule.pattern.matches(path))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OwnershipRule> {
        self.rules.iter()
    }
}
