//! CODEOWNERS parsing and matching.

mod pattern;
mod rules;

pub use pattern::OwnerPattern;
pub use rules::{OwnershipRule, OwnershipRules};

/// Ownership file locations, tried in order.
pub const CODEOWNERS_PATHS: [&str; 2] = ["CODEOWNERS", ".github/CODEOWNERS"];
