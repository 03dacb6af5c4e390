//! Directory exclusion for tree walking

use std::collections::HashSet;

/// Directory names excluded when no other set is given.
pub const DEFAULT_EXCLUDES: [&str; 4] = ["node_modules", "venv", "__pycache__", ".git"];

/// Set of directory names that are never traversed.
///
/// Matching is by exact name and applies at every depth. Files are never
/// excluded, even when their name is in the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeSet(HashSet<String>);

impl ExcludeSet {
    /// An exclusion set that prunes nothing.
    pub fn empty() -> Self {
        Self(HashSet::new())
    }

    /// Check if a directory with this name should be pruned.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ExcludeSet {
    fn default() -> Self {
        DEFAULT_EXCLUDES.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ExcludeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
