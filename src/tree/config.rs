//! Configuration types for the tree walker

use super::filter::ExcludeSet;

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Directory names pruned at every depth
    pub exclude: ExcludeSet,
    /// Sort entries by file name instead of keeping enumeration order
    pub sort: bool,
}

impl WalkerConfig {
    pub fn with_exclude(mut self, exclude: ExcludeSet) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn sorted(mut self) -> Self {
        self.sort = true;
        self
    }
}
