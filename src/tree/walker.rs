//! TreeWalker - builds the full directory tree in memory

use std::path::Path;

use tracing::info;

use crate::error::{MapError, MapResult};

use super::config::WalkerConfig;
use super::filter::ExcludeSet;
use super::node::Node;
use super::traversal::BaseTraversal;

/// Tree walker that builds the full tree in memory.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and return its tree.
    ///
    /// The root itself is the returned directory node; its name is not part
    /// of the tree. The first unreadable directory aborts the walk.
    pub fn walk(&self, root: &Path) -> MapResult<Node> {
        if !root.is_dir() {
            return Err(MapError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let tree = self.walk_dir(&BaseTraversal::new(&self.config), root)?;
        let (dirs, files) = tree.counts();
        info!(
            "mapped {}: {} directories, {} files",
            root.display(),
            dirs,
            files
        );
        Ok(tree)
    }

    fn walk_dir(&self, traversal: &BaseTraversal<'_>, path: &Path) -> MapResult<Node> {
        let listing = traversal.list(path)?;

        let mut children = Vec::with_capacity(listing.files.len() + listing.dirs.len());
        children.extend(listing.files.into_iter().map(|name| (name, Node::File)));

        for (name, dir_path) in listing.dirs {
            let child = self.walk_dir(traversal, &dir_path)?;
            children.push((name, child));
        }

        Ok(Node::Dir(children))
    }
}

/// Build the tree under `root`, pruning directories named in `excluded`.
///
/// Siblings keep enumeration order, files before subdirectories.
pub fn build(root: &Path, excluded: &ExcludeSet) -> MapResult<Node> {
    TreeWalker::new(WalkerConfig::default().with_exclude(excluded.clone())).walk(root)
}
