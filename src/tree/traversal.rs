//! Directory listing and entry classification used by the walker.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{MapError, MapResult};

use super::config::WalkerConfig;

/// One directory's entries, split the way the walker consumes them.
#[derive(Debug, Default)]
pub struct Listing {
    /// File names, in listing order
    pub files: Vec<String>,
    /// Subdirectories to descend into, in listing order
    pub dirs: Vec<(String, PathBuf)>,
}

/// Per-walk view of the configuration.
pub struct BaseTraversal<'a> {
    pub config: &'a WalkerConfig,
}

impl<'a> BaseTraversal<'a> {
    pub fn new(config: &'a WalkerConfig) -> Self {
        Self { config }
    }

    /// Read a directory and split its entries into files and subdirectories.
    ///
    /// Excluded directories and symlinks to directories are dropped here.
    /// Anything that is not a directory once symlinks are followed counts as
    /// a file, broken links included.
    pub fn list(&self, path: &Path) -> MapResult<Listing> {
        let read_dir = fs::read_dir(path).map_err(|source| MapError::ReadDir {
            path: path.to_path_buf(),
            source,
        })?;

        let mut entries = read_dir.collect::<Result<Vec<_>, _>>()?;
        if self.config.sort {
            entries.sort_by_key(|a| a.file_name());
        }

        let mut listing = Listing::default();
        for entry in entries {
            let entry_path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();

            if !entry_path.is_dir() {
                listing.files.push(name);
                continue;
            }

            if self.config.exclude.contains(&name) {
                debug!("pruning excluded directory {}", entry_path.display());
                continue;
            }

            if entry.file_type()?.is_symlink() {
                debug!("not following directory symlink {}", entry_path.display());
                continue;
            }

            listing.dirs.push((name, entry_path));
        }

        Ok(listing)
    }
}
