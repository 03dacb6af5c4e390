//! Directory tree walking logic
//!
//! `TreeWalker` walks a root directory once and builds the whole tree in
//! memory. Directories named in the walker's `ExcludeSet` are pruned with
//! their entire subtree, wherever they appear.

mod config;
mod filter;
mod node;
mod traversal;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use filter::{DEFAULT_EXCLUDES, ExcludeSet};
pub use node::Node;
pub use walker::{TreeWalker, build};
