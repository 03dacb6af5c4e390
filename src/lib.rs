//! dirmap - maps a directory into an indented text tree and a nested JSON object

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{MapError, MapResult};
pub use output::{
    JSON_OUTPUT_FILE, OutputPaths, TEXT_OUTPUT_FILE, render, render_with_prefix, to_json,
    write_json, write_outputs,
};
pub use tree::{DEFAULT_EXCLUDES, ExcludeSet, Node, TreeWalker, WalkerConfig, build};
