//! Tree formatting and output
//!
//! # Module Structure
//!
//! - `tree` - indented text rendering with box-drawing connectors
//! - `json` - compact JSON serialization
//! - `files` - writes both representations into an output directory

mod files;
mod json;
mod tree;

// Re-export public types and functions
pub use files::{JSON_OUTPUT_FILE, OutputPaths, TEXT_OUTPUT_FILE, write_outputs};
pub use json::{to_json, write_json};
pub use tree::{continuation_prefix, render, render_with_prefix};
