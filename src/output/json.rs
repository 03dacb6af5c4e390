//! JSON output formatting

use std::io::Write;

use crate::error::MapResult;
use crate::tree::Node;

/// Serialize the tree as compact JSON.
pub fn to_json(node: &Node) -> MapResult<String> {
    Ok(serde_json::to_string(node)?)
}

/// Write the tree as compact JSON to `writer`.
pub fn write_json<W: Write>(node: &Node, writer: W) -> MapResult<()> {
    serde_json::to_writer(writer, node)?;
    Ok(())
}
