//! Indented text rendering of a directory tree
//!
//! Each child gets one line, `{prefix}{connector}{name}`. Directories are
//! followed by their own children with a longer prefix. Files and empty
//! directories produce the same single line.

use crate::tree::Node;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// Render the children of `node` as an indented tree.
pub fn render(node: &Node) -> String {
    render_with_prefix(node, "")
}

/// Render the children of `node`, starting every line with `prefix`.
pub fn render_with_prefix(node: &Node, prefix: &str) -> String {
    let mut output = String::new();
    format_children(node, &mut output, prefix);
    output
}

/// Prefix for the children of an entry.
pub fn continuation_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", prefix, SPACE_INDENT)
    } else {
        format!("{}{}", prefix, PIPE_INDENT)
    }
}

fn format_children(node: &Node, output: &mut String, prefix: &str) {
    let children = node.children();
    for (i, (name, child)) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };

        output.push_str(prefix);
        output.push_str(connector);
        output.push_str(name);
        output.push('\n');

        if child.is_dir() {
            format_children(child, output, &continuation_prefix(prefix, is_last));
        }
    }
}
