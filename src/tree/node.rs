//! In-memory directory tree

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A node of the directory tree.
///
/// Files and empty directories are distinct here, but both serialize to
/// `{}` and both render as a plain line, so the output files cannot tell
/// them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File,
    /// Children in insertion order
    Dir(Vec<(String, Node)>),
}

impl Node {
    pub fn file() -> Self {
        Node::File
    }

    /// Build a directory from `(name, node)` pairs, keeping their order.
    pub fn dir<I, S>(children: I) -> Self
    where
        I: IntoIterator<Item = (S, Node)>,
        S: Into<String>,
    {
        Node::Dir(
            children
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        )
    }

    pub fn empty_dir() -> Self {
        Node::Dir(Vec::new())
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Dir(_))
    }

    /// Direct children, empty for files.
    pub fn children(&self) -> &[(String, Node)] {
        match self {
            Node::File => &[],
            Node::Dir(children) => children,
        }
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children()
            .iter()
            .find(|(child_name, _)| child_name == name)
            .map(|(_, node)| node)
    }

    /// Count (directories, files) below this node, not counting itself.
    pub fn counts(&self) -> (usize, usize) {
        self.children()
            .iter()
            .fold((0, 0), |(dirs, files), (_, node)| match node {
                Node::File => (dirs, files + 1),
                Node::Dir(_) => {
                    let (d, f) = node.counts();
                    (dirs + 1 + d, files + f)
                }
            })
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let children = self.children();
        let mut map = serializer.serialize_map(Some(children.len()))?;
        for (name, node) in children {
            map.serialize_entry(name, node)?;
        }
        map.end()
    }
}
