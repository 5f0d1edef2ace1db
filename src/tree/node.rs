//! Node types for the deserialized filesystem tree

use serde::Deserialize;

/// Whether a node is a file or a directory with its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Dir(Vec<Node>),
}

/// One entry of the tree.
///
/// The kind is decided once while deserializing: a node carrying a `contents`
/// array is a directory, anything else is a file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawNode")]
pub struct Node {
    pub name: String,
    pub permissions: String,
    pub size: i64,
    /// Unix timestamp in seconds.
    pub time_modified: i64,
    pub kind: NodeKind,
}

/// Wire shape of a node as it appears in the JSON description.
#[derive(Deserialize)]
struct RawNode {
    name: String,
    permissions: String,
    size: i64,
    time_modified: i64,
    #[serde(default)]
    contents: Option<Vec<Node>>,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        let kind = match raw.contents {
            Some(children) => NodeKind::Dir(children),
            None => NodeKind::File,
        };
        Self {
            name: raw.name,
            permissions: raw.permissions,
            size: raw.size,
            time_modified: raw.time_modified,
            kind,
        }
    }
}

impl Node {
    pub fn file(
        name: impl Into<String>,
        permissions: impl Into<String>,
        size: i64,
        time_modified: i64,
    ) -> Self {
        Self {
            name: name.into(),
            permissions: permissions.into(),
            size,
            time_modified,
            kind: NodeKind::File,
        }
    }

    pub fn dir(
        name: impl Into<String>,
        permissions: impl Into<String>,
        size: i64,
        time_modified: i64,
        children: Vec<Node>,
    ) -> Self {
        Self {
            name: name.into(),
            permissions: permissions.into(),
            size,
            time_modified,
            kind: NodeKind::Dir(children),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Dir(_))
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Children of a directory, `None` for a file.
    pub fn children(&self) -> Option<&[Node]> {
        match &self.kind {
            NodeKind::Dir(children) => Some(children),
            NodeKind::File => None,
        }
    }

    /// Find a direct child by exact name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children()?.iter().find(|c| c.name == name)
    }
}

/// Top of the description. Only `contents` is used; the root's own
/// name and metadata are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tree {
    pub contents: Vec<Node>,
}

impl Tree {
    pub fn new(contents: Vec<Node>) -> Self {
        Self { contents }
    }

    pub fn entries(&self) -> &[Node] {
        &self.contents
    }

    /// Find a root-level entry by exact name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.contents.iter().find(|c| c.name == name)
    }
}
