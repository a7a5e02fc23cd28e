use derive_more::Display;

/// Index of a [`Node`] inside the [`Forest`](super::Forest) that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("#{_0}")]
pub struct NodeId(pub(super) usize);

/// Represents the type of a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory { children: Vec<NodeId> },
}

/// Fieldless counterpart of [`NodeKind`], for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EntryKind {
    #[display("file")]
    File,
    #[display("directory")]
    Directory,
}

/// One entry of the reconstructed hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(super) name: String,
    pub(super) kind: NodeKind,
    pub(super) parent: Option<NodeId>,
    pub(super) depth: usize,
    pub(super) line: usize,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entry_kind(&self) -> EntryKind {
        match self.kind {
            NodeKind::File => EntryKind::File,
            NodeKind::Directory { .. } => EntryKind::Directory,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// Non-owning link to the enclosing directory, `None` for roots.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Source line the entry was declared on.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Children in declaration order; always empty for files.
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Directory { children } => children.as_slice(),
            NodeKind::File => &[],
        }
    }
}
