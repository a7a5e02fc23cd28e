use std::path::PathBuf;

use crate::structure::{EntryKind, NodeId};

/// A filesystem entry created for one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPath {
    pub node: NodeId,
    /// Where the entry actually ended up, after disambiguation
    pub path: PathBuf,
    pub kind: EntryKind,
    /// The declared name was taken and a numbered one was used
    pub renamed: bool,
}
