//! Hierarchical node model.
//!
//! A [`Forest`] owns every [`Node`] in an arena; directories refer to their
//! children by [`NodeId`] and children point back at their parent the same
//! way. Nothing outside this module can mutate a built forest.

mod forest;
mod node;
mod render;

pub use forest::Forest;
pub use node::{EntryKind, Node, NodeId, NodeKind};
pub use render::{preview_lines, render_indented};
