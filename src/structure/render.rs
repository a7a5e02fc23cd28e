use super::{Forest, NodeId};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const GAP: &str = "    ";

/// One row of the decorated preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLine {
    /// Drawing characters in front of the name, empty for roots
    pub prefix: String,
    pub node: NodeId,
}

/// Renders the forest as plain indented text, `indent` once per level.
///
/// Directories keep their trailing `/`, so the output parses back into the
/// same forest.
pub fn render_indented(forest: &Forest, indent: &str) -> String {
    forest
        .preorder()
        .map(|id| {
            let node = &forest[id];
            let suffix = if node.is_directory() { "/" } else { "" };
            format!("{}{}{}\n", indent.repeat(node.depth()), node.name(), suffix)
        })
        .collect()
}

/// Builds `tree`-style rows: roots flush left, descendants drawn with
/// `├──`/`└──` connectors and `│` rails for ancestors that have more siblings.
pub fn preview_lines(forest: &Forest) -> Vec<PreviewLine> {
    let mut lines = Vec::with_capacity(forest.len());
    for &root in forest.roots() {
        lines.push(PreviewLine {
            prefix: String::new(),
            node: root,
        });
        push_children(forest, root, "", &mut lines);
    }
    lines
}

fn push_children(forest: &Forest, parent: NodeId, rails: &str, lines: &mut Vec<PreviewLine>) {
    let children = forest.children(parent);
    for (index, &child) in children.iter().enumerate() {
        let is_last = index + 1 == children.len();
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        lines.push(PreviewLine {
            prefix: format!("{rails}{connector}"),
            node: child,
        });

        if forest[child].is_directory() {
            let rail = if is_last { GAP } else { PIPE };
            push_children(forest, child, &format!("{rails}{rail}"), lines);
        }
    }
}
