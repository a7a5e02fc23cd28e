use std::ops::Index;
use std::path::PathBuf;

use snafu::ensure;
use tracing::{debug, info};

use super::{Node, NodeId, NodeKind};
use crate::parser::{
    self, ChildOfFileSnafu, ExtraRootSnafu, OrphanSnafu, ParsedLine, ParserConfig,
    RootNotDirectorySnafu, StructureError,
};

/// Ordered collection of root nodes and everything below them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Forest {
    /// Parses and builds in one go.
    ///
    /// This is the only entry point used both for validating text and for
    /// building the tree that gets materialized.
    pub fn parse(text: &str, config: &ParserConfig) -> Result<Self, StructureError> {
        let lines = parser::parse(text, config)?;
        let forest = Self::build(&lines, config)?;
        info!(
            "Built structure with {} directories and {} files",
            forest.directory_count(),
            forest.file_count()
        );
        Ok(forest)
    }

    /// Links parsed lines into a forest using a stack of open ancestors.
    ///
    /// `open[d]` is the entry currently open at depth `d`. Files are pushed as
    /// well, so an entry declared under a file is reported instead of lost.
    pub fn build(lines: &[ParsedLine], config: &ParserConfig) -> Result<Self, StructureError> {
        let mut forest = Forest::default();
        let mut open: Vec<NodeId> = Vec::new();

        for entry in lines {
            let ParsedLine {
                line,
                depth,
                ref name,
                is_directory,
            } = *entry;

            open.truncate(depth);

            let parent = if depth == 0 {
                if config.single_root {
                    ensure!(forest.roots.is_empty(), ExtraRootSnafu { line, name });
                    ensure!(is_directory, RootNotDirectorySnafu { line, name });
                }
                None
            } else {
                ensure!(open.len() == depth, OrphanSnafu { line, depth });
                let top = open[depth - 1];
                ensure!(
                    forest[top].is_directory(),
                    ChildOfFileSnafu {
                        line,
                        file: forest[top].name(),
                    }
                );
                Some(top)
            };

            let id = forest.insert(entry, parent);
            open.push(id);
        }

        Ok(forest)
    }

    fn insert(&mut self, entry: &ParsedLine, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let kind = if entry.is_directory {
            NodeKind::Directory {
                children: Vec::new(),
            }
        } else {
            NodeKind::File
        };

        self.nodes.push(Node {
            name: entry.name.clone(),
            kind,
            parent,
            depth: entry.depth,
            line: entry.line,
        });

        match parent {
            Some(parent_id) => {
                if let NodeKind::Directory { children } = &mut self.nodes[parent_id.0].kind {
                    children.push(id);
                }
                debug!("Added '{}' to '{}'", entry.name, self.nodes[parent_id.0].name);
            }
            None => {
                self.roots.push(id);
                debug!("Added root '{}'", entry.name);
            }
        }

        id
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self[id].children()
    }

    /// Path of the entry relative to wherever the forest is materialized,
    /// rebuilt by walking parent links.
    pub fn relative_path(&self, id: NodeId) -> PathBuf {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &self[node_id];
            names.push(node.name());
            current = node.parent();
        }
        names.iter().rev().collect()
    }

    /// Every node in depth-first pre-order, which is also input order.
    pub fn preorder(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            stack.extend(self.children(id).iter().rev());
            Some(id)
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn directory_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_directory()).count()
    }

    pub fn file_count(&self) -> usize {
        self.len() - self.directory_count()
    }
}

impl Index<NodeId> for Forest {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn forest(text: &str) -> Forest {
        Forest::parse(text, &ParserConfig::default()).expect("Failed to build forest")
    }

    fn names(forest: &Forest, ids: &[NodeId]) -> Vec<String> {
        ids.iter().map(|id| forest[*id].name().to_string()).collect()
    }

    #[test]
    fn builds_project_example() {
        let forest = forest("Project/\n    src/\n        main.js\n    README.md\n");

        assert_eq!(names(&forest, forest.roots()), vec!["Project"]);
        let project = forest.roots()[0];
        assert_eq!(names(&forest, forest.children(project)), vec!["src", "README.md"]);
        let src = forest.children(project)[0];
        assert_eq!(names(&forest, forest.children(src)), vec!["main.js"]);
        assert_eq!(forest.len(), 4);
        assert_eq!(forest.directory_count(), 2);
        assert_eq!(forest.file_count(), 2);
    }

    #[test]
    fn parent_links_and_depths_are_consistent() {
        let forest = forest("a/\n    b/\n        c\n    d\ne/\n    f\n");

        for id in forest.preorder() {
            let node = &forest[id];
            match node.parent() {
                Some(parent) => {
                    assert_eq!(node.depth(), forest[parent].depth() + 1);
                    assert!(forest.children(parent).contains(&id));
                }
                None => {
                    assert_eq!(node.depth(), 0);
                    assert!(forest.roots().contains(&id));
                }
            }
        }
    }

    #[test]
    fn multiple_roots_are_allowed_by_default() {
        let forest = forest("a/\n    x\nb\nc/\n");

        assert_eq!(names(&forest, forest.roots()), vec!["a", "b", "c"]);
    }

    #[test]
    fn preorder_follows_input_order() {
        let text = "a/\n    b/\n        c\n    d\ne/\n    f\n";
        let forest = forest(text);

        let order: Vec<String> = forest
            .preorder()
            .map(|id| forest[id].name().to_string())
            .collect();

        assert_eq!(order, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn relative_path_walks_parents() {
        let forest = forest("a/\n    b/\n        c.txt\n");
        let c = forest.preorder().last().unwrap();

        assert_eq!(forest.relative_path(c), Path::new("a").join("b").join("c.txt"));
        assert_eq!(forest.relative_path(forest.roots()[0]), Path::new("a"));
    }

    #[test]
    fn file_cannot_contain_entries() {
        let result = Forest::parse("a/\n    b.txt\n        c\n", &ParserConfig::default());

        assert_eq!(
            result,
            Err(StructureError::ChildOfFile {
                line: 3,
                file: "b.txt".to_string()
            })
        );
    }

    #[test]
    fn root_file_cannot_contain_entries() {
        let result = Forest::parse("notes.md\n    draft.md\n", &ParserConfig::default());

        assert!(matches!(result, Err(StructureError::ChildOfFile { line: 2, .. })));
    }

    #[test]
    fn first_line_indented_is_an_orphan() {
        let result = Forest::parse("\n    a/\n", &ParserConfig::default());

        assert_eq!(result, Err(StructureError::Orphan { line: 2, depth: 1 }));
    }

    #[test]
    fn build_rejects_lines_without_parent_context() {
        let lines = vec![
            ParsedLine::new(1, 0, "a", true),
            ParsedLine::new(2, 2, "b", false),
        ];

        let result = Forest::build(&lines, &ParserConfig::default());

        assert_eq!(result, Err(StructureError::Orphan { line: 2, depth: 2 }));
    }

    #[test]
    fn single_root_rejects_second_root() {
        let config = ParserConfig::default().single_root(true);

        let result = Forest::parse("a/\n    x\nb/\n", &config);

        assert_eq!(
            result,
            Err(StructureError::ExtraRoot {
                line: 3,
                name: "b".to_string()
            })
        );
    }

    #[test]
    fn single_root_requires_directory() {
        let config = ParserConfig::default().single_root(true);

        let result = Forest::parse("README.md\n", &config);

        assert!(matches!(result, Err(StructureError::RootNotDirectory { line: 1, .. })));
    }

    #[test]
    fn single_root_accepts_one_directory() {
        let config = ParserConfig::default().single_root(true);

        let forest = Forest::parse("app/\n    main.rs\n", &config).unwrap();

        assert_eq!(forest.roots().len(), 1);
    }

    #[test]
    fn empty_text_gives_empty_forest() {
        let forest = forest("\n\n");

        assert!(forest.is_empty());
        assert!(forest.roots().is_empty());
        assert_eq!(forest.preorder().count(), 0);
    }

    #[test]
    fn duplicate_sibling_names_are_kept() {
        let forest = forest("a/\n    x\n    x\n");

        assert_eq!(forest.children(forest.roots()[0]).len(), 2);
    }

    #[test]
    fn preorder_matches_parser_output() {
        let text = "a/\n\n    b/\n        c\n    d\ne\n";
        let config = ParserConfig::default();

        let parsed = parser::parse(text, &config).unwrap();
        let forest = Forest::build(&parsed, &config).unwrap();

        let flattened: Vec<ParsedLine> = forest
            .preorder()
            .map(|id| {
                let node = &forest[id];
                ParsedLine::new(node.line(), node.depth(), node.name(), node.is_directory())
            })
            .collect();
        assert_eq!(flattened, parsed);
    }
}
