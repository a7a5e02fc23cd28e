use std::path::Path;

use colored::{ColoredString, Colorize};
use supports_color::Stream;

use crate::ext::PathExt;
use crate::materializer::CreatedPath;
use crate::parser::StructureError;
use crate::structure::{EntryKind, Forest, preview_lines, render_indented};

const PLAIN_INDENT: &str = "    ";

/// User-facing output on stdout. Diagnostics go through `tracing` instead.
pub struct Console {
    colors: bool,
}

impl Console {
    /// Enables colors only when stdout supports them.
    pub fn detect() -> Self {
        let colors = supports_color::on(Stream::Stdout).is_some();
        colored::control::set_override(colors);
        Console { colors }
    }

    pub fn print_preview(&self, forest: &Forest) {
        print!("{}", self.format_preview(forest));
    }

    pub fn print_indented(&self, forest: &Forest) {
        print!("{}", render_indented(forest, PLAIN_INDENT));
    }

    pub fn print_valid(&self, forest: &Forest) {
        println!(
            "{} {} directories, {} files",
            self.paint("Structure is valid:".green()),
            forest.directory_count(),
            forest.file_count()
        );
    }

    pub fn print_summary(&self, forest: &Forest, created: &[CreatedPath], base: &Path) {
        print!("{}", self.format_summary(forest, created, base));
    }

    /// Echoes the line a structure error points at, on stderr.
    pub fn print_structure_error(&self, text: &str, error: &StructureError) {
        if let Some(excerpt) = self.format_excerpt(text, error.line()) {
            eprint!("{excerpt}");
        }
    }

    fn paint(&self, text: ColoredString) -> ColoredString {
        if self.colors { text } else { text.clear() }
    }

    fn format_preview(&self, forest: &Forest) -> String {
        preview_lines(forest)
            .into_iter()
            .map(|line| {
                let node = &forest[line.node];
                let name = if node.is_directory() {
                    format!("{}/", node.name()).blue().bold()
                } else {
                    node.name().normal()
                };
                format!(
                    "{}{}\n",
                    self.paint(line.prefix.dimmed()),
                    self.paint(name)
                )
            })
            .collect()
    }

    fn format_excerpt(&self, text: &str, line: usize) -> Option<String> {
        let content = text.lines().nth(line.checked_sub(1)?)?;
        Some(format!(
            "{} {}\n",
            self.paint(format!("{line:>4} |").red().bold()),
            content
        ))
    }

    fn format_summary(&self, forest: &Forest, created: &[CreatedPath], base: &Path) -> String {
        let directories = created
            .iter()
            .filter(|entry| entry.kind == EntryKind::Directory)
            .count();
        let files = created.len() - directories;

        let mut summary = format!(
            "{} {} directories and {} files in {}\n",
            self.paint("Created".green().bold()),
            directories,
            files,
            base.best_effort_display()
        );
        for entry in created.iter().filter(|entry| entry.renamed) {
            summary.push_str(&format!(
                "  {} '{}' already existed, created {}\n",
                self.paint("renamed".yellow()),
                forest.relative_path(entry.node).display(),
                entry.path.display()
            ));
        }
        summary
    }
}
