use snafu::ensure;
use tracing::debug;

use super::structure_error::{
    DepthJumpSnafu, EmptyNameSnafu, ReservedNameSnafu, SeparatorInNameSnafu, UnevenIndentSnafu,
};
use super::{IndentStyle, ParsedLine, ParserConfig, StructureError};

const DIRECTORY_SUFFIX: char = '/';

/// Parses a tree listing into one [`ParsedLine`] per non-blank line.
///
/// Blank lines are skipped and do not count as the previous line for the
/// depth jump check.
pub fn parse(text: &str, config: &ParserConfig) -> Result<Vec<ParsedLine>, StructureError> {
    let mut parsed = Vec::new();
    let mut previous_depth = 0;

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let entry = parse_line(line, raw, previous_depth, config)?;
        debug!(
            "Line {}: '{}' at level {} (directory: {})",
            line, entry.name, entry.depth, entry.is_directory
        );
        previous_depth = entry.depth;
        parsed.push(entry);
    }

    debug!("Parsed {} entries", parsed.len());
    Ok(parsed)
}

fn parse_line(
    line: usize,
    raw: &str,
    previous_depth: usize,
    config: &ParserConfig,
) -> Result<ParsedLine, StructureError> {
    let undecorated = strip_glyphs(raw, config);
    let (indent, rest) = split_indent(&undecorated);

    let name = rest.trim();
    ensure!(!name.is_empty(), EmptyNameSnafu { line });

    let depth = indent.depth(line, config)?;
    ensure!(
        depth <= previous_depth + 1,
        DepthJumpSnafu {
            line,
            previous: previous_depth,
            depth,
        }
    );

    let (name, is_directory) = split_directory_suffix(name);
    validate_name(line, name)?;

    Ok(ParsedLine::new(line, depth, name, is_directory))
}

/// Leading whitespace of a line once its glyphs are gone.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Indent {
    tabs: usize,
    /// Whitespace other than tabs, one column per character
    columns: usize,
}

impl Indent {
    fn depth(self, line: usize, config: &ParserConfig) -> Result<usize, StructureError> {
        let (depth, extra) = match config.indent {
            IndentStyle::Spaces(width) => {
                let total = self.tabs * width.get() + self.columns;
                (total / width.get(), total % width.get())
            }
            IndentStyle::Tabs => (self.tabs, self.columns),
        };

        ensure!(
            !config.strict_indent || extra == 0,
            UnevenIndentSnafu { line, extra }
        );
        Ok(depth)
    }
}

/// Drops tree-drawing glyphs without leaving anything in their place.
///
/// Box glyphs go wherever they appear. The rest of the set only counts
/// before the first character of the name.
fn strip_glyphs(raw: &str, config: &ParserConfig) -> String {
    let mut in_prefix = true;

    raw.chars()
        .filter(|&c| {
            let decoration = config.glyphs.is_inline_glyph(c)
                || (in_prefix && config.glyphs.is_prefix_glyph(c));
            if decoration {
                return false;
            }
            in_prefix &= c.is_whitespace();
            true
        })
        .collect()
}

/// Splits off the leading whitespace, which alone decides the depth.
fn split_indent(line: &str) -> (Indent, &str) {
    let mut indent = Indent::default();

    for (offset, c) in line.char_indices() {
        match c {
            '\t' => indent.tabs += 1,
            c if c.is_whitespace() => indent.columns += 1,
            _ => return (indent, &line[offset..]),
        }
    }

    (indent, "")
}

/// Strips every trailing separator; a name ending in one is a directory.
fn split_directory_suffix(name: &str) -> (&str, bool) {
    let stripped = name.trim_end_matches(DIRECTORY_SUFFIX);
    (stripped.trim_end(), stripped.len() != name.len())
}

fn validate_name(line: usize, name: &str) -> Result<(), StructureError> {
    ensure!(!name.is_empty(), EmptyNameSnafu { line });
    ensure!(
        !name.chars().any(std::path::is_separator),
        SeparatorInNameSnafu { line, name }
    );
    ensure!(name != "." && name != "..", ReservedNameSnafu { line, name });
    Ok(())
}
