use std::num::NonZeroUsize;

const DEFAULT_INDENT_WIDTH: NonZeroUsize = NonZeroUsize::new(4).unwrap();

/// Box-drawing characters emitted by `tree` and most pasted listings.
const BOX_GLYPHS: [char; 4] = ['├', '└', '─', '│'];

/// ASCII drawing characters, as in `tree --charset=ascii` output.
const ASCII_GLYPHS: [char; 4] = ['+', '-', '|', '`'];

/// How leading whitespace maps to nesting levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentStyle {
    /// `width` columns per level. A tab counts as a full level.
    Spaces(NonZeroUsize),
    /// One tab per level. Other leading whitespace is left over.
    Tabs,
}

impl Default for IndentStyle {
    fn default() -> Self {
        IndentStyle::Spaces(DEFAULT_INDENT_WIDTH)
    }
}

/// Characters recognized as tree decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphSet {
    #[default]
    Unicode,
    /// Box-drawing glyphs plus `+ - | \``.
    Ascii,
}

impl GlyphSet {
    /// Whether `c` is decoration when it appears before the entry name.
    /// Decoration is removed and never counts towards the depth.
    pub fn is_prefix_glyph(self, c: char) -> bool {
        BOX_GLYPHS.contains(&c) || (self == GlyphSet::Ascii && ASCII_GLYPHS.contains(&c))
    }

    /// Whether `c` is decoration anywhere in the line.
    ///
    /// ASCII glyphs are legal file name characters, so only box-drawing
    /// glyphs qualify here.
    pub fn is_inline_glyph(self, c: char) -> bool {
        BOX_GLYPHS.contains(&c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserConfig {
    pub indent: IndentStyle,
    pub glyphs: GlyphSet,
    /// Reject indentation that is not a whole number of levels.
    pub strict_indent: bool,
    /// Require exactly one top-level entry, which must be a directory.
    pub single_root: bool,
}

impl ParserConfig {
    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn strict(mut self, strict_indent: bool) -> Self {
        self.strict_indent = strict_indent;
        self
    }

    pub fn single_root(mut self, single_root: bool) -> Self {
        self.single_root = single_root;
        self
    }
}
