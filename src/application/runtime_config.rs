use std::path::PathBuf;

use crate::application::data::InputSource;
use crate::cli::Cli;
use crate::parser::{GlyphSet, IndentStyle, ParserConfig};

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub input: InputSource,
    pub base: PathBuf,
    pub check_only: bool,
    pub plain_preview: bool,
    pub parser: ParserConfig,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        let indent = if cli.tabs {
            IndentStyle::Tabs
        } else {
            IndentStyle::Spaces(cli.indent_width)
        };
        let glyphs = if cli.ascii {
            GlyphSet::Ascii
        } else {
            GlyphSet::Unicode
        };

        Self {
            input: cli.input.into(),
            base: cli.base,
            check_only: cli.check,
            plain_preview: cli.plain,
            parser: ParserConfig::default()
                .with_indent(indent)
                .with_glyphs(glyphs)
                .strict(cli.strict)
                .single_root(cli.single_root),
        }
    }
}
