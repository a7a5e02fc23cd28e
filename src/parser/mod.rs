//! Indentation parser.
//!
//! Turns a pasted tree listing into a flat, order-preserving list of
//! [`ParsedLine`]s. Depth comes from leading indentation only; tree-drawing
//! glyphs are decoration and are blanked out before measuring.

mod parsed_line;
mod parser;
mod parser_config;
mod structure_error;

pub use parsed_line::ParsedLine;
pub use parser::parse;
pub use parser_config::{GlyphSet, IndentStyle, ParserConfig};
pub use structure_error::StructureError;
pub(crate) use structure_error::{
    ChildOfFileSnafu, ExtraRootSnafu, OrphanSnafu, RootNotDirectorySnafu,
};
