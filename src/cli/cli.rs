use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

use crate::application::data::LogLevel;

/// Create directories and files from an indented tree listing
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Cli {
    /// File holding the structure; `-` or nothing reads stdin
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Directory the structure is created in
    #[arg(long, short, default_value = ".")]
    pub base: PathBuf,

    /// Only validate and print the preview
    #[arg(long)]
    pub check: bool,

    /// Print the preview as plain indented text instead of a drawn tree
    #[arg(long)]
    pub plain: bool,

    /// Spaces per indentation level
    #[arg(long, default_value = "4", conflicts_with = "tabs")]
    pub indent_width: NonZeroUsize,

    /// Indent with one tab per level instead of spaces
    #[arg(long)]
    pub tabs: bool,

    /// Also accept `+`, `-`, `|` and `` ` `` as tree drawing characters
    #[arg(long)]
    pub ascii: bool,

    /// Reject indentation that is not a whole number of levels
    #[arg(long)]
    pub strict: bool,

    /// Require a single top-level directory
    #[arg(long)]
    pub single_root: bool,

    #[arg(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Append a timestamped log of every event to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
