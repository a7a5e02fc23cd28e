use snafu::Snafu;

/// The input text is not a well-formed hierarchy.
///
/// Every variant is keyed to the 1-based line it was detected on.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum StructureError {
    #[snafu(display("Line {line}: the file or directory name is empty"))]
    EmptyName { line: usize },
    #[snafu(display(
        "Line {line}: indentation has {extra} column(s) beyond a whole number of levels"
    ))]
    UnevenIndent { line: usize, extra: usize },
    #[snafu(display(
        "Line {line}: indentation jumps from level {previous} to level {depth}, a line may open only one new level"
    ))]
    DepthJump {
        line: usize,
        previous: usize,
        depth: usize,
    },
    #[snafu(display("Line {line}: there is no parent entry for level {depth}"))]
    Orphan { line: usize, depth: usize },
    #[snafu(display("Line {line}: '{file}' is a file and cannot contain entries"))]
    ChildOfFile { line: usize, file: String },
    #[snafu(display("Line {line}: '{name}' contains a path separator"))]
    SeparatorInName { line: usize, name: String },
    #[snafu(display("Line {line}: '{name}' is not a valid entry name"))]
    ReservedName { line: usize, name: String },
    #[snafu(display("Line {line}: only one top-level entry is allowed, found another one: '{name}'"))]
    ExtraRoot { line: usize, name: String },
    #[snafu(display("Line {line}: the top-level entry '{name}' must be a directory"))]
    RootNotDirectory { line: usize, name: String },
}

impl StructureError {
    pub fn line(&self) -> usize {
        match self {
            StructureError::EmptyName { line }
            | StructureError::UnevenIndent { line, .. }
            | StructureError::DepthJump { line, .. }
            | StructureError::Orphan { line, .. }
            | StructureError::ChildOfFile { line, .. }
            | StructureError::SeparatorInName { line, .. }
            | StructureError::ReservedName { line, .. }
            | StructureError::ExtraRoot { line, .. }
            | StructureError::RootNotDirectory { line, .. } => *line,
        }
    }
}
