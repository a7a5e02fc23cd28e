/// One non-blank input line after indentation and decoration were resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// 1-based line number in the source text
    pub line: usize,
    pub depth: usize,
    pub name: String,
    pub is_directory: bool,
}

impl ParsedLine {
    pub fn new(line: usize, depth: usize, name: impl Into<String>, is_directory: bool) -> Self {
        Self {
            line,
            depth,
            name: name.into(),
            is_directory,
        }
    }
}
