use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::structure::EntryKind;

pub trait PathExt {
    /// Absolute, `.`/`..`-free rendering for messages. Falls back to the path
    /// as given when it cannot be resolved.
    fn best_effort_display(&self) -> String;

    /// Sibling path carrying a two-digit counter, e.g. `Project01` or
    /// `main01.js`. Files keep their extension after the counter.
    fn with_counter(&self, counter: u32, kind: EntryKind) -> PathBuf;
}

impl PathExt for Path {
    fn best_effort_display(&self) -> String {
        self.canonicalize()
            .or_else(|_| std::path::absolute(self))
            .map(|path| normalize(&path))
            .unwrap_or_else(|_| self.to_path_buf())
            .display()
            .to_string()
    }

    fn with_counter(&self, counter: u32, kind: EntryKind) -> PathBuf {
        let counter = format!("{counter:02}");

        let (stem, extension) = match kind {
            EntryKind::File => (self.file_stem(), self.extension()),
            EntryKind::Directory => (self.file_name(), None),
        };

        let mut name = stem.map(|s| s.to_os_string()).unwrap_or_else(OsString::new);
        name.push(counter);
        if let Some(extension) = extension {
            name.push(".");
            name.push(extension);
        }
        self.with_file_name(name)
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            std::path::Component::CurDir => {}
            std::path::Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use tempfile::TempDir;

    #[rstest]
    #[case("X/Project", EntryKind::Directory, 1, "X/Project01")]
    #[case("X/Project", EntryKind::Directory, 12, "X/Project12")]
    #[case("X/Project", EntryKind::Directory, 100, "X/Project100")]
    #[case("X/my.dir", EntryKind::Directory, 1, "X/my.dir01")]
    #[case("X/main.js", EntryKind::File, 1, "X/main01.js")]
    #[case("X/archive.tar.gz", EntryKind::File, 2, "X/archive.tar02.gz")]
    #[case("X/.env", EntryKind::File, 1, "X/.env01")]
    #[case("X/Makefile", EntryKind::File, 3, "X/Makefile03")]
    fn counter_is_inserted_before_extension_for_files(
        #[case] path: &str,
        #[case] kind: EntryKind,
        #[case] counter: u32,
        #[case] expected: &str,
    ) {
        assert_eq!(Path::new(path).with_counter(counter, kind), Path::new(expected));
    }

    #[test]
    fn display_resolves_dot_components() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("missing").join("..").join("other");

        let display = path.best_effort_display();

        assert!(!display.contains(".."));
        assert!(display.ends_with("other"));
    }

    #[test]
    fn display_of_existing_path_is_absolute() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let display = temp_dir.path().best_effort_display();

        assert!(Path::new(&display).is_absolute());
    }
}
