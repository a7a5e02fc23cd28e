use std::error::Error as _;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu, ensure};
use tracing::debug;

use super::CreatedPath;
use crate::events::{Event, EventSink};
use crate::ext::PathExt;
use crate::structure::{EntryKind, Forest, NodeId};

/// Highest counter tried before giving up on finding a free name.
const MAX_COUNTER: u32 = 9999;

/// Writes a forest below a base directory, one entry per node.
///
/// Existing entries are never touched: a node whose path is taken is created
/// under a numbered sibling name instead (`Project01`, `main01.js`, ...), and
/// its children follow it there.
pub struct Materializer<S> {
    sink: S,
}

impl<S: EventSink> Materializer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Creates every node in pre-order and returns what was created.
    ///
    /// Stops at the first failure. Entries created before it stay on disk.
    pub fn materialize(
        &mut self,
        forest: &Forest,
        base: &Path,
    ) -> Result<Vec<CreatedPath>, MaterializeError> {
        if forest.is_empty() {
            debug!("Nothing to create");
            return Ok(Vec::new());
        }
        check_base(base)?;

        let total = forest.len();
        let mut created = Vec::with_capacity(total);
        let mut pending: Vec<(NodeId, PathBuf)> = forest
            .roots()
            .iter()
            .rev()
            .map(|&id| (id, base.to_path_buf()))
            .collect();

        while let Some((id, parent_path)) = pending.pop() {
            let node = &forest[id];
            let kind = node.entry_kind();
            let requested = parent_path.join(node.name());
            debug!(
                "Creating node {} ({}) declared on line {}",
                id,
                requested.display(),
                node.line()
            );

            let path = create_unique(&requested, kind).inspect_err(|error| {
                self.sink.record(&Event::Failed {
                    path: requested.clone(),
                    message: error
                        .source()
                        .map(ToString::to_string)
                        .unwrap_or_else(|| error.to_string()),
                });
            })?;

            let renamed = path != requested;
            if renamed {
                self.sink.record(&Event::Renamed {
                    requested,
                    actual: path.clone(),
                });
            }
            self.sink.record(&Event::Created {
                path: path.clone(),
                kind,
                index: created.len() + 1,
                total,
            });

            pending.extend(
                forest
                    .children(id)
                    .iter()
                    .rev()
                    .map(|&child| (child, path.clone())),
            );
            created.push(CreatedPath {
                node: id,
                path,
                kind,
                renamed,
            });
        }

        self.sink.record(&Event::Finished {
            created: created.len(),
            base: base.to_path_buf(),
        });
        Ok(created)
    }
}

fn check_base(base: &Path) -> Result<(), MaterializeError> {
    let metadata = fs::metadata(base).context(BaseAccessSnafu { path: base })?;
    ensure!(metadata.is_dir(), BaseNotDirectorySnafu { path: base });
    Ok(())
}

/// Creates `requested`, or the first numbered sibling of it that is free.
fn create_unique(requested: &Path, kind: EntryKind) -> Result<PathBuf, MaterializeError> {
    if let (EntryKind::File, Some(parent)) = (kind, requested.parent()) {
        fs::create_dir_all(parent).context(CreateSnafu { path: parent })?;
    }

    let candidates = std::iter::once(requested.to_path_buf()).chain(
        (1..=MAX_COUNTER).map(|counter| requested.with_counter(counter, kind)),
    );

    for candidate in candidates {
        if candidate
            .try_exists()
            .context(CreateSnafu { path: &candidate })?
        {
            continue;
        }

        match create_exclusive(&candidate, kind) {
            Ok(()) => return Ok(candidate),
            // Appeared since the existence check; move on to the next name.
            Err(source) if source.kind() == io::ErrorKind::AlreadyExists => {
                debug!("{} was taken concurrently", candidate.display());
            }
            Err(source) => {
                return Err(MaterializeError::CreateError {
                    path: candidate,
                    source,
                });
            }
        }
    }

    NoUniquePathSnafu {
        path: requested,
        attempts: MAX_COUNTER,
    }
    .fail()
}

/// Fails with `AlreadyExists` instead of reusing or truncating an entry.
fn create_exclusive(path: &Path, kind: EntryKind) -> io::Result<()> {
    match kind {
        EntryKind::Directory => fs::create_dir(path),
        EntryKind::File => OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(drop),
    }
}

#[derive(Debug, Snafu)]
pub enum MaterializeError {
    #[snafu(display("Cannot access base directory {}", path.best_effort_display()))]
    BaseAccessError { path: PathBuf, source: io::Error },
    #[snafu(display("Base path {} is not a directory", path.best_effort_display()))]
    BaseNotDirectoryError { path: PathBuf },
    #[snafu(display("Failed to create {}", path.best_effort_display()))]
    CreateError { path: PathBuf, source: io::Error },
    #[snafu(display(
        "No free name for {} after {} numbered attempts",
        path.best_effort_display(),
        attempts
    ))]
    NoUniquePathError { path: PathBuf, attempts: u32 },
}
