use std::path::PathBuf;

use derive_more::Display;
use tracing::Level;

use crate::structure::EntryKind;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Event {
    #[display("[{index}/{total}] Created {kind}: {}", path.display())]
    Created {
        path: PathBuf,
        kind: EntryKind,
        /// 1-based position among all entries of the run
        index: usize,
        total: usize,
    },
    /// The requested path was taken, so a suffixed one was used instead.
    #[display("{} already exists, using {}", requested.display(), actual.display())]
    Renamed { requested: PathBuf, actual: PathBuf },
    #[display("Failed to create {}: {message}", path.display())]
    Failed { path: PathBuf, message: String },
    #[display("Created {created} entries in {}", base.display())]
    Finished { created: usize, base: PathBuf },
}

impl Event {
    pub fn level(&self) -> Level {
        match self {
            Event::Created { .. } | Event::Finished { .. } => Level::INFO,
            Event::Renamed { .. } => Level::WARN,
            Event::Failed { .. } => Level::ERROR,
        }
    }
}
