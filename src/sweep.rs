use crate::platform;
use crate::remover::{FileRemover, FsRemover};
use crate::reporter::{LogReporter, SweepReporter};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Recursively deletes every file under `root` whose name ends with `suffix`.
pub struct Sweeper {
    root: PathBuf,
    suffix: String,
}

impl Sweeper {
    pub fn new(root: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            suffix: suffix.into(),
        }
    }

    /// Walk the tree once, handing each matching file to `remover` and each
    /// outcome to `reporter`. A failed removal is reported and skipped; it
    /// never stops the walk. Unreadable directories are skipped.
    pub fn run(&self, remover: &dyn FileRemover, reporter: &dyn SweepReporter) {
        reporter.on_sweep_start(&self.root, &self.suffix);
        let start = Instant::now();

        // Depth 0 is the root itself; a root that is a plain file yields nothing.
        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };

            if !is_file_entry(&entry) {
                continue;
            }

            if !platform::name_ends_with(entry.file_name(), &self.suffix) {
                continue;
            }

            let path = entry.path();
            match remover.remove(path) {
                Ok(()) => reporter.on_removed(path),
                Err(err) => reporter.on_remove_failed(path, &err),
            }
        }

        reporter.on_sweep_complete(start.elapsed().as_secs_f64());
    }
}

/// Anything that is not a directory counts as a file. A symlink pointing at a
/// directory counts as a directory and is neither matched nor descended into.
fn is_file_entry(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    if file_type.is_symlink() {
        return !entry.path().is_dir();
    }
    true
}

/// Delete every file under `directory` whose name ends with `suffix`, logging
/// one line per attempt.
pub fn remove_files_with_suffix(directory: impl AsRef<Path>, suffix: &str) {
    Sweeper::new(directory.as_ref(), suffix).run(&FsRemover, &LogReporter);
}
