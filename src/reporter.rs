use std::io;
use std::path::Path;
use tracing::{debug, error, info};

/// Trait for reporting the outcome of each removal attempt.
///
/// The CLI logs through tracing; tests record events. All methods have
/// default no-op implementations.
pub trait SweepReporter {
    fn on_sweep_start(&self, _root: &Path, _suffix: &str) {}
    fn on_removed(&self, _path: &Path) {}
    fn on_remove_failed(&self, _path: &Path, _err: &io::Error) {}
    fn on_sweep_complete(&self, _duration_secs: f64) {}
}

/// No-op reporter for silent operation.
pub struct SilentReporter;

impl SweepReporter for SilentReporter {}

/// Emits one line per removal attempt:
///
/// - `Removed file: <path>` at info
/// - `Error removing <path>: <error>` at error
pub struct LogReporter;

impl SweepReporter for LogReporter {
    fn on_sweep_start(&self, root: &Path, suffix: &str) {
        debug!("Sweeping {} for files ending with {:?}", root.display(), suffix);
    }

    fn on_removed(&self, path: &Path) {
        info!("Removed file: {}", path.display());
    }

    fn on_remove_failed(&self, path: &Path, err: &io::Error) {
        error!("Error removing {}: {}", path.display(), err);
    }

    fn on_sweep_complete(&self, duration_secs: f64) {
        debug!("Sweep completed in {:.2}s", duration_secs);
    }
}
