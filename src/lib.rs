pub mod config;
pub mod error;
pub mod logging;
pub mod platform;
pub mod remover;
pub mod reporter;
pub mod sweep;

pub use config::AppConfig;
pub use error::Error;
pub use remover::{FileRemover, FsRemover};
pub use reporter::{LogReporter, SilentReporter, SweepReporter};
pub use sweep::{remove_files_with_suffix, Sweeper};
