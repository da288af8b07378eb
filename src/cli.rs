use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "suffix-sweeper")]
#[command(about = "Recursively delete files whose name ends with a suffix", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Delete every file under DIRECTORY whose name ends with SUFFIX
    Remove {
        /// Root directory to sweep (defaults to `root_path` from Config.toml)
        directory: Option<String>,
        /// Literal, case-sensitive file name suffix (defaults to `suffix` from Config.toml)
        suffix: Option<String>,
    },
    /// Print configuration values
    PrintConfig,
}
