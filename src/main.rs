mod cli;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use dotenv::dotenv;
use std::process;
use suffix_sweeper::{logging, AppConfig, FsRemover, LogReporter, Sweeper};
use tracing::error;

fn main() {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    match args.command {
        Some(Commands::Remove { directory, suffix }) => {
            if let Err(err) = run_remove(directory, suffix) {
                error!("Error: {:#}", err);
                process::exit(1);
            }
        }
        Some(Commands::PrintConfig) => match load_config() {
            Ok(config) => println!("Configuration: {:?}", config),
            Err(err) => {
                error!("Error: {:#}", err);
                process::exit(1);
            }
        },
        None => {
            let _ = Cli::command().print_long_help();
        }
    }
}

fn load_config() -> anyhow::Result<AppConfig> {
    suffix_sweeper::config::load_configuration().context("Error loading configuration")
}

/// Per-file failures are logged by the reporter and never change the exit code.
fn run_remove(directory: Option<String>, suffix: Option<String>) -> anyhow::Result<()> {
    let config = load_config()?.with_overrides(directory, suffix);
    Sweeper::new(config.root_path, config.suffix).run(&FsRemover, &LogReporter);
    Ok(())
}
