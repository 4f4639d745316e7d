use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "ioutil", version, about = "Recursive delete and guarded mkdir")]
pub struct Cli {
    #[arg(short = 'f', long = "file", global = true)]
    pub file: Option<PathBuf>,
    #[arg(short = 'n', long = "dry-run", global = true)]
    pub dry_run: bool,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Delete files or whole directory trees.
    Delete {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Create PARENT/NAME, failing if it already exists.
    Mkdir { parent: PathBuf, name: PathBuf },
    /// Show the effective configuration and where it was loaded from.
    Config,
}

pub fn parse() -> Cli {
    Cli::parse()
}
