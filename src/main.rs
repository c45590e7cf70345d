mod checker;
mod commands;
mod diagnostics;
mod error;
mod info;
mod logging;
mod report;
mod scanner;
mod types;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

/// Exit code when a command could not run to completion.
const EXIT_ERROR: u8 = 2;

/// Command-line interface for doclinks.
#[derive(Parser)]
#[command(name = "doclinks", version, about = "Find broken relative links in markdown docs")]
struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Scan markdown files and report links to files that do not exist
    Check {
        /// Exit 1 when broken links are found
        #[arg(long)]
        fail_on_broken: bool,
        /// Directory to scan
        #[arg(default_value = "docs")]
        root: PathBuf,
        /// Log each scanned document and broken link to stderr
        #[arg(short, long)]
        verbose: bool,
    },
    /// Print link syntax, exit codes, and current state
    Info {
        /// Directory to describe
        #[arg(default_value = "docs")]
        root: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { fail_on_broken, root, verbose } => {
            logging::init(verbose);
            commands::check(&root, fail_on_broken)
        },
        Commands::Info { root } => {
            logging::init(false);
            commands::info(&root).map(|()| return ExitCode::SUCCESS)
        },
    };

    return match result {
        Ok(code) => code,
        Err(e) => {
            diagnostics::print_error(&e);
            ExitCode::from(EXIT_ERROR)
        },
    };
}
