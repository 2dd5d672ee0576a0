//! preq - create pull requests from the command line
//!
//! CLI binary wrapping the `preq` library.

use anstream::println;
use clap::{Parser, Subcommand};
use cli::style::Stylize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

/// Exit status for every failure
const FAILURE_EXIT_CODE: u8 = 3;

#[derive(Parser)]
#[command(name = "preq")]
#[command(about = "Pull requests for Bitbucket Cloud, GitHub & GitLab")]
#[command(version)]
struct Cli {
    /// Path to the git repository (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create pull request
    ///
    /// Creates a pull request on the web service hosting your origin repository
    #[command(visible_alias = "cr")]
    Create(cli::CreateArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stderr only; stdout carries command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let path = cli.path.unwrap_or_else(|| PathBuf::from("."));

    let result = match &cli.command {
        Commands::Create(args) => cli::run_create(&path, args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e.to_string().error().for_stdout());
            ExitCode::from(FAILURE_EXIT_CODE)
        }
    }
}
