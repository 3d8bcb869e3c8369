//! radj command-line entry point

use clap::Parser;
use radj_cli::commands::Commands;

/// Rough detector of Russian adjective classes
#[derive(Debug, Parser)]
#[command(name = "radj", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
