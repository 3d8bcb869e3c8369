//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod detect;
pub mod generate_config;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect adjective classes in text files
    Detect(detect::DetectArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available detectors
    Detectors,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Detect(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Text printed by `radj list ...`
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            ListCommands::Detectors => {
                out.push_str("Available detectors:\n");
                for kind in radj_core::DEFAULT_DETECTORS {
                    out.push_str(&format!(
                        "  {}  {:<22} class code {}\n",
                        kind.letter(),
                        kind.name(),
                        kind.class().code()
                    ));
                }
            }
            ListCommands::Formats => {
                out.push_str("Available output formats:\n");
                out.push_str("  text      Tab-separated code, class and count\n");
                out.push_str("  json      JSON document with counts and predictions\n");
                out.push_str("  markdown  Markdown table\n");
            }
        }
        out
    }
}
