//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Use it for detection:");
        println!(
            "   radj detect -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    pub fn template() -> String {
        let detectors: Vec<String> = radj_core::DEFAULT_DETECTORS
            .iter()
            .map(|kind| format!("\"{}\"", kind.name()))
            .collect();

        format!(
            r#"# radj configuration

[detection]
# Detectors to run, by letter (P, Q, R) or by name
detectors = [{}]

# Ordering of classes with equal counts: "first-seen" or "ascending-code"
tie_break = "{}"

# Keep the original letter case when tokenizing.
# Endings and suffix patterns are lowercase, so capitalized words will not match.
preserve_case = false

[output]
# "text", "json" or "markdown"
format = "text"

# Pretty print JSON output
pretty_json = true
"#,
            detectors.join(", "),
            radj_core::TieBreak::default().name()
        )
    }
}
