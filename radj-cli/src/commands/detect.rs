//! Detect command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{
    JsonFormatter, MarkdownFormatter, OutputFormatter, RunSummary, TextFormatter,
};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use radj_core::AdjectiveClassifier;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the detect command
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: text, or the config file's choice)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Detectors to run, e.g. `PQR`, `R` or `possessive,relative`
    #[arg(short, long, value_name = "DETECTORS")]
    pub detectors: Option<String>,

    /// Ordering of classes with equal counts
    #[arg(long, value_enum)]
    pub tie_break: Option<TieBreakArg>,

    /// Keep the original letter case when tokenizing
    #[arg(long)]
    pub preserve_case: bool,

    /// Also print the classes predicted for every matched word
    #[arg(long)]
    pub positions: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Read input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated code, class and count
    #[default]
    Text,
    /// JSON document with counts and predictions
    Json,
    /// Markdown table
    Markdown,
}

/// Tie-break policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TieBreakArg {
    /// Keep the order in which classes were first detected
    FirstSeen,
    /// Lower class code first
    AscendingCode,
}

impl From<TieBreakArg> for radj_core::TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::FirstSeen => radj_core::TieBreak::FirstSeen,
            TieBreakArg::AscendingCode => radj_core::TieBreak::AscendingCode,
        }
    }
}

impl DetectArgs {
    /// Execute the detect command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting adjective detection");
        log::debug!("Arguments: {:?}", self);

        let config = self.load_config()?;
        let detection = self.detection_config(&config)?;
        let preserve_case = self.preserve_case || config.detection.preserve_case;

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to process", files.len());

        let words = self.read_words(&files, preserve_case)?;
        log::info!("Tokenized {} word-forms", words.len());

        let classifier = AdjectiveClassifier::with_config(&words, detection);
        let report = classifier.detect_all();
        let summary = RunSummary {
            files: files.len(),
            words: words.len(),
            detectors: classifier.config().selection().letters(),
        };

        let format = self.format.unwrap_or(config.output.format);
        let mut formatter = self.create_formatter(format, config.output.pretty_json)?;
        formatter.format_report(&report, &summary)?;

        if self.positions {
            for prediction in classifier.predictions(classifier.config().selection()) {
                formatter.format_prediction(
                    prediction.position,
                    &words[prediction.position],
                    prediction.classes,
                )?;
            }
        }

        formatter.finish()?;
        log::info!(
            "Reported {} class(es) from {} detection(s)",
            report.len(),
            report.total()
        );

        Ok(())
    }

    fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                CliConfig::load(path)
            }
            None => Ok(CliConfig::default()),
        }
    }

    /// Merge command-line overrides into the file configuration
    fn detection_config(&self, config: &CliConfig) -> Result<radj_core::Config> {
        let detectors: Vec<String> = match &self.detectors {
            Some(list) => list
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|id| !id.is_empty())
                .map(String::from)
                .collect(),
            None => config.detection.detectors.clone(),
        };

        let tie_break = match self.tie_break {
            Some(arg) => radj_core::TieBreak::from(arg).name().to_string(),
            None => config.detection.tie_break.clone(),
        };

        let detection = radj_core::Config::builder()
            .detectors(detectors)
            .tie_break(tie_break)
            .build()
            .map_err(CliError::from)?;
        Ok(detection)
    }

    /// Read and tokenize all files, concatenated in file order
    fn read_words(&self, files: &[PathBuf], preserve_case: bool) -> Result<Vec<String>> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let read = |path: &PathBuf| -> Result<Vec<String>> {
            let words = FileReader::read_words(path, preserve_case)?;
            progress.file_completed(&display_name(path));
            Ok(words)
        };

        let per_file: Vec<Vec<String>> = if self.parallel {
            files.par_iter().map(read).collect::<Result<_>>()?
        } else {
            files.iter().map(read).collect::<Result<_>>()?
        };

        progress.finish();
        Ok(per_file.into_iter().flatten().collect())
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout().lock()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()?;
        }

        Ok(())
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
