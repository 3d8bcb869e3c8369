//! Configuration module

use crate::commands::detect::OutputFormat;
use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Detection configuration
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Detection-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Detectors to run, by letter or name
    pub detectors: Vec<String>,

    /// Ordering of classes with equal counts
    pub tie_break: String,

    /// Keep the original letter case when tokenizing
    pub preserve_case: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            detectors: radj_core::DEFAULT_DETECTORS
                .iter()
                .map(|kind| kind.name().to_string())
                .collect(),
            tie_break: radj_core::TieBreak::default().name().to_string(),
            preserve_case: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Build the core detection configuration
    pub fn detection_config(&self) -> Result<radj_core::Config, CliError> {
        let config = radj_core::Config::builder()
            .detectors(self.detection.detectors.iter().cloned())
            .tie_break(self.detection.tie_break.clone())
            .build()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radj_core::{DetectorKind, TieBreak};

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        let core = config.detection_config().unwrap();

        assert_eq!(core.selection().letters(), "PQR");
        assert_eq!(core.tie_break(), TieBreak::FirstSeen);
        assert!(matches!(config.output.format, OutputFormat::Text));
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_partial_config() {
        let config = CliConfig::parse(
            r#"
[detection]
detectors = ["R", "qualitative-relative"]

[output]
format = "json"
"#,
        )
        .unwrap();

        let core = config.detection_config().unwrap();
        assert_eq!(
            core.selection().kinds(),
            &[DetectorKind::Relative, DetectorKind::QualitativeRelative]
        );
        assert_eq!(config.detection.tie_break, "first-seen");
        assert!(matches!(config.output.format, OutputFormat::Json));
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_empty_config() {
        let config = CliConfig::parse("").unwrap();
        assert_eq!(config.detection.detectors.len(), 3);
    }

    #[test]
    fn test_invalid_toml() {
        let err = CliConfig::parse("[detection\n").unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_unknown_detector_in_config() {
        let config = CliConfig::parse("[detection]\ndetectors = [\"X\"]\n").unwrap();
        let err = config.detection_config().unwrap_err();
        assert!(matches!(err, CliError::DetectionError(_)));
    }

    #[test]
    fn test_unknown_tie_break_in_config() {
        let config = CliConfig::parse("[detection]\ntie_break = \"random\"\n").unwrap();
        let err = config.detection_config().unwrap_err();
        assert!(matches!(err, CliError::ConfigError(_)));
    }
}
