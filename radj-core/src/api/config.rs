//! Configuration API for adjective detection

use std::fmt;
use std::str::FromStr;

use crate::domain::DetectorSelection;
use crate::error::{Error, Result};

/// Ordering of classes with equal counts in a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Classes keep the order in which they were first detected
    #[default]
    FirstSeen,
    /// Lower class code first
    AscendingCode,
}

impl TieBreak {
    pub fn name(&self) -> &'static str {
        match self {
            TieBreak::FirstSeen => "first-seen",
            TieBreak::AscendingCode => "ascending-code",
        }
    }
}

impl FromStr for TieBreak {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "first-seen" | "first_seen" => Ok(TieBreak::FirstSeen),
            "ascending-code" | "ascending_code" => Ok(TieBreak::AscendingCode),
            other => Err(Error::Configuration(format!(
                "unknown tie-break policy: {other}"
            ))),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Detection configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(crate) selection: DetectorSelection,
    pub(crate) tie_break: TieBreak,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Detectors run by default
    pub fn selection(&self) -> &DetectorSelection {
        &self.selection
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    detectors: Option<Vec<String>>,
    tie_break: Option<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the detectors by identifier (`P`, `relative`, ...)
    pub fn detectors<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.detectors = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Set the tie-break policy by name
    pub fn tie_break(mut self, policy: impl Into<String>) -> Self {
        self.tie_break = Some(policy.into());
        self
    }

    /// Validate identifiers and build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(ids) = self.detectors {
            config.selection = DetectorSelection::parse(ids)?;
        }

        if let Some(policy) = self.tie_break {
            config.tie_break = policy.parse()?;
        }

        Ok(config)
    }
}
