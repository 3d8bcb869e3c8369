//! Public API for adjective detection

mod classifier;
mod config;
mod report;

pub use classifier::AdjectiveClassifier;
pub use config::{Config, ConfigBuilder, TieBreak};
pub use report::{ClassCount, FrequencyReport};
