//! Rough heuristic detector of Russian adjective classes
//!
//! Word-forms of an already tokenized text are tested by three independent
//! detectors, each assigning one class code:
//!
//! - **possessive** (code 1): possessive endings such as `-ов`, `-ин`, `-ья`
//! - **relative** (code 3): a stem followed by a relative-forming suffix
//!   (`-енн-`, `-льн-`, `-ск-`, `-озн-`...) and a short inflection
//! - **qualitative-relative** (code 5): full adjectival endings such as
//!   `-ый`, `-ая`, `-ого`
//!
//! The classifier merges the `(position, class)` pairs of the selected
//! detectors into a frequency report ranked by descending count. Matching is
//! purely orthographic: there is no dictionary, no stemming and no attempt to
//! choose between overlapping classes.
//!
//! # Example
//!
//! ```rust
//! use radj_core::{AdjectiveClass, AdjectiveClassifier};
//!
//! let words = ["синий", "отцов", "деревянная", "стол"];
//! let classifier = AdjectiveClassifier::new(&words);
//!
//! let report = classifier.detect_all();
//! assert_eq!(report.count(AdjectiveClass::Possessive), 2);
//! assert_eq!(report.count(AdjectiveClass::QualitativeRelative), 2);
//! assert_eq!(report.count(AdjectiveClass::Relative), 0);
//!
//! // Unknown detector identifiers are rejected
//! assert!(classifier.detect_by_ids(["P", "X"]).is_err());
//! ```

pub mod api;
pub mod detectors;
pub mod domain;
pub mod error;
pub mod tables;

pub use api::{AdjectiveClassifier, ClassCount, Config, ConfigBuilder, FrequencyReport, TieBreak};
pub use detectors::{Detections, Detector};
pub use domain::{
    AdjectiveClass, ClassSet, Detection, DetectorKind, DetectorSelection, PositionPrediction,
    DEFAULT_DETECTORS,
};
pub use error::{Error, Result};
