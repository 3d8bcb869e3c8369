//! Domain types: adjective classes, detector identifiers and detection records

pub mod class;
pub mod detection;
pub mod selection;

pub use class::{AdjectiveClass, DetectorKind};
pub use detection::{ClassSet, Detection, PositionPrediction};
pub use selection::{DetectorSelection, DEFAULT_DETECTORS};
