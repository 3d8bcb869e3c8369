//! Lookup tables for the detectors
//!
//! Tables are built once and are allocation-free during lookup.

pub mod endings;
pub mod russian;

pub use endings::EndingSet;
