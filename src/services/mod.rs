//! Signal classification and report assembly.

pub mod analyzer;
pub mod classifier;
pub mod fields;

pub use analyzer::{assemble, validate_symbol, TechnicalAnalysis};
pub use fields::FieldGroup;
