//! Scanner TA - technical-analysis signals from a market-data scanner

pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, ScanError};
pub use services::TechnicalAnalysis;
pub use sources::{FieldValues, ScannerClient, ScannerSource};
pub use types::*;
