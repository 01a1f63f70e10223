pub mod scanner;

pub use scanner::{FieldValues, ScannerClient, ScannerSource};
