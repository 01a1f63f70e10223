use std::sync::Arc;
use thiserror::Error;

/// Scan error types.
///
/// Every variant is terminal for the call that produced it. Errors compare
/// equal when their kind and message match; the underlying cause is kept
/// for `Error::source()` only.
#[derive(Error, Debug, Clone)]
pub enum ScanError {
    /// The symbol is not of the form `EXCHANGE:TICKER`.
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Transport failure or non-2xx response from the scanner.
    #[error("Fetch error: {message}")]
    Fetch {
        message: String,
        #[source]
        source: Option<Arc<reqwest::Error>>,
    },

    /// The scanner answered with a body that could not be decoded.
    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: Option<Arc<serde_json::Error>>,
    },

    /// The scanner answered, but with an empty result set.
    #[error("No data: {0}")]
    NoData(String),
}

impl ScanError {
    /// Fetch error without an underlying transport cause.
    pub fn fetch(message: impl Into<String>) -> Self {
        ScanError::Fetch {
            message: message.into(),
            source: None,
        }
    }

    /// Parse error without an underlying decoder cause.
    pub fn parse(message: impl Into<String>) -> Self {
        ScanError::Parse {
            message: message.into(),
            source: None,
        }
    }
}

impl PartialEq for ScanError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ScanError::InvalidSymbol(a), ScanError::InvalidSymbol(b)) => a == b,
            (ScanError::Fetch { message: a, .. }, ScanError::Fetch { message: b, .. }) => a == b,
            (ScanError::Parse { message: a, .. }, ScanError::Parse { message: b, .. }) => a == b,
            (ScanError::NoData(a), ScanError::NoData(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ScanError {}

impl From<reqwest::Error> for ScanError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ScanError::parse(e.to_string())
        } else {
            ScanError::Fetch {
                message: e.to_string(),
                source: Some(Arc::new(e)),
            }
        }
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(e: serde_json::Error) -> Self {
        ScanError::Parse {
            message: e.to_string(),
            source: Some(Arc::new(e)),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
