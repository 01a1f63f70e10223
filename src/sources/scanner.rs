//! Market-data scanner client.
//!
//! The scanner answers a POST of `{symbols, columns}` with one row per
//! ticker, whose `d` array holds a value (or null) for each requested column.

use crate::config::Config;
use crate::error::{Result, ScanError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Field values returned by a scanner for one symbol.
///
/// Absent fields read as `0.0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValues {
    values: HashMap<String, f64>,
}

impl FieldValues {
    /// Empty value set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a field, or `0.0` if the scanner did not return it.
    pub fn get(&self, field: &str) -> f64 {
        self.values.get(field).copied().unwrap_or(0.0)
    }

    /// Whether the scanner returned a non-null value for `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Set a field value, replacing any previous one.
    pub fn insert(&mut self, field: impl Into<String>, value: f64) {
        self.values.insert(field.into(), value);
    }

    /// Number of fields with a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no field has a value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Source of raw indicator values.
///
/// `Ok(None)` means the scanner returned an empty result set and knows
/// nothing about the symbol. A returned row whose values are all null is
/// `Ok(Some(_))` with no fields set.
#[async_trait]
pub trait ScannerSource: Send + Sync {
    async fn fetch(&self, symbol: &str, fields: &[String]) -> Result<Option<FieldValues>>;
}

#[async_trait]
impl<T: ScannerSource + ?Sized> ScannerSource for Box<T> {
    async fn fetch(&self, symbol: &str, fields: &[String]) -> Result<Option<FieldValues>> {
        (**self).fetch(symbol, fields).await
    }
}

#[async_trait]
impl<T: ScannerSource + ?Sized> ScannerSource for Arc<T> {
    async fn fetch(&self, symbol: &str, fields: &[String]) -> Result<Option<FieldValues>> {
        (**self).fetch(symbol, fields).await
    }
}

#[derive(Debug, Serialize)]
struct ScanRequest<'a> {
    symbols: ScanTickers<'a>,
    columns: &'a [String],
}

#[derive(Debug, Serialize)]
struct ScanTickers<'a> {
    tickers: [&'a str; 1],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScanResponse {
    #[serde(default)]
    total_count: u64,
    #[serde(default)]
    data: Vec<ScanRow>,
}

#[derive(Debug, Deserialize)]
struct ScanRow {
    s: String,
    d: Vec<Option<f64>>,
}

/// Decode a scan response body, pairing each value with its column.
///
/// Null values are dropped. An empty result set decodes to `None`.
pub fn decode_response(
    symbol: &str,
    columns: &[String],
    body: &str,
) -> Result<Option<FieldValues>> {
    let response: ScanResponse = serde_json::from_str(body)?;

    if response.total_count == 0 {
        return Ok(None);
    }

    let row = response
        .data
        .iter()
        .find(|row| row.s == symbol)
        .or_else(|| response.data.first());

    let Some(row) = row else {
        return Ok(None);
    };

    if row.d.len() != columns.len() {
        warn!(
            "Scanner returned {} values for {} columns ({})",
            row.d.len(),
            columns.len(),
            symbol
        );
    }

    Ok(Some(
        columns
            .iter()
            .zip(row.d.iter())
            .filter_map(|(column, value)| value.map(|v| (column.as_str(), v)))
            .collect(),
    ))
}

/// HTTP scanner client.
#[derive(Clone)]
pub struct ScannerClient {
    client: Client,
    scan_url: String,
}

impl ScannerClient {
    /// Create a new scanner client.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            scan_url: format!(
                "{}/{}/scan",
                config.base_url.trim_end_matches('/'),
                config.screener
            ),
        })
    }

    /// Endpoint requests are posted to.
    pub fn scan_url(&self) -> &str {
        &self.scan_url
    }
}

#[async_trait]
impl ScannerSource for ScannerClient {
    async fn fetch(&self, symbol: &str, fields: &[String]) -> Result<Option<FieldValues>> {
        let request = ScanRequest {
            symbols: ScanTickers { tickers: [symbol] },
            columns: fields,
        };

        debug!("Scanning {} ({} fields) via {}", symbol, fields.len(), self.scan_url);

        let response = self.client.post(&self.scan_url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let snippet: String = text.chars().take(200).collect();
            warn!("Scanner error: {} - {}", status, snippet);
            return Err(ScanError::fetch(format!("scanner returned {}", status)));
        }

        let body = response.text().await?;
        decode_response(symbol, fields, &body)
    }
}
