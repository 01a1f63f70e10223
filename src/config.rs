use std::env;

const DEFAULT_BASE_URL: &str = "https://scanner.tradingview.com";
const DEFAULT_SCREENER: &str = "crypto";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SYMBOL: &str = "BINANCE:BTCUSDT";
const DEFAULT_INTERVAL: &str = "1d";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Scanner base URL, without the screener path.
    pub base_url: String,
    /// Screener market segment (e.g. "crypto", "america", "forex").
    pub screener: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User agent sent with scanner requests.
    pub user_agent: String,
    /// Symbol used when none is given on the command line.
    pub symbol: String,
    /// Interval used when none is given on the command line.
    pub interval: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            screener: DEFAULT_SCREENER.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("scanner-ta/{}", env!("CARGO_PKG_VERSION")),
            symbol: DEFAULT_SYMBOL.to_string(),
            interval: DEFAULT_INTERVAL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup. Unset or
    /// unparseable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            base_url: lookup("SCANNER_BASE_URL").unwrap_or(defaults.base_url),
            screener: lookup("SCANNER_SCREENER").unwrap_or(defaults.screener),
            timeout_secs: lookup("SCANNER_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.timeout_secs),
            user_agent: lookup("SCANNER_USER_AGENT").unwrap_or(defaults.user_agent),
            symbol: lookup("SCANNER_SYMBOL").unwrap_or(defaults.symbol),
            interval: lookup("SCANNER_INTERVAL").unwrap_or(defaults.interval),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.base_url, "https://scanner.tradingview.com");
        assert_eq!(config.screener, "crypto");
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.symbol, "BINANCE:BTCUSDT");
        assert_eq!(config.interval, "1d");
        assert!(config.user_agent.starts_with("scanner-ta/"));
    }

    #[test]
    fn test_config_overrides() {
        let vars: HashMap<&str, &str> = [
            ("SCANNER_SCREENER", "america"),
            ("SCANNER_TIMEOUT_SECS", "3"),
            ("SCANNER_SYMBOL", "NASDAQ:AAPL"),
        ]
        .into_iter()
        .collect();
        let config = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.screener, "america");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.symbol, "NASDAQ:AAPL");
        assert_eq!(config.base_url, "https://scanner.tradingview.com");
    }

    #[test]
    fn test_config_bad_timeout_keeps_default() {
        let config = Config::from_lookup(|k| {
            (k == "SCANNER_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert_eq!(config.timeout_secs, 10);
    }
}
