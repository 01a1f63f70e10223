use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Chart interval a set of indicator readings belongs to.
///
/// Serializes as the canonical token; deserialization also accepts the
/// deprecated aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1m", alias = "1min")]
    OneMinute,
    #[serde(rename = "5m", alias = "5min")]
    FiveMinutes,
    #[serde(rename = "15m", alias = "15min")]
    FifteenMinutes,
    #[serde(rename = "30m", alias = "30min")]
    ThirtyMinutes,
    #[serde(rename = "1h", alias = "1hour")]
    OneHour,
    #[serde(rename = "2h", alias = "2hour")]
    TwoHours,
    #[serde(rename = "4h", alias = "4hour")]
    FourHours,
    #[default]
    #[serde(rename = "1d", alias = "1day")]
    OneDay,
    #[serde(rename = "1w", alias = "1week")]
    OneWeek,
    #[serde(rename = "1mo", alias = "1month")]
    OneMonth,
}

/// Deprecated interval names, kept so older callers keep resolving.
const DEPRECATED_ALIASES: &[(&str, Interval)] = &[
    ("1min", Interval::OneMinute),
    ("5min", Interval::FiveMinutes),
    ("15min", Interval::FifteenMinutes),
    ("30min", Interval::ThirtyMinutes),
    ("1hour", Interval::OneHour),
    ("2hour", Interval::TwoHours),
    ("4hour", Interval::FourHours),
    ("1day", Interval::OneDay),
    ("1week", Interval::OneWeek),
    ("1month", Interval::OneMonth),
];

impl Interval {
    /// Every interval, shortest first.
    pub const ALL: [Interval; 10] = [
        Interval::OneMinute,
        Interval::FiveMinutes,
        Interval::FifteenMinutes,
        Interval::ThirtyMinutes,
        Interval::OneHour,
        Interval::TwoHours,
        Interval::FourHours,
        Interval::OneDay,
        Interval::OneWeek,
        Interval::OneMonth,
    ];

    /// Canonical token for this interval.
    pub fn token(&self) -> &'static str {
        match self {
            Interval::OneMinute => "1m",
            Interval::FiveMinutes => "5m",
            Interval::FifteenMinutes => "15m",
            Interval::ThirtyMinutes => "30m",
            Interval::OneHour => "1h",
            Interval::TwoHours => "2h",
            Interval::FourHours => "4h",
            Interval::OneDay => "1d",
            Interval::OneWeek => "1w",
            Interval::OneMonth => "1mo",
        }
    }

    /// Field-name suffix the scanner expects. Empty for the daily interval.
    pub fn suffix(&self) -> &'static str {
        match self {
            Interval::OneMinute => "1",
            Interval::FiveMinutes => "5",
            Interval::FifteenMinutes => "15",
            Interval::ThirtyMinutes => "30",
            Interval::OneHour => "60",
            Interval::TwoHours => "120",
            Interval::FourHours => "240",
            Interval::OneDay => "",
            Interval::OneWeek => "1W",
            Interval::OneMonth => "1M",
        }
    }

    /// Scanner field name for an indicator on this interval,
    /// e.g. `RSI[1]|60` on 1h or plain `RSI[1]` on 1d.
    pub fn field(&self, base: &str) -> String {
        match self.suffix() {
            "" => base.to_string(),
            suffix => format!("{}|{}", base, suffix),
        }
    }

    /// Parse a canonical token or a deprecated alias.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|i| i.token() == s)
            .or_else(|| {
                DEPRECATED_ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == s)
                    .map(|(_, interval)| *interval)
            })
    }

    /// Resolve an interval string, falling back to the daily interval
    /// when it is not recognized.
    pub fn resolve(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            warn!("Unknown interval {:?}, falling back to {}", s, Interval::OneDay);
            Interval::OneDay
        })
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_parse_canonical() {
        for interval in Interval::ALL {
            assert_eq!(Interval::parse(interval.token()), Some(interval));
        }
    }

    #[test]
    fn test_interval_parse_deprecated_aliases() {
        assert_eq!(Interval::parse("1min"), Some(Interval::OneMinute));
        assert_eq!(Interval::parse("1hour"), Some(Interval::OneHour));
        assert_eq!(Interval::parse("1day"), Some(Interval::OneDay));
        assert_eq!(Interval::parse("1month"), Some(Interval::OneMonth));
        assert_eq!(Interval::parse("3d"), None);
    }

    #[test]
    fn test_every_alias_maps_to_distinct_interval() {
        for interval in Interval::ALL {
            let count = DEPRECATED_ALIASES
                .iter()
                .filter(|(_, i)| *i == interval)
                .count();
            assert_eq!(count, 1, "{} should have exactly one alias", interval);
        }
    }

    #[test]
    fn test_interval_resolve_falls_back_to_daily() {
        assert_eq!(Interval::resolve("bogus"), Interval::OneDay);
        assert_eq!(Interval::resolve(""), Interval::OneDay);
        assert_eq!(Interval::resolve("4h"), Interval::FourHours);
    }

    #[test]
    fn test_interval_field_names() {
        assert_eq!(Interval::OneDay.field("RSI"), "RSI");
        assert_eq!(Interval::OneHour.field("RSI[1]"), "RSI[1]|60");
        assert_eq!(Interval::OneWeek.field("close"), "close|1W");
        assert_eq!(Interval::OneMonth.field("ADX-DI[1]"), "ADX-DI[1]|1M");
    }

    #[test]
    fn test_interval_serialization() {
        assert_eq!(serde_json::to_string(&Interval::OneMonth).unwrap(), "\"1mo\"");
        let parsed: Interval = serde_json::from_str("\"15m\"").unwrap();
        assert_eq!(parsed, Interval::FifteenMinutes);
    }

    #[test]
    fn test_interval_deserializes_deprecated_aliases() {
        for (alias, interval) in DEPRECATED_ALIASES {
            let parsed: Interval = serde_json::from_str(&format!("\"{}\"", alias)).unwrap();
            assert_eq!(parsed, *interval);
            // aliases never leak back out
            assert_eq!(
                serde_json::to_string(&parsed).unwrap(),
                format!("\"{}\"", interval.token())
            );
        }
        assert!(serde_json::from_str::<Interval>("\"3h\"").is_err());
    }
}
