use serde::{Deserialize, Serialize};
use std::fmt;

/// Five-level trading signal.
///
/// Variants are declared in ascending order so the derived `Ord` matches
/// the numeric value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i8)]
pub enum Signal {
    StrongSell = -2,
    Sell = -1,
    #[default]
    Neutral = 0,
    Buy = 1,
    StrongBuy = 2,
}

impl Signal {
    /// All signals, weakest first.
    pub const ALL: [Signal; 5] = [
        Signal::StrongSell,
        Signal::Sell,
        Signal::Neutral,
        Signal::Buy,
        Signal::StrongBuy,
    ];

    /// Numeric value in `-2..=2`.
    pub fn value(&self) -> i8 {
        *self as i8
    }

    /// Get display label for this signal.
    pub fn label(&self) -> &'static str {
        match self {
            Signal::StrongSell => "Strong Sell",
            Signal::Sell => "Sell",
            Signal::Neutral => "Neutral",
            Signal::Buy => "Buy",
            Signal::StrongBuy => "Strong Buy",
        }
    }

    /// `Buy` or `StrongBuy`.
    pub fn is_buy(&self) -> bool {
        matches!(self, Signal::Buy | Signal::StrongBuy)
    }

    /// `Sell` or `StrongSell`.
    pub fn is_sell(&self) -> bool {
        matches!(self, Signal::Sell | Signal::StrongSell)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Signal::StrongSell => "STRONG_SELL",
            Signal::Sell => "SELL",
            Signal::Neutral => "NEUTRAL",
            Signal::Buy => "BUY",
            Signal::StrongBuy => "STRONG_BUY",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_values() {
        assert_eq!(Signal::StrongSell.value(), -2);
        assert_eq!(Signal::Sell.value(), -1);
        assert_eq!(Signal::Neutral.value(), 0);
        assert_eq!(Signal::Buy.value(), 1);
        assert_eq!(Signal::StrongBuy.value(), 2);
    }

    #[test]
    fn test_signal_order_follows_value() {
        for pair in Signal::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].value() < pair[1].value());
        }
    }

    #[test]
    fn test_signal_direction() {
        assert!(Signal::StrongBuy.is_buy() && Signal::Buy.is_buy());
        assert!(Signal::StrongSell.is_sell() && Signal::Sell.is_sell());
        assert!(!Signal::Neutral.is_buy() && !Signal::Neutral.is_sell());
    }

    #[test]
    fn test_signal_default_is_neutral() {
        assert_eq!(Signal::default(), Signal::Neutral);
    }

    #[test]
    fn test_signal_serialization() {
        assert_eq!(
            serde_json::to_string(&Signal::StrongBuy).unwrap(),
            "\"STRONG_BUY\""
        );
        let parsed: Signal = serde_json::from_str("\"SELL\"").unwrap();
        assert_eq!(parsed, Signal::Sell);
        assert_eq!(Signal::StrongSell.to_string(), "STRONG_SELL");
    }
}
