use super::{Interval, Signal};
use serde::Serialize;

/// Global recommendation triple. `T` is `Signal` in the signal tree and
/// `f64` (the raw `[-1, 1]` score) in the value tree.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation<T> {
    pub summary: T,
    pub oscillators: T,
    pub moving_averages: T,
}

/// Oscillator group, one slot per indicator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Oscillators<T> {
    /// Relative Strength Index (14).
    pub rsi: T,
    /// Stochastic %K (14, 3, 3).
    pub stoch_k: T,
    /// Commodity Channel Index (20).
    pub cci: T,
    /// Average Directional Index (14).
    pub adx: T,
    /// Awesome Oscillator.
    pub ao: T,
    /// Momentum (10).
    pub mom: T,
    /// MACD level (12, 26).
    pub macd: T,
    /// Stochastic RSI Fast (3, 3, 14, 14).
    pub stoch_rsi: T,
    /// Williams Percent Range (14).
    pub wr: T,
    /// Bull Bear Power.
    pub bbp: T,
    /// Ultimate Oscillator (7, 14, 28).
    pub uo: T,
}

impl<T: Copy> Oscillators<T> {
    /// Named slots in display order.
    pub fn entries(&self) -> [(&'static str, T); 11] {
        [
            ("RSI", self.rsi),
            ("Stoch.K", self.stoch_k),
            ("CCI", self.cci),
            ("ADX", self.adx),
            ("AO", self.ao),
            ("Mom", self.mom),
            ("MACD", self.macd),
            ("Stoch.RSI", self.stoch_rsi),
            ("W%R", self.wr),
            ("BBP", self.bbp),
            ("UO", self.uo),
        ]
    }
}

impl Oscillators<Signal> {
    /// Buy / neutral / sell counts over the eleven oscillators.
    pub fn tally(&self) -> Tally {
        Tally::count(self.entries().iter().map(|(_, s)| *s))
    }
}

/// Moving-average group, one slot per indicator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovingAverages<T> {
    pub ema10: T,
    pub sma10: T,
    pub ema20: T,
    pub sma20: T,
    pub ema30: T,
    pub sma30: T,
    pub ema50: T,
    pub sma50: T,
    pub ema100: T,
    pub sma100: T,
    pub ema200: T,
    pub sma200: T,
    /// Ichimoku Base Line (9, 26, 52, 26).
    pub ichimoku: T,
    /// Volume Weighted Moving Average (20).
    pub vwma: T,
    /// Hull Moving Average (9).
    pub hull_ma: T,
}

impl<T: Copy> MovingAverages<T> {
    /// Named slots in display order.
    pub fn entries(&self) -> [(&'static str, T); 15] {
        [
            ("EMA10", self.ema10),
            ("SMA10", self.sma10),
            ("EMA20", self.ema20),
            ("SMA20", self.sma20),
            ("EMA30", self.ema30),
            ("SMA30", self.sma30),
            ("EMA50", self.ema50),
            ("SMA50", self.sma50),
            ("EMA100", self.ema100),
            ("SMA100", self.sma100),
            ("EMA200", self.ema200),
            ("SMA200", self.sma200),
            ("Ichimoku", self.ichimoku),
            ("VWMA", self.vwma),
            ("HullMA", self.hull_ma),
        ]
    }
}

impl MovingAverages<Signal> {
    /// Buy / neutral / sell counts over the fifteen moving averages.
    pub fn tally(&self) -> Tally {
        Tally::count(self.entries().iter().map(|(_, s)| *s))
    }
}

/// Buy / neutral / sell counts over a group of signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Tally {
    pub buy: usize,
    pub neutral: usize,
    pub sell: usize,
}

impl Tally {
    /// Count signals by direction. Strong signals count with their side.
    pub fn count(signals: impl IntoIterator<Item = Signal>) -> Self {
        signals.into_iter().fold(Tally::default(), |mut t, s| {
            if s.is_buy() {
                t.buy += 1;
            } else if s.is_sell() {
                t.sell += 1;
            } else {
                t.neutral += 1;
            }
            t
        })
    }

    /// Number of signals counted.
    pub fn total(&self) -> usize {
        self.buy + self.neutral + self.sell
    }
}

/// Seven-level pivot set (S3..R3).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PivotLevels {
    pub s3: f64,
    pub s2: f64,
    pub s1: f64,
    pub middle: f64,
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
}

/// DeMark pivots only define one support and one resistance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DemarkLevels {
    pub s1: f64,
    pub middle: f64,
    pub r1: f64,
}

/// Monthly pivot points as computed by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Pivots {
    pub classic: PivotLevels,
    pub fibonacci: PivotLevels,
    pub camarilla: PivotLevels,
    pub woodie: PivotLevels,
    pub demark: DemarkLevels,
}

/// Price fields for the interval's current bar.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prices {
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
    /// Percent change over the bar.
    pub change: f64,
    /// Parabolic SAR.
    pub parabolic_sar: f64,
    pub bb_lower: f64,
    pub bb_upper: f64,
}

/// Classified signals for every indicator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Signals {
    pub global: Recommendation<Signal>,
    pub oscillators: Oscillators<Signal>,
    pub moving_averages: MovingAverages<Signal>,
}

/// Raw readings behind the signals, plus pass-through price and pivot data.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Values {
    pub global: Recommendation<f64>,
    pub oscillators: Oscillators<f64>,
    pub moving_averages: MovingAverages<f64>,
    pub pivots: Pivots,
    pub prices: Prices,
}

/// Technical-analysis report for one symbol on one interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Symbol this report is for, as `EXCHANGE:TICKER`.
    pub symbol: String,
    pub interval: Interval,
    pub recommend: Signals,
    pub value: Values,
    /// Unix timestamp (milliseconds) when assembled.
    pub timestamp: i64,
}
