//! Indicator classification rules.
//!
//! Each rule maps raw readings to a [`Signal`]. Comparisons are strict, so
//! ties, unmatched combinations and NaN inputs all resolve to `Neutral`.
//! Lagged readings are named with a trailing digit: `rsi1` is `RSI[1]`.

use crate::types::Signal;

/// Classify an aggregate recommendation score in `[-1, 1]`.
pub fn recommend(v: f64) -> Signal {
    match v {
        v if (-1.0..-0.5).contains(&v) => Signal::StrongSell,
        v if (-0.5..-0.1).contains(&v) => Signal::Sell,
        v if v > 0.1 && v <= 0.5 => Signal::Buy,
        v if v > 0.5 && v <= 1.0 => Signal::StrongBuy,
        _ => Signal::Neutral,
    }
}

/// Relative Strength Index (14).
///
/// Buy when oversold and rising, sell when overbought and falling.
pub fn rsi(rsi: f64, rsi1: f64) -> Signal {
    if rsi < 30.0 && rsi1 < rsi {
        Signal::Buy
    } else if rsi > 70.0 && rsi1 > rsi {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}

/// Stochastic %K: a %K/%D crossover inside the oversold or overbought band.
pub fn stoch(k: f64, d: f64, k1: f64, d1: f64) -> Signal {
    if k < 20.0 && d < 20.0 && k > d && k1 < d1 {
        Signal::Buy
    } else if k > 80.0 && d > 80.0 && k < d && k1 > d1 {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}

/// Commodity Channel Index (20).
pub fn cci20(cci: f64, cci1: f64) -> Signal {
    if cci < -100.0 && cci > cci1 {
        Signal::Buy
    } else if cci > 100.0 && cci < cci1 {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}

/// Average Directional Index (14).
///
/// A +DI/-DI crossover between the previous and the current bar, only
/// counted while the trend is strong (ADX above 20).
pub fn adx(adx: f64, plus_di: f64, minus_di: f64, plus_di1: f64, minus_di1: f64) -> Signal {
    if adx > 20.0 && plus_di1 < minus_di1 && plus_di > minus_di {
        Signal::Buy
    } else if adx > 20.0 && plus_di1 > minus_di1 && plus_di < minus_di {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}

/// Awesome Oscillator: zero-line cross or a saucer on the same side.
pub fn ao(ao: f64, ao1: f64, ao2: f64) -> Signal {
    let bullish = (ao > 0.0 && ao1 < 0.0) || (ao > 0.0 && ao1 > 0.0 && ao > ao1 && ao2 > ao1);
    let bearish = (ao < 0.0 && ao1 > 0.0) || (ao < 0.0 && ao1 < 0.0 && ao < ao1 && ao2 < ao1);

    if bullish {
        Signal::Buy
    } else if bearish {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}

/// Momentum (10).
pub fn mom(mom: f64, mom1: f64) -> Signal {
    compare(mom, mom1)
}

/// MACD level against its signal line.
pub fn macd(macd: f64, signal: f64) -> Signal {
    compare(macd, signal)
}

/// Moving average against the close: price above the average is bullish.
pub fn moving_average(ma: f64, close: f64) -> Signal {
    compare(close, ma)
}

/// Fields the scanner already rates as -1, 0 or 1.
pub fn simple(v: f64) -> Signal {
    if v == 1.0 {
        Signal::Buy
    } else if v == -1.0 {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}

/// Buy if `a > b`, sell if `a < b`.
fn compare(a: f64, b: f64) -> Signal {
    if a > b {
        Signal::Buy
    } else if a < b {
        Signal::Sell
    } else {
        Signal::Neutral
    }
}
