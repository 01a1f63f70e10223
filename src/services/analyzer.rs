//! Report assembly.
//!
//! Validates the request, fetches every field for the interval in one call
//! and classifies each indicator into a fresh [`Report`].

use super::{classifier, fields};
use crate::error::{Result, ScanError};
use crate::sources::{FieldValues, ScannerSource};
use crate::types::{
    DemarkLevels, Interval, MovingAverages, Oscillators, PivotLevels, Pivots, Prices,
    Recommendation, Report, Signals, Values,
};
use tracing::{debug, info};

/// Check that a symbol has the `EXCHANGE:TICKER` shape.
pub fn validate_symbol(symbol: &str) -> Result<()> {
    match symbol.split_once(':') {
        Some((exchange, ticker))
            if !exchange.is_empty() && !ticker.is_empty() && !ticker.contains(':') =>
        {
            Ok(())
        }
        _ => Err(ScanError::InvalidSymbol(symbol.to_string())),
    }
}

/// Technical analysis over a scanner source.
pub struct TechnicalAnalysis<S> {
    source: S,
}

impl<S: ScannerSource> TechnicalAnalysis<S> {
    /// Analyzer that reads indicator values from `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying scanner source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch and classify every indicator for `symbol` on `interval`.
    ///
    /// Unknown interval strings fall back to the daily interval.
    pub async fn get(&self, symbol: &str, interval: &str) -> Result<Report> {
        self.get_interval(symbol, Interval::resolve(interval)).await
    }

    /// Same as [`get`](Self::get) with an already-resolved interval.
    pub async fn get_interval(&self, symbol: &str, interval: Interval) -> Result<Report> {
        validate_symbol(symbol)?;

        let columns = fields::columns(interval);
        debug!("Requesting {} fields for {} on {}", columns.len(), symbol, interval);

        let Some(values) = self.source.fetch(symbol, columns).await? else {
            return Err(ScanError::NoData(symbol.to_string()));
        };

        let report = assemble(symbol, interval, &values);
        info!(
            "{} {}: summary {}, oscillators {}, moving averages {}",
            symbol,
            interval,
            report.recommend.global.summary,
            report.recommend.global.oscillators,
            report.recommend.global.moving_averages
        );
        Ok(report)
    }
}

/// Build a report from fetched values. Missing fields read as zero.
pub fn assemble(symbol: &str, interval: Interval, values: &FieldValues) -> Report {
    let v = |base: &str| values.get(&interval.field(base));

    let global = Recommendation {
        summary: v("Recommend.All"),
        oscillators: v("Recommend.Other"),
        moving_averages: v("Recommend.MA"),
    };

    let oscillators = Oscillators {
        rsi: v("RSI"),
        stoch_k: v("Stoch.K"),
        cci: v("CCI20"),
        adx: v("ADX"),
        ao: v("AO"),
        mom: v("Mom"),
        macd: v("MACD.macd"),
        stoch_rsi: v("Stoch.RSI.K"),
        wr: v("W.R"),
        bbp: v("BBPower"),
        uo: v("UO"),
    };

    let moving_averages = MovingAverages {
        ema10: v("EMA10"),
        sma10: v("SMA10"),
        ema20: v("EMA20"),
        sma20: v("SMA20"),
        ema30: v("EMA30"),
        sma30: v("SMA30"),
        ema50: v("EMA50"),
        sma50: v("SMA50"),
        ema100: v("EMA100"),
        sma100: v("SMA100"),
        ema200: v("EMA200"),
        sma200: v("SMA200"),
        ichimoku: v("Ichimoku.BLine"),
        vwma: v("VWMA"),
        hull_ma: v("HullMA9"),
    };

    let prices = Prices {
        open: v("open"),
        close: v("close"),
        high: v("high"),
        low: v("low"),
        volume: v("volume"),
        change: v("change"),
        parabolic_sar: v("P.SAR"),
        bb_lower: v("BB.lower"),
        bb_upper: v("BB.upper"),
    };

    let pivot_levels = |method: &str| {
        let p = |level: &str| v(&format!("Pivot.M.{}.{}", method, level));
        PivotLevels {
            s3: p("S3"),
            s2: p("S2"),
            s1: p("S1"),
            middle: p("Middle"),
            r1: p("R1"),
            r2: p("R2"),
            r3: p("R3"),
        }
    };

    let pivots = Pivots {
        classic: pivot_levels("Classic"),
        fibonacci: pivot_levels("Fibonacci"),
        camarilla: pivot_levels("Camarilla"),
        woodie: pivot_levels("Woodie"),
        demark: DemarkLevels {
            s1: v("Pivot.M.Demark.S1"),
            middle: v("Pivot.M.Demark.Middle"),
            r1: v("Pivot.M.Demark.R1"),
        },
    };

    let close = prices.close;
    let ma = |level: f64| classifier::moving_average(level, close);

    let recommend = Signals {
        global: Recommendation {
            summary: classifier::recommend(global.summary),
            oscillators: classifier::recommend(global.oscillators),
            moving_averages: classifier::recommend(global.moving_averages),
        },
        oscillators: Oscillators {
            rsi: classifier::rsi(oscillators.rsi, v("RSI[1]")),
            stoch_k: classifier::stoch(
                oscillators.stoch_k,
                v("Stoch.D"),
                v("Stoch.K[1]"),
                v("Stoch.D[1]"),
            ),
            cci: classifier::cci20(oscillators.cci, v("CCI20[1]")),
            adx: classifier::adx(
                oscillators.adx,
                v("ADX+DI"),
                v("ADX-DI"),
                v("ADX+DI[1]"),
                v("ADX-DI[1]"),
            ),
            ao: classifier::ao(oscillators.ao, v("AO[1]"), v("AO[2]")),
            mom: classifier::mom(oscillators.mom, v("Mom[1]")),
            macd: classifier::macd(oscillators.macd, v("MACD.signal")),
            stoch_rsi: classifier::simple(v("Rec.Stoch.RSI")),
            wr: classifier::simple(v("Rec.WR")),
            bbp: classifier::simple(v("Rec.BBPower")),
            uo: classifier::simple(v("Rec.UO")),
        },
        moving_averages: MovingAverages {
            ema10: ma(moving_averages.ema10),
            sma10: ma(moving_averages.sma10),
            ema20: ma(moving_averages.ema20),
            sma20: ma(moving_averages.sma20),
            ema30: ma(moving_averages.ema30),
            sma30: ma(moving_averages.sma30),
            ema50: ma(moving_averages.ema50),
            sma50: ma(moving_averages.sma50),
            ema100: ma(moving_averages.ema100),
            sma100: ma(moving_averages.sma100),
            ema200: ma(moving_averages.ema200),
            sma200: ma(moving_averages.sma200),
            ichimoku: classifier::simple(v("Rec.Ichimoku")),
            vwma: classifier::simple(v("Rec.VWMA")),
            hull_ma: classifier::simple(v("Rec.HullMA9")),
        },
    };

    Report {
        symbol: symbol.to_string(),
        interval,
        recommend,
        value: Values {
            global,
            oscillators,
            moving_averages,
            pivots,
            prices,
        },
        timestamp: chrono::Utc::now().timestamp_millis(),
    }
}
