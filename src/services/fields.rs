//! Scanner field table.
//!
//! Base names are grouped by what they feed in the report. The per-interval
//! column lists are built once and shared for the life of the process.

use crate::types::Interval;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Group of scanner fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    Recommendation,
    Oscillators,
    MovingAverages,
    Pivots,
    Prices,
}

impl FieldGroup {
    pub const ALL: [FieldGroup; 5] = [
        FieldGroup::Recommendation,
        FieldGroup::Oscillators,
        FieldGroup::MovingAverages,
        FieldGroup::Pivots,
        FieldGroup::Prices,
    ];

    /// Base field names in this group.
    pub fn names(&self) -> &'static [&'static str] {
        match self {
            FieldGroup::Recommendation => RECOMMENDATION,
            FieldGroup::Oscillators => OSCILLATORS,
            FieldGroup::MovingAverages => MOVING_AVERAGES,
            FieldGroup::Pivots => PIVOTS,
            FieldGroup::Prices => PRICES,
        }
    }
}

const RECOMMENDATION: &[&str] = &["Recommend.All", "Recommend.Other", "Recommend.MA"];

const OSCILLATORS: &[&str] = &[
    "RSI",
    "RSI[1]",
    "Stoch.K",
    "Stoch.D",
    "Stoch.K[1]",
    "Stoch.D[1]",
    "CCI20",
    "CCI20[1]",
    "ADX",
    "ADX+DI",
    "ADX-DI",
    "ADX+DI[1]",
    "ADX-DI[1]",
    "AO",
    "AO[1]",
    "AO[2]",
    "Mom",
    "Mom[1]",
    "MACD.macd",
    "MACD.signal",
    "Rec.Stoch.RSI",
    "Stoch.RSI.K",
    "Rec.WR",
    "W.R",
    "Rec.BBPower",
    "BBPower",
    "Rec.UO",
    "UO",
];

const MOVING_AVERAGES: &[&str] = &[
    "EMA10",
    "SMA10",
    "EMA20",
    "SMA20",
    "EMA30",
    "SMA30",
    "EMA50",
    "SMA50",
    "EMA100",
    "SMA100",
    "EMA200",
    "SMA200",
    "Rec.Ichimoku",
    "Ichimoku.BLine",
    "Rec.VWMA",
    "VWMA",
    "Rec.HullMA9",
    "HullMA9",
];

const PIVOTS: &[&str] = &[
    "Pivot.M.Classic.S3",
    "Pivot.M.Classic.S2",
    "Pivot.M.Classic.S1",
    "Pivot.M.Classic.Middle",
    "Pivot.M.Classic.R1",
    "Pivot.M.Classic.R2",
    "Pivot.M.Classic.R3",
    "Pivot.M.Fibonacci.S3",
    "Pivot.M.Fibonacci.S2",
    "Pivot.M.Fibonacci.S1",
    "Pivot.M.Fibonacci.Middle",
    "Pivot.M.Fibonacci.R1",
    "Pivot.M.Fibonacci.R2",
    "Pivot.M.Fibonacci.R3",
    "Pivot.M.Camarilla.S3",
    "Pivot.M.Camarilla.S2",
    "Pivot.M.Camarilla.S1",
    "Pivot.M.Camarilla.Middle",
    "Pivot.M.Camarilla.R1",
    "Pivot.M.Camarilla.R2",
    "Pivot.M.Camarilla.R3",
    "Pivot.M.Woodie.S3",
    "Pivot.M.Woodie.S2",
    "Pivot.M.Woodie.S1",
    "Pivot.M.Woodie.Middle",
    "Pivot.M.Woodie.R1",
    "Pivot.M.Woodie.R2",
    "Pivot.M.Woodie.R3",
    "Pivot.M.Demark.S1",
    "Pivot.M.Demark.Middle",
    "Pivot.M.Demark.R1",
];

const PRICES: &[&str] = &[
    "open", "close", "high", "low", "volume", "change", "P.SAR", "BB.lower", "BB.upper",
];

static COLUMNS: OnceLock<HashMap<Interval, Vec<String>>> = OnceLock::new();

/// Every field name to request for an interval, in group order.
pub fn columns(interval: Interval) -> &'static [String] {
    let table = COLUMNS.get_or_init(|| {
        Interval::ALL
            .iter()
            .map(|&i| {
                let names = FieldGroup::ALL
                    .iter()
                    .flat_map(|g| g.names().iter())
                    .map(|base| i.field(base))
                    .collect();
                (i, names)
            })
            .collect()
    });

    // Every interval is inserted above.
    table.get(&interval).map(Vec::as_slice).unwrap_or(&[])
}
