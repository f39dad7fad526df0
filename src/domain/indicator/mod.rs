//! Technical indicator implementations.
//!
//! This module provides the indicator output types and the orchestration
//! entry point:
//! - `RsiPoint`, `MacdPoint`, `BollingerPoint`: one output value aligned to
//!   the label of the price point it was computed at
//! - `IndicatorKind`: indicator identity, used to tag signals
//! - `IndicatorParams`: the periods each calculator runs with
//! - `IndicatorSet`: the three indicator series computed for one price series
//!
//! Every calculator returns an empty vector when the series is shorter than
//! its warm-up window. That is a documented result, not an error.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;

pub use bollinger::compute_bollinger;
pub use ema::compute_ema;
pub use macd::compute_macd;
pub use rsi::compute_rsi;

use crate::domain::price::PriceSeries;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IndicatorKind {
    Rsi,
    Macd,
    Bollinger,
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorKind::Rsi => write!(f, "RSI"),
            IndicatorKind::Macd => write!(f, "MACD"),
            IndicatorKind::Bollinger => write!(f, "Bollinger Bands"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RsiPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacdPoint {
    pub label: String,
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BollingerPoint {
    pub label: String,
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub price: f64,
}

impl BollingerPoint {
    /// Where `price` sits within the band: 0.0 at `lower`, 1.0 at `upper`.
    /// `None` for a zero-width band.
    pub fn position(&self) -> Option<f64> {
        let width = self.upper - self.lower;
        if width == 0.0 {
            None
        } else {
            Some((self.price - self.lower) / width)
        }
    }

    /// Band width relative to the middle band.
    pub fn bandwidth(&self) -> f64 {
        if self.middle == 0.0 {
            0.0
        } else {
            (self.upper - self.lower) / self.middle
        }
    }
}

/// Periods for each calculator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorParams {
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub bollinger_period: usize,
    pub bollinger_multiplier: f64,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            rsi_period: rsi::DEFAULT_PERIOD,
            macd_fast: macd::DEFAULT_FAST,
            macd_slow: macd::DEFAULT_SLOW,
            macd_signal: macd::DEFAULT_SIGNAL,
            bollinger_period: bollinger::DEFAULT_PERIOD,
            bollinger_multiplier: bollinger::DEFAULT_MULTIPLIER,
        }
    }
}

impl fmt::Display for IndicatorParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RSI({}) MACD({},{},{}) BOLLINGER({},{})",
            self.rsi_period,
            self.macd_fast,
            self.macd_slow,
            self.macd_signal,
            self.bollinger_period,
            self.bollinger_multiplier
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndicatorSet {
    pub rsi: Vec<RsiPoint>,
    pub macd: Vec<MacdPoint>,
    pub bollinger: Vec<BollingerPoint>,
}

impl IndicatorSet {
    pub fn is_empty(&self) -> bool {
        self.rsi.is_empty() && self.macd.is_empty() && self.bollinger.is_empty()
    }
}

/// Run all three calculators with default periods.
pub fn compute_all_indicators(series: &PriceSeries) -> IndicatorSet {
    compute_all_with(series, &IndicatorParams::default())
}

/// Run all three calculators independently. No cross-checking is done
/// between the results.
pub fn compute_all_with(series: &PriceSeries, params: &IndicatorParams) -> IndicatorSet {
    IndicatorSet {
        rsi: compute_rsi(series, params.rsi_period),
        macd: compute_macd(
            series,
            params.macd_fast,
            params.macd_slow,
            params.macd_signal,
        ),
        bollinger: compute_bollinger(
            series,
            params.bollinger_period,
            params.bollinger_multiplier,
        ),
    }
}
