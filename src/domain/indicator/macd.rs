//! MACD (Moving Average Convergence Divergence).
//!
//! MACD Line = EMA(fast) - EMA(slow), with the longer fast EMA shifted by
//! (slow - fast) so both sides refer to the same price.
//! Signal Line = EMA(signal) of the MACD Line
//! Histogram = MACD Line - Signal Line
//!
//! Default parameters: fast=12, slow=26, signal=9
//! Output: `len - (slow + signal - 1)` points, the first aligned to
//! `series[slow + signal - 1]`.

use crate::domain::indicator::{compute_ema, MacdPoint};
use crate::domain::price::PriceSeries;

pub const DEFAULT_FAST: usize = 12;
pub const DEFAULT_SLOW: usize = 26;
pub const DEFAULT_SIGNAL: usize = 9;

pub fn compute_macd(
    series: &PriceSeries,
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> Vec<MacdPoint> {
    if fast == 0 || slow == 0 || signal_period == 0 || fast > slow {
        tracing::debug!(fast, slow, signal_period, "macd: unusable periods, returning empty");
        return Vec::new();
    }
    let Some(required) = slow.checked_add(signal_period) else {
        tracing::debug!(slow, signal_period, "macd: periods overflow, returning empty");
        return Vec::new();
    };
    if series.len() < required {
        tracing::debug!(
            len = series.len(),
            required,
            "macd: insufficient data, returning empty"
        );
        return Vec::new();
    }

    let prices = series.prices();
    let fast_ema = compute_ema(&prices, fast);
    let slow_ema = compute_ema(&prices, slow);

    // macd_line[i] refers to series[i + slow - 1]
    let offset = slow - fast;
    let macd_line: Vec<f64> = slow_ema
        .iter()
        .enumerate()
        .map(|(i, slow_v)| fast_ema[i + offset] - slow_v)
        .collect();

    // signal_line[j] pairs with macd_line[j + signal_period - 1]
    let signal_line = compute_ema(&macd_line, signal_period);

    // The seed entry of the signal line would sit at series[slow + signal - 2];
    // output starts one step later so it has exactly len - (slow + signal - 1)
    // points, each labelled with the price it was computed from.
    let first = slow + signal_period - 1;
    let mut values = Vec::with_capacity(series.len() - first);
    for (k, point) in series[first..].iter().enumerate() {
        let j = k + 1;
        let macd = macd_line[j + signal_period - 1];
        let signal = signal_line[j];
        values.push(MacdPoint {
            label: point.label.clone(),
            macd,
            signal,
            histogram: macd - signal,
        });
    }

    tracing::trace!(
        len = series.len(),
        fast,
        slow,
        signal_period,
        points = values.len(),
        "macd computed"
    );
    values
}

pub fn compute_macd_default(series: &PriceSeries) -> Vec<MacdPoint> {
    compute_macd(series, DEFAULT_FAST, DEFAULT_SLOW, DEFAULT_SIGNAL)
}
