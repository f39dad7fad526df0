//! RSI (Relative Strength Index).
//!
//! Uses Wilder's smoothing for average gain/loss calculation:
//! - First average: simple mean of gains/losses over the first n deltas
//! - Subsequent: avg = (prev_avg * (n-1) + current) / n
//!
//! Formula: RSI = 100 - (100 / (1 + RS)), RS = avg_gain / avg_loss.
//! If avg_loss == 0, RS is clamped to 100, so RSI tops out at 100 - 100/101
//! (about 99.01) instead of reaching 100.
//!
//! Warmup: n + 1 prices are needed for the first value.

use crate::domain::indicator::RsiPoint;
use crate::domain::price::PriceSeries;

pub const DEFAULT_PERIOD: usize = 14;

/// RS used when there were no losses in the window.
const ZERO_LOSS_RS: f64 = 100.0;

pub fn compute_rsi(series: &PriceSeries, period: usize) -> Vec<RsiPoint> {
    if period == 0 || series.len() <= period {
        tracing::debug!(
            len = series.len(),
            period,
            "rsi: insufficient data, returning empty"
        );
        return Vec::new();
    }

    let prices = series.prices();
    let mut gains: Vec<f64> = Vec::with_capacity(prices.len() - 1);
    let mut losses: Vec<f64> = Vec::with_capacity(prices.len() - 1);

    for w in prices.windows(2) {
        let change = w[1] - w[0];
        gains.push(if change > 0.0 { change } else { 0.0 });
        losses.push(if change < 0.0 { -change } else { 0.0 });
    }

    let n = period as f64;
    let mut avg_gain = gains[..period].iter().sum::<f64>() / n;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / n;

    let mut values = Vec::with_capacity(series.len() - period);
    values.push(RsiPoint {
        label: series[period].label.clone(),
        value: rsi_from_averages(avg_gain, avg_loss),
    });

    for i in period..gains.len() {
        avg_gain = (avg_gain * (n - 1.0) + gains[i]) / n;
        avg_loss = (avg_loss * (n - 1.0) + losses[i]) / n;
        values.push(RsiPoint {
            label: series[i + 1].label.clone(),
            value: rsi_from_averages(avg_gain, avg_loss),
        });
    }

    tracing::trace!(len = series.len(), period, points = values.len(), "rsi computed");
    values
}

// Deliberate quirk: zero loss clamps RS to 100 instead of reporting RSI 100.
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    let rs = if avg_loss == 0.0 {
        ZERO_LOSS_RS
    } else {
        avg_gain / avg_loss
    };
    100.0 - 100.0 / (1.0 + rs)
}
