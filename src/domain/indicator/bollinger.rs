//! Bollinger Bands indicator.
//!
//! Bollinger Bands consist of:
//! - Middle: Simple Moving Average (SMA) over n periods
//! - Upper: Middle + (multiplier × StdDev)
//! - Lower: Middle - (multiplier × StdDev)
//!
//! Where StdDev is population standard deviation (divides by N, not N-1).
//!
//! Default parameters: period=20, multiplier=2.0
//! Output: one point per window, `len - period + 1` points.

use crate::domain::indicator::BollingerPoint;
use crate::domain::price::PriceSeries;

pub const DEFAULT_PERIOD: usize = 20;
pub const DEFAULT_MULTIPLIER: f64 = 2.0;

pub fn compute_bollinger(
    series: &PriceSeries,
    period: usize,
    multiplier: f64,
) -> Vec<BollingerPoint> {
    if period == 0 || series.len() < period {
        tracing::debug!(
            len = series.len(),
            period,
            "bollinger: insufficient data, returning empty"
        );
        return Vec::new();
    }

    let n = period as f64;
    let mut values = Vec::with_capacity(series.len() - period + 1);

    for window in series.windows(period) {
        // Mean taken relative to the first price so a flat window is exact.
        let anchor = window[0].price;
        let middle = anchor + window.iter().map(|p| p.price - anchor).sum::<f64>() / n;

        let variance = window
            .iter()
            .map(|p| {
                let diff = p.price - middle;
                diff * diff
            })
            .sum::<f64>()
            / n;

        let width = multiplier * variance.sqrt();
        let current = &window[period - 1];

        values.push(BollingerPoint {
            label: current.label.clone(),
            upper: middle + width,
            middle,
            lower: middle - width,
            price: current.price,
        });
    }

    tracing::trace!(
        len = series.len(),
        period,
        multiplier,
        points = values.len(),
        "bollinger computed"
    );
    values
}
