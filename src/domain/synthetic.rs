//! Deterministic synthetic price series.
//!
//! Points are one minute apart starting at a fixed epoch; labels are the
//! UTC `HH:MM` of each timestamp.

use crate::domain::price::{PricePoint, PriceSeries};
use chrono::DateTime;
use std::f64::consts::TAU;

/// 2024-01-01T00:00:00Z in epoch milliseconds.
pub const BASE_TIMESTAMP_MS: i64 = 1_704_067_200_000;
pub const STEP_MS: i64 = 60_000;
const DEFAULT_VOLUME: f64 = 1_000.0;

pub fn label_for(timestamp_ms: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => timestamp_ms.to_string(),
    }
}

fn build(prices: impl Iterator<Item = f64>) -> Vec<PricePoint> {
    prices
        .enumerate()
        .map(|(i, price)| {
            let ts = BASE_TIMESTAMP_MS + i as i64 * STEP_MS;
            PricePoint::new(ts, label_for(ts), price, DEFAULT_VOLUME)
        })
        .collect()
}

/// Evenly spaced prices from `start` to `end` inclusive.
pub fn linear_ramp(count: usize, start: f64, end: f64) -> Vec<PricePoint> {
    let step = if count > 1 {
        (end - start) / (count - 1) as f64
    } else {
        0.0
    };
    build((0..count).map(move |i| start + step * i as f64))
}

pub fn flat(count: usize, price: f64) -> Vec<PricePoint> {
    build(std::iter::repeat_n(price, count))
}

/// `base + amplitude * sin(2π·i/period)`.
pub fn sine_wave(count: usize, base: f64, amplitude: f64, period: usize) -> Vec<PricePoint> {
    let period = period.max(1) as f64;
    build((0..count).map(move |i| base + amplitude * (TAU * i as f64 / period).sin()))
}

/// Convenience for callers that want a validated series directly.
pub fn into_series(points: Vec<PricePoint>) -> Result<PriceSeries, crate::domain::error::ValidationError> {
    PriceSeries::new(points)
}
