#![allow(dead_code)]

use sigengine::domain::error::SigengineError;
pub use sigengine::domain::price::{PricePoint, PriceSeries};
use sigengine::ports::data_port::DataPort;
use std::collections::HashMap;
use std::path::Path;

pub struct MockDataPort {
    pub data: HashMap<String, Vec<PricePoint>>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_points(mut self, name: &str, points: Vec<PricePoint>) -> Self {
        self.data.insert(name.to_string(), points);
        self
    }

    pub fn with_error(mut self, name: &str, reason: &str) -> Self {
        self.errors.insert(name.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn load_series(&self, source: &Path) -> Result<PriceSeries, SigengineError> {
        let key = source.to_string_lossy().to_string();
        if let Some(reason) = self.errors.get(&key) {
            return Err(SigengineError::Data {
                reason: reason.clone(),
            });
        }
        let points = self.data.get(&key).cloned().unwrap_or_default();
        Ok(PriceSeries::new(points)?)
    }
}

pub fn make_series(prices: &[f64]) -> PriceSeries {
    PriceSeries::new(make_points(prices)).unwrap()
}

pub fn make_points(prices: &[f64]) -> Vec<PricePoint> {
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| PricePoint::new(1_000 * i as i64, format!("t{i}"), price, 500.0))
        .collect()
}

/// `count` prices evenly spaced from `start` to `end` inclusive.
pub fn ramp(count: usize, start: f64, end: f64) -> Vec<f64> {
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(|i| start + step * i as f64).collect()
}
