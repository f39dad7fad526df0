//! Price observations and the validated, time-ordered series every
//! indicator consumes.

use crate::domain::error::ValidationError;
use serde::Serialize;
use std::ops::Deref;

/// One observation. `label` is for display only; `volume` is carried
/// through but unused by the indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub timestamp: i64,
    pub label: String,
    pub price: f64,
    pub volume: f64,
}

impl PricePoint {
    pub fn new(timestamp: i64, label: impl Into<String>, price: f64, volume: f64) -> Self {
        Self {
            timestamp,
            label: label.into(),
            price,
            volume,
        }
    }
}

/// An immutable, timestamp-ordered sequence of [`PricePoint`].
///
/// Duplicate timestamps are allowed and each counts as its own sample.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Validate and wrap `points`.
    ///
    /// Rejects non-finite or non-positive prices, non-finite or negative
    /// volumes, and timestamps that go backwards.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, ValidationError> {
        let mut prev_ts: Option<i64> = None;
        for (i, p) in points.iter().enumerate() {
            if !p.price.is_finite() {
                return Err(ValidationError::new(i, "price must be finite"));
            }
            if p.price <= 0.0 {
                return Err(ValidationError::new(
                    i,
                    format!("price must be positive, got {}", p.price),
                ));
            }
            if !p.volume.is_finite() || p.volume < 0.0 {
                return Err(ValidationError::new(
                    i,
                    format!("volume must be finite and non-negative, got {}", p.volume),
                ));
            }
            if let Some(prev) = prev_ts {
                if p.timestamp < prev {
                    return Err(ValidationError::new(
                        i,
                        format!("timestamp {} precedes previous {}", p.timestamp, prev),
                    ));
                }
            }
            prev_ts = Some(p.timestamp);
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Prices in series order.
    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }
}

impl Deref for PriceSeries {
    type Target = [PricePoint];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl TryFrom<Vec<PricePoint>> for PriceSeries {
    type Error = ValidationError;

    fn try_from(points: Vec<PricePoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}
