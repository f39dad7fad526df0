//! CSV file price data adapter.
//!
//! Expected header: `timestamp,label,price,volume`. `date` is accepted in
//! place of `timestamp` and `close` in place of `price`; `label` and
//! `volume` are optional. Timestamps may be epoch milliseconds, RFC 3339,
//! or `YYYY-MM-DD`. Rows are kept in file order.

use crate::domain::error::SigengineError;
use crate::domain::price::{PricePoint, PriceSeries};
use crate::ports::data_port::DataPort;
use chrono::{DateTime, NaiveDate};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, source: &Path) -> PathBuf {
        self.base_path.join(source)
    }
}

impl DataPort for CsvAdapter {
    fn load_series(&self, source: &Path) -> Result<PriceSeries, SigengineError> {
        let path = self.csv_path(source);
        let file = fs::File::open(&path).map_err(|e| SigengineError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;
        let series = parse_series(file)?;
        tracing::info!(path = %path.display(), points = series.len(), "loaded price series");
        Ok(series)
    }
}

struct Columns {
    timestamp: usize,
    price: usize,
    label: Option<usize>,
    volume: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, SigengineError> {
        let find = |names: &[&str]| {
            headers
                .iter()
                .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
        };

        let timestamp = find(&["timestamp", "date", "time"]).ok_or_else(|| SigengineError::Data {
            reason: "missing timestamp column".into(),
        })?;
        let price = find(&["price", "close"]).ok_or_else(|| SigengineError::Data {
            reason: "missing price column".into(),
        })?;

        Ok(Self {
            timestamp,
            price,
            label: find(&["label"]),
            volume: find(&["volume"]),
        })
    }
}

/// Parse CSV content into a validated series.
pub fn parse_series<R: Read>(reader: R) -> Result<PriceSeries, SigengineError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers().map_err(|e| SigengineError::Data {
        reason: format!("CSV header error: {}", e),
    })?;
    let cols = Columns::from_headers(headers)?;

    let mut points = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| SigengineError::Data {
            reason: format!("CSV parse error: {}", e),
        })?;
        let line = row + 2;

        let ts_str = record
            .get(cols.timestamp)
            .ok_or_else(|| SigengineError::Data {
                reason: format!("line {line}: missing timestamp"),
            })?
            .trim();
        let timestamp = parse_timestamp(ts_str).ok_or_else(|| SigengineError::Data {
            reason: format!("line {line}: invalid timestamp '{ts_str}'"),
        })?;

        let price_str = record.get(cols.price).unwrap_or("").trim();
        let price: f64 = price_str.parse().map_err(|e| SigengineError::Data {
            reason: format!("line {line}: invalid price '{price_str}': {e}"),
        })?;

        let volume: f64 = match cols.volume.and_then(|i| record.get(i)).map(str::trim) {
            Some(v) if !v.is_empty() => v.parse().map_err(|e| SigengineError::Data {
                reason: format!("line {line}: invalid volume '{v}': {e}"),
            })?,
            _ => 0.0,
        };

        let label = match cols.label.and_then(|i| record.get(i)).map(str::trim) {
            Some(l) if !l.is_empty() => l.to_string(),
            _ => default_label(timestamp),
        };

        points.push(PricePoint {
            timestamp,
            label,
            price,
            volume,
        });
    }

    Ok(PriceSeries::new(points)?)
}

fn parse_timestamp(value: &str) -> Option<i64> {
    if let Ok(ms) = value.parse::<i64>() {
        return Some(ms);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

fn default_label(timestamp_ms: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => timestamp_ms.to_string(),
    }
}
