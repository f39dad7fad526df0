//! Analysis report assembled from one engine run.

use crate::domain::indicator::{
    BollingerPoint, IndicatorParams, IndicatorSet, MacdPoint, RsiPoint,
};
use crate::domain::price::PriceSeries;
use crate::domain::signal::Signal;
use serde::Serialize;

/// The last value of every indicator, plus the last price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestReading {
    pub label: String,
    pub price: f64,
    pub rsi: Option<RsiPoint>,
    pub macd: Option<MacdPoint>,
    pub bollinger: Option<BollingerPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub points: usize,
    pub params: IndicatorParams,
    pub latest: Option<LatestReading>,
    pub indicators: IndicatorSet,
    pub signals: Vec<Signal>,
}

impl AnalysisReport {
    pub fn new(
        series: &PriceSeries,
        params: IndicatorParams,
        indicators: IndicatorSet,
        signals: Vec<Signal>,
    ) -> Self {
        let latest = series.last().map(|p| LatestReading {
            label: p.label.clone(),
            price: p.price,
            rsi: indicators.rsi.last().cloned(),
            macd: indicators.macd.last().cloned(),
            bollinger: indicators.bollinger.last().cloned(),
        });

        Self {
            points: series.len(),
            params,
            latest,
            indicators,
            signals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::indicator::compute_all_indicators;
    use crate::domain::signal::synthesize_from_set;
    use crate::domain::synthetic;

    #[test]
    fn report_collects_latest_values() {
        let series = synthetic::into_series(synthetic::sine_wave(60, 100.0, 5.0, 16)).unwrap();
        let indicators = compute_all_indicators(&series);
        let signals = synthesize_from_set(&indicators);
        let report = AnalysisReport::new(&series, IndicatorParams::default(), indicators, signals);

        assert_eq!(report.points, 60);
        let latest = report.latest.as_ref().unwrap();
        assert_eq!(latest.label, series.last().unwrap().label);
        assert_eq!(latest.rsi.as_ref().unwrap().label, latest.label);
        assert_eq!(latest.macd.as_ref().unwrap().label, latest.label);
        assert_eq!(latest.bollinger.as_ref().unwrap().label, latest.label);
        assert_eq!(report.signals.len(), 3);
    }

    #[test]
    fn report_for_empty_series() {
        let series = PriceSeries::default();
        let report = AnalysisReport::new(
            &series,
            IndicatorParams::default(),
            IndicatorSet::default(),
            Vec::new(),
        );
        assert_eq!(report.points, 0);
        assert!(report.latest.is_none());
    }
}
