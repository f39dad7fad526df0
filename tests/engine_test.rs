//! End-to-end tests for the indicator engine.
//!
//! Tests cover:
//! - Warm-up boundaries for RSI (period + 1) vs Bollinger (period)
//! - MACD output length and alignment
//! - Descending-ramp and flat-series scenarios through the signal synthesizer
//! - Idempotence of every calculator
//! - Rejection of malformed series

mod common;

use approx::assert_relative_eq;
use common::*;
use sigengine::domain::indicator::{
    compute_all_indicators, compute_bollinger, compute_macd, compute_rsi, IndicatorKind,
};
use sigengine::domain::signal::{synthesize_from_set, synthesize_signals, SignalAction};

mod warmup_boundaries {
    use super::*;

    #[test]
    fn rsi_needs_period_plus_one() {
        let at_period = make_series(&ramp(14, 100.0, 110.0));
        assert!(compute_rsi(&at_period, 14).is_empty());

        let one_more = make_series(&ramp(15, 100.0, 110.0));
        let rsi = compute_rsi(&one_more, 14);
        assert_eq!(rsi.len(), 1);
        assert_eq!(rsi[0].label, "t14");
    }

    #[test]
    fn bollinger_needs_period() {
        let short = make_series(&ramp(19, 100.0, 110.0));
        assert!(compute_bollinger(&short, 20, 2.0).is_empty());

        let at_period = make_series(&ramp(20, 100.0, 110.0));
        let bands = compute_bollinger(&at_period, 20, 2.0);
        assert_eq!(bands.len(), 1);
        assert_eq!(bands[0].label, "t19");
    }

    #[test]
    fn macd_length_formula() {
        for len in [0usize, 10, 34, 35, 36, 80] {
            let prices: Vec<f64> = (0..len).map(|i| 100.0 + (i as f64 * 0.5).sin()).collect();
            let macd = compute_macd(&make_series(&prices), 12, 26, 9);
            let expected = if len >= 26 + 9 { len - (26 + 9 - 1) } else { 0 };
            assert_eq!(macd.len(), expected, "len {len}");
        }
    }

    #[test]
    fn macd_first_point_alignment() {
        let prices: Vec<f64> = (0..50).map(|i| 100.0 + i as f64 * 0.1).collect();
        let macd = compute_macd(&make_series(&prices), 12, 26, 9);
        assert_eq!(macd[0].label, "t34");
        assert_eq!(macd.last().unwrap().label, "t49");
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn descending_ramp_triggers_rsi_buy() {
        let series = make_series(&ramp(40, 100.0, 50.0));
        let set = compute_all_indicators(&series);

        let last_rsi = set.rsi.last().unwrap().value;
        assert!(last_rsi < 30.0, "rsi {last_rsi}");

        let signals = synthesize_from_set(&set);
        let rsi_signal = signals
            .iter()
            .find(|s| s.indicator == IndicatorKind::Rsi)
            .unwrap();
        assert_eq!(rsi_signal.action, SignalAction::Buy);
        assert!(rsi_signal.strength > 0.0);
    }

    #[test]
    fn descending_ramp_macd_line_is_negative() {
        let set = compute_all_indicators(&make_series(&ramp(40, 100.0, 50.0)));
        assert_eq!(set.macd.len(), 6);
        assert!(set.macd.iter().all(|p| p.macd < 0.0));
    }

    #[test]
    fn flat_series_has_degenerate_bands() {
        let series = make_series(&[100.0; 40]);
        let set = compute_all_indicators(&series);

        assert_eq!(set.bollinger.len(), 21);
        for band in &set.bollinger {
            assert_eq!(band.upper, 100.0);
            assert_eq!(band.middle, 100.0);
            assert_eq!(band.lower, 100.0);
        }

        let signals = synthesize_from_set(&set);
        let boll = signals
            .iter()
            .find(|s| s.indicator == IndicatorKind::Bollinger)
            .unwrap();
        assert_eq!(boll.action, SignalAction::Neutral);
        assert_eq!(boll.strength, 0.0);
    }

    #[test]
    fn flat_series_at_inexact_price_hits_zero_width_guard() {
        let set = compute_all_indicators(&make_series(&[0.1; 40]));
        let band = set.bollinger.last().unwrap();
        assert_eq!(band.upper, band.lower);
        assert_eq!(band.middle, 0.1);

        let signals = synthesize_from_set(&set);
        let boll = signals
            .iter()
            .find(|s| s.indicator == IndicatorKind::Bollinger)
            .unwrap();
        assert_eq!(boll.action, SignalAction::Neutral);
        assert!(boll.reason.contains("zero width"), "{}", boll.reason);
    }

    #[test]
    fn rising_series_rsi_stays_at_clamp() {
        let set = compute_all_indicators(&make_series(&ramp(40, 50.0, 100.0)));
        for point in &set.rsi {
            assert_relative_eq!(point.value, 100.0 - 100.0 / 101.0, epsilon = 1e-12);
            assert!(point.value < 100.0);
        }

        let signals = synthesize_from_set(&set);
        assert_eq!(signals[0].indicator, IndicatorKind::Rsi);
        assert_eq!(signals[0].action, SignalAction::Sell);
    }

    #[test]
    fn short_series_yields_no_signals() {
        let set = compute_all_indicators(&make_series(&ramp(10, 1.0, 2.0)));
        assert!(set.is_empty());
        assert!(synthesize_signals(&set.rsi, &set.macd, &set.bollinger).is_empty());
    }

    #[test]
    fn only_ready_indicators_emit_signals() {
        // 25 points: RSI and Bollinger warm, MACD still cold
        let set = compute_all_indicators(&make_series(&ramp(25, 100.0, 90.0)));
        let kinds: Vec<IndicatorKind> = synthesize_from_set(&set)
            .iter()
            .map(|s| s.indicator)
            .collect();
        assert_eq!(kinds, vec![IndicatorKind::Rsi, IndicatorKind::Bollinger]);
    }
}

mod purity {
    use super::*;

    #[test]
    fn calculators_are_idempotent() {
        let prices: Vec<f64> = (0..80)
            .map(|i| 100.0 + (i as f64 * 0.37).sin() * 6.0 + i as f64 * 0.05)
            .collect();
        let series = make_series(&prices);
        let snapshot = series.clone();

        let first = compute_all_indicators(&series);
        let second = compute_all_indicators(&series);

        assert_eq!(series, snapshot);
        assert_eq!(first.rsi.len(), second.rsi.len());
        for (a, b) in first.rsi.iter().zip(&second.rsi) {
            assert_eq!(a.value.to_bits(), b.value.to_bits());
        }
        for (a, b) in first.macd.iter().zip(&second.macd) {
            assert_eq!(a.histogram.to_bits(), b.histogram.to_bits());
            assert_eq!(a.signal.to_bits(), b.signal.to_bits());
        }
        for (a, b) in first.bollinger.iter().zip(&second.bollinger) {
            assert_eq!(a.upper.to_bits(), b.upper.to_bits());
            assert_eq!(a.lower.to_bits(), b.lower.to_bits());
        }
        assert_eq!(synthesize_from_set(&first), synthesize_from_set(&second));
    }
}

mod validation {
    use super::*;

    #[test]
    fn nan_price_is_rejected() {
        let mut points = make_points(&[1.0, 2.0, 3.0]);
        points[1].price = f64::NAN;
        let err = PriceSeries::new(points).unwrap_err();
        assert_eq!(err.index, 1);
    }

    #[test]
    fn non_monotonic_timestamps_are_rejected() {
        let mut points = make_points(&[1.0, 2.0, 3.0]);
        points[2].timestamp = 0;
        let err = PriceSeries::new(points).unwrap_err();
        assert_eq!(err.index, 2);
    }
}
