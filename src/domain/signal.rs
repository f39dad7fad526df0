//! Signal synthesis from the latest indicator readings.
//!
//! # Rules
//!
//! - RSI: below 30 buys, above 70 sells, 30 and 70 themselves are neutral
//! - MACD: a histogram sign change since the previous point is a crossover
//!   (full strength scale); otherwise the sign alone gives a momentum read
//!   capped at 50
//! - Bollinger: price position inside the band, below 0.1 buys, above 0.9
//!   sells; a zero-width band is neutral
//!
//! Each rule contributes at most one signal. A rule whose input series is
//! empty is skipped. There is no voting across indicators.

use crate::domain::indicator::{BollingerPoint, IndicatorKind, IndicatorSet, MacdPoint, RsiPoint};
use serde::Serialize;
use std::fmt;

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const BAND_LOW: f64 = 0.1;
pub const BAND_HIGH: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalAction {
    Buy,
    Sell,
    Neutral,
}

impl fmt::Display for SignalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalAction::Buy => write!(f, "buy"),
            SignalAction::Sell => write!(f, "sell"),
            SignalAction::Neutral => write!(f, "neutral"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signal {
    pub indicator: IndicatorKind,
    #[serde(rename = "signal")]
    pub action: SignalAction,
    /// 0..=100
    pub strength: f64,
    pub reason: String,
}

pub fn synthesize_signals(
    rsi: &[RsiPoint],
    macd: &[MacdPoint],
    bollinger: &[BollingerPoint],
) -> Vec<Signal> {
    let mut signals = Vec::with_capacity(3);

    if let Some(latest) = rsi.last() {
        signals.push(rsi_signal(latest.value));
    }
    if let [.., previous, latest] = macd {
        signals.push(macd_signal(previous.histogram, latest.histogram));
    }
    if let Some(latest) = bollinger.last() {
        signals.push(bollinger_signal(latest));
    }

    tracing::debug!(count = signals.len(), "signals synthesized");
    signals
}

pub fn synthesize_from_set(set: &IndicatorSet) -> Vec<Signal> {
    synthesize_signals(&set.rsi, &set.macd, &set.bollinger)
}

fn rsi_signal(rsi: f64) -> Signal {
    let (action, strength, reason) = if rsi < RSI_OVERSOLD {
        (
            SignalAction::Buy,
            ((RSI_OVERSOLD - rsi) * 3.0).min(100.0),
            format!("RSI at {rsi:.1} indicates oversold conditions"),
        )
    } else if rsi > RSI_OVERBOUGHT {
        (
            SignalAction::Sell,
            ((rsi - RSI_OVERBOUGHT) * 3.0).min(100.0),
            format!("RSI at {rsi:.1} indicates overbought conditions"),
        )
    } else {
        (
            SignalAction::Neutral,
            0.0,
            format!("RSI at {rsi:.1} is in neutral territory"),
        )
    };

    Signal {
        indicator: IndicatorKind::Rsi,
        action,
        strength,
        reason,
    }
}

fn macd_signal(previous: f64, latest: f64) -> Signal {
    let magnitude = latest.abs();

    let (action, strength, reason) = if latest > 0.0 && previous <= 0.0 {
        (
            SignalAction::Buy,
            (magnitude * 100.0).min(100.0),
            "MACD histogram crossed above zero (bullish crossover)".to_string(),
        )
    } else if latest < 0.0 && previous >= 0.0 {
        (
            SignalAction::Sell,
            (magnitude * 100.0).min(100.0),
            "MACD histogram crossed below zero (bearish crossover)".to_string(),
        )
    } else if latest > 0.0 {
        (
            SignalAction::Buy,
            (magnitude * 50.0).min(50.0),
            format!("MACD histogram positive at {latest:.4} (bullish momentum)"),
        )
    } else {
        // Deliberate quirk: no neutral here, a flat histogram of exactly 0
        // reads as bearish momentum.
        (
            SignalAction::Sell,
            (magnitude * 50.0).min(50.0),
            format!("MACD histogram non-positive at {latest:.4} (bearish momentum)"),
        )
    };

    Signal {
        indicator: IndicatorKind::Macd,
        action,
        strength,
        reason,
    }
}

fn bollinger_signal(band: &BollingerPoint) -> Signal {
    let Some(position) = band.position() else {
        return Signal {
            indicator: IndicatorKind::Bollinger,
            action: SignalAction::Neutral,
            strength: 0.0,
            reason: "Bollinger bands have zero width (no volatility)".to_string(),
        };
    };

    let pct = position * 100.0;
    let (action, strength, reason) = if position < BAND_LOW {
        (
            SignalAction::Buy,
            ((BAND_LOW - position) * 500.0).min(100.0),
            format!("Price near lower Bollinger band ({pct:.0}% of band width)"),
        )
    } else if position > BAND_HIGH {
        (
            SignalAction::Sell,
            ((position - BAND_HIGH) * 500.0).min(100.0),
            format!("Price near upper Bollinger band ({pct:.0}% of band width)"),
        )
    } else {
        (
            SignalAction::Neutral,
            0.0,
            format!("Price within Bollinger bands ({pct:.0}% of band width)"),
        )
    };

    Signal {
        indicator: IndicatorKind::Bollinger,
        action,
        strength,
        reason,
    }
}
