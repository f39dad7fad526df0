//! Indicator configuration validation.
//!
//! Reads the `[indicators]` section. Every key is optional and falls back to
//! the calculator defaults; present keys must describe usable periods.

use crate::domain::error::SigengineError;
use crate::domain::indicator::IndicatorParams;
use crate::ports::config_port::ConfigPort;

pub const SECTION: &str = "indicators";

pub fn validate_indicator_config(config: &dyn ConfigPort) -> Result<(), SigengineError> {
    let defaults = IndicatorParams::default();
    let rsi = validate_period(config, "rsi_period", defaults.rsi_period)?;
    let fast = validate_period(config, "macd_fast", defaults.macd_fast)?;
    let slow = validate_period(config, "macd_slow", defaults.macd_slow)?;
    validate_period(config, "macd_signal", defaults.macd_signal)?;
    let boll = validate_period(config, "bollinger_period", defaults.bollinger_period)?;
    validate_multiplier(config, defaults.bollinger_multiplier)?;

    if fast >= slow {
        return Err(invalid(
            "macd_fast",
            format!("macd_fast ({fast}) must be less than macd_slow ({slow})"),
        ));
    }

    tracing::debug!(rsi, fast, slow, boll, "indicator config validated");
    Ok(())
}

/// Validate `[indicators]` and build the calculator parameters from it.
pub fn indicator_params_from_config(
    config: &dyn ConfigPort,
) -> Result<IndicatorParams, SigengineError> {
    validate_indicator_config(config)?;
    let defaults = IndicatorParams::default();

    Ok(IndicatorParams {
        rsi_period: get_period(config, "rsi_period", defaults.rsi_period),
        macd_fast: get_period(config, "macd_fast", defaults.macd_fast),
        macd_slow: get_period(config, "macd_slow", defaults.macd_slow),
        macd_signal: get_period(config, "macd_signal", defaults.macd_signal),
        bollinger_period: get_period(config, "bollinger_period", defaults.bollinger_period),
        bollinger_multiplier: config.get_double(
            SECTION,
            "bollinger_multiplier",
            defaults.bollinger_multiplier,
        ),
    })
}

fn get_period(config: &dyn ConfigPort, key: &str, default: usize) -> usize {
    config.get_int(SECTION, key, default as i64) as usize
}

fn validate_period(
    config: &dyn ConfigPort,
    key: &str,
    default: usize,
) -> Result<usize, SigengineError> {
    if let Some(raw) = config.get_string(SECTION, key) {
        if raw.trim().parse::<i64>().is_err() {
            return Err(invalid(key, format!("{key} must be an integer, got '{raw}'")));
        }
    }
    let value = config.get_int(SECTION, key, default as i64);
    if value < 1 {
        return Err(invalid(key, format!("{key} must be at least 1")));
    }
    Ok(value as usize)
}

fn validate_multiplier(config: &dyn ConfigPort, default: f64) -> Result<(), SigengineError> {
    let key = "bollinger_multiplier";
    if let Some(raw) = config.get_string(SECTION, key) {
        if raw.trim().parse::<f64>().is_err() {
            return Err(invalid(key, format!("{key} must be a number, got '{raw}'")));
        }
    }
    let value = config.get_double(SECTION, key, default);
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(key, format!("{key} must be positive")));
    }
    Ok(())
}

fn invalid(key: &str, reason: String) -> SigengineError {
    SigengineError::ConfigInvalid {
        section: SECTION.to_string(),
        key: key.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    fn make_config(content: &str) -> FileConfigAdapter {
        FileConfigAdapter::from_string(content).unwrap()
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = make_config("");
        assert!(validate_indicator_config(&config).is_ok());
        let params = indicator_params_from_config(&config).unwrap();
        assert_eq!(params, IndicatorParams::default());
    }

    #[test]
    fn full_config_is_read() {
        let config = make_config(
            r#"
[indicators]
rsi_period = 7
macd_fast = 5
macd_slow = 35
macd_signal = 5
bollinger_period = 10
bollinger_multiplier = 2.5
"#,
        );
        let params = indicator_params_from_config(&config).unwrap();
        assert_eq!(params.rsi_period, 7);
        assert_eq!(params.macd_fast, 5);
        assert_eq!(params.macd_slow, 35);
        assert_eq!(params.macd_signal, 5);
        assert_eq!(params.bollinger_period, 10);
        assert_eq!(params.bollinger_multiplier, 2.5);
    }

    #[test]
    fn zero_period_fails() {
        let config = make_config("[indicators]\nrsi_period = 0\n");
        let err = validate_indicator_config(&config).unwrap_err();
        assert!(matches!(err, SigengineError::ConfigInvalid { key, .. } if key == "rsi_period"));
    }

    #[test]
    fn negative_period_fails() {
        let config = make_config("[indicators]\nbollinger_period = -4\n");
        let err = validate_indicator_config(&config).unwrap_err();
        assert!(
            matches!(err, SigengineError::ConfigInvalid { key, .. } if key == "bollinger_period")
        );
    }

    #[test]
    fn non_numeric_period_fails() {
        let config = make_config("[indicators]\nmacd_signal = nine\n");
        let err = validate_indicator_config(&config).unwrap_err();
        assert!(matches!(err, SigengineError::ConfigInvalid { key, .. } if key == "macd_signal"));
    }

    #[test]
    fn fast_not_below_slow_fails() {
        let config = make_config("[indicators]\nmacd_fast = 26\nmacd_slow = 26\n");
        let err = validate_indicator_config(&config).unwrap_err();
        assert!(matches!(err, SigengineError::ConfigInvalid { key, .. } if key == "macd_fast"));

        let config = make_config("[indicators]\nmacd_fast = 30\n");
        assert!(validate_indicator_config(&config).is_err());
    }

    #[test]
    fn multiplier_must_be_positive() {
        let config = make_config("[indicators]\nbollinger_multiplier = 0\n");
        let err = validate_indicator_config(&config).unwrap_err();
        assert!(
            matches!(err, SigengineError::ConfigInvalid { key, .. } if key == "bollinger_multiplier")
        );

        let config = make_config("[indicators]\nbollinger_multiplier = wide\n");
        assert!(validate_indicator_config(&config).is_err());
    }
}
