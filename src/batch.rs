//! Batch calculation surface and preset bundles.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::error::Result;
use crate::registry::IndicatorRegistry;
use crate::types::{Candle, IndicatorResult, ParamMap, ParamValue};

/// Run several indicators over the same series.
///
/// Each entry resolves independently: an unknown type lands as an `Err`
/// value for that key and never prevents the other indicators from
/// completing. Supplied parameters are merged over each indicator's
/// defaults.
pub fn calculate_batch(
    candles: &[Candle],
    requests: &[(String, ParamMap)],
) -> BTreeMap<String, Result<IndicatorResult>> {
    let registry = IndicatorRegistry::global();
    let mut results = BTreeMap::new();

    for (type_name, params) in requests {
        let outcome = registry.create(type_name).map(|indicator| {
            let merged = indicator.merged_params(params);
            indicator.calculate(candles, &merged)
        });
        if let Err(err) = &outcome {
            warn!(indicator = %type_name, error = %err, "batch entry failed");
        }
        results.insert(type_name.clone(), outcome);
    }

    results
}

/// Trading style behind a preset indicator bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TradingStyle {
    /// Very short term: minutes to hours. Momentum-heavy mix.
    Scalping,
    /// Intraday. Balanced mix.
    #[default]
    DayTrading,
    /// Days to weeks. Trend and volume focused.
    SwingTrading,
    /// Weeks to months. Long-term trend focused.
    PositionTrading,
}

impl TradingStyle {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "scalping" | "scalp" => Some(Self::Scalping),
            "day_trading" | "day" | "intraday" => Some(Self::DayTrading),
            "swing_trading" | "swing" => Some(Self::SwingTrading),
            "position_trading" | "position" | "long_term" => Some(Self::PositionTrading),
            _ => None,
        }
    }

    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scalping => "Scalping",
            Self::DayTrading => "Day Trading",
            Self::SwingTrading => "Swing Trading",
            Self::PositionTrading => "Position Trading",
        }
    }

    /// The indicator+parameter bundle for this style.
    pub fn preset(&self) -> Vec<(String, ParamMap)> {
        match self {
            Self::Scalping => vec![
                entry("ema", &[("period", 9.0)]),
                entry("ema", &[("period", 21.0)]),
                entry("rsi", &[("period", 7.0)]),
                entry("stochastic", &[("k_period", 5.0), ("d_period", 3.0), ("smooth", 2.0)]),
                entry("bollinger", &[("period", 20.0)]),
                entry("vwap", &[]),
            ],
            Self::DayTrading => vec![
                entry("sma", &[("period", 20.0)]),
                entry("ema", &[("period", 50.0)]),
                entry("rsi", &[("period", 14.0)]),
                entry("macd", &[]),
                entry("bollinger", &[]),
                entry("vwap", &[]),
                entry("obv", &[]),
            ],
            Self::SwingTrading => vec![
                entry("sma", &[("period", 50.0)]),
                entry("sma", &[("period", 200.0)]),
                entry("macd", &[]),
                entry("adx", &[("period", 14.0)]),
                entry("mfi", &[("period", 14.0)]),
                entry("obv", &[]),
            ],
            Self::PositionTrading => vec![
                entry("sma", &[("period", 200.0)]),
                entry("ichimoku", &[]),
                entry("adx", &[("period", 20.0)]),
                entry("obv", &[]),
                entry("ad", &[]),
            ],
        }
    }
}

fn entry(type_name: &str, params: &[(&str, f64)]) -> (String, ParamMap) {
    let map = params
        .iter()
        .map(|&(name, value)| (name.to_string(), ParamValue::Number(value)))
        .collect();
    (type_name.to_string(), map)
}

/// Run a style's preset bundle through [`calculate_batch`].
///
/// Duplicate types in a bundle (e.g. two SMA periods) keep the last
/// occurrence, matching the map-shaped return.
pub fn calculate_preset(
    candles: &[Candle],
    style: TradingStyle,
) -> BTreeMap<String, Result<IndicatorResult>> {
    calculate_batch(candles, &style.preset())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_candles(count: usize) -> Vec<Candle> {
        (0..count)
            .map(|i| {
                let base = 100.0 + i as f64 * 0.5;
                Candle {
                    time: 1_700_000_000 + i as i64 * 60,
                    open: base,
                    high: base + 2.0,
                    low: base - 1.0,
                    close: base + 1.0,
                    volume: 1000.0,
                }
            })
            .collect()
    }

    #[test]
    fn test_batch_mixed_known_and_unknown() {
        let candles = create_candles(60);
        let requests = vec![
            ("sma".to_string(), ParamMap::new()),
            ("NotARealType".to_string(), ParamMap::new()),
            ("rsi".to_string(), ParamMap::new()),
        ];
        let results = calculate_batch(&candles, &requests);
        assert_eq!(results.len(), 3);
        assert!(results["sma"].is_ok());
        assert!(results["rsi"].is_ok());
        assert!(results["NotARealType"].is_err());
    }

    #[test]
    fn test_batch_results_have_input_length() {
        let candles = create_candles(40);
        let requests = vec![("macd".to_string(), ParamMap::new())];
        let results = calculate_batch(&candles, &requests);
        let macd = results["macd"].as_ref().unwrap();
        for line in &macd.values {
            assert_eq!(line.len(), 40);
        }
    }

    #[test]
    fn test_trading_style_from_str() {
        assert_eq!(TradingStyle::from_str("swing"), Some(TradingStyle::SwingTrading));
        assert_eq!(TradingStyle::from_str("DAY"), Some(TradingStyle::DayTrading));
        assert_eq!(TradingStyle::from_str("hodl"), None);
    }

    #[test]
    fn test_presets_reference_registered_types() {
        let registry = IndicatorRegistry::global();
        for style in [
            TradingStyle::Scalping,
            TradingStyle::DayTrading,
            TradingStyle::SwingTrading,
            TradingStyle::PositionTrading,
        ] {
            for (type_name, params) in style.preset() {
                assert!(registry.has(&type_name), "{} missing", type_name);
                let indicator = registry.create(&type_name).unwrap();
                assert!(indicator.validate(&indicator.merged_params(&params)).valid);
            }
        }
    }

    #[test]
    fn test_calculate_preset_all_ok() {
        let candles = create_candles(250);
        let results = calculate_preset(&candles, TradingStyle::DayTrading);
        for (type_name, outcome) in &results {
            assert!(outcome.is_ok(), "{} failed", type_name);
        }
    }
}
