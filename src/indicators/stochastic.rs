//! Stochastic Oscillator indicator.

use crate::indicator::{period_param, timestamps_of, Indicator};
use crate::indicators::math::{highest_series, lowest_series, sma_series};
use crate::types::{
    Candle, IndicatorCategory, IndicatorConfig, IndicatorResult, OutputSpec, PanelHints, ParamMap,
    ParamSpec, ResultMetadata,
};

/// Stochastic oscillator: close position within the recent high-low range,
/// smoothed into %K, with %D as an SMA of %K. A zero range reads as 50.
pub struct Stochastic {
    config: IndicatorConfig,
}

impl Default for Stochastic {
    fn default() -> Self {
        Self {
            config: IndicatorConfig {
                name: "Stochastic Oscillator",
                short_name: "STOCH",
                category: IndicatorCategory::Oscillator,
                description: "Close position within the recent trading range",
                params: vec![
                    ParamSpec::number("k_period", 14.0, 2.0, 100.0),
                    ParamSpec::number("d_period", 3.0, 1.0, 50.0),
                    ParamSpec::number("smooth", 3.0, 1.0, 50.0),
                ],
                outputs: vec![
                    OutputSpec::line("%K", "#2962ff"),
                    OutputSpec::line("%D", "#ff6d00"),
                ],
                panel: Some(PanelHints {
                    height: Some(120),
                    reference_lines: vec![80.0, 20.0],
                    bounds: Some((0.0, 100.0)),
                }),
            },
        }
    }
}

impl Indicator for Stochastic {
    fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    fn calculate(&self, candles: &[Candle], params: &ParamMap) -> IndicatorResult {
        let k_period = period_param(params, "k_period", 14);
        let d_period = period_param(params, "d_period", 3);
        let smooth = period_param(params, "smooth", 3);

        let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
        let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();
        let highest = highest_series(&highs, k_period);
        let lowest = lowest_series(&lows, k_period);

        let raw_k: Vec<f64> = candles
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let (hh, ll) = (highest[i], lowest[i]);
                if hh.is_nan() || ll.is_nan() || c.close.is_nan() {
                    f64::NAN
                } else if hh == ll {
                    50.0
                } else {
                    (c.close - ll) / (hh - ll) * 100.0
                }
            })
            .collect();

        let k = sma_series(&raw_k, smooth);
        let d = sma_series(&k, d_period);

        IndicatorResult::new(vec![k, d], timestamps_of(candles))
            .with_metadata(ResultMetadata::with_levels(80.0, 20.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParamValue;

    fn create_uptrend_candles(count: usize) -> Vec<Candle> {
        (0..count)
            .map(|i| {
                let base = 100.0 + i as f64 * 1.5;
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

    fn create_flat_candles(count: usize) -> Vec<Candle> {
        (0..count)
            .map(|i| Candle {
                time: 1_700_000_000 + i as i64 * 60,
                open: 50.0,
                high: 50.0,
                low: 50.0,
                close: 50.0,
                volume: 1000.0,
            })
            .collect()
    }

    fn params() -> ParamMap {
        let mut p = ParamMap::new();
        p.insert("k_period".to_string(), ParamValue::Number(14.0));
        p.insert("d_period".to_string(), ParamValue::Number(3.0));
        p.insert("smooth".to_string(), ParamValue::Number(3.0));
        p
    }

    #[test]
    fn test_stochastic_two_lines_full_length() {
        let stoch = Stochastic::default();
        let candles = create_uptrend_candles(40);
        let result = stoch.calculate(&candles, &params());
        assert_eq!(result.values.len(), 2);
        assert_eq!(result.values[0].len(), 40);
        assert_eq!(result.values[1].len(), 40);
    }

    #[test]
    fn test_stochastic_warm_up_indices() {
        let stoch = Stochastic::default();
        let candles = create_uptrend_candles(40);
        let result = stoch.calculate(&candles, &params());
        // %K: k_period + smooth - 2 = 15 NaN bars; %D adds d_period - 1.
        let k = &result.values[0];
        let d = &result.values[1];
        assert!(k[14].is_nan());
        assert!(!k[15].is_nan());
        assert!(d[16].is_nan());
        assert!(!d[17].is_nan());
    }

    #[test]
    fn test_stochastic_range() {
        let stoch = Stochastic::default();
        let candles = create_uptrend_candles(60);
        let result = stoch.calculate(&candles, &params());
        for line in &result.values {
            for v in line.iter().filter(|v| !v.is_nan()) {
                assert!((0.0..=100.0).contains(v));
            }
        }
    }

    #[test]
    fn test_stochastic_uptrend_reads_high() {
        let stoch = Stochastic::default();
        let candles = create_uptrend_candles(60);
        let result = stoch.calculate(&candles, &params());
        assert!(result.values[0][59] > 50.0);
    }

    #[test]
    fn test_stochastic_zero_range_neutral() {
        let stoch = Stochastic::default();
        let candles = create_flat_candles(40);
        let result = stoch.calculate(&candles, &params());
        for v in result.values[0].iter().filter(|v| !v.is_nan()) {
            assert!((v - 50.0).abs() < 1e-12);
        }
    }
}
