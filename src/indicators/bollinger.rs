//! Bollinger Bands indicator.

use crate::indicator::{number_param, period_param, source_param, timestamps_of, Indicator};
use crate::indicators::math::{sma_series, stddev_series};
use crate::types::{
    Candle, IndicatorCategory, IndicatorConfig, IndicatorResult, OutputSpec, ParamMap, ParamSpec,
};

/// Bollinger Bands: SMA middle band with upper/lower bands offset by a
/// multiple of the population standard deviation over the same window.
pub struct BollingerBands {
    config: IndicatorConfig,
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self {
            config: IndicatorConfig {
                name: "Bollinger Bands",
                short_name: "BB",
                category: IndicatorCategory::Overlay,
                description: "Volatility bands around a simple moving average",
                params: vec![
                    ParamSpec::number("period", 20.0, 2.0, 200.0),
                    ParamSpec::number("std_dev", 2.0, 0.1, 5.0),
                    ParamSpec::choice(
                        "source",
                        "close",
                        &["open", "high", "low", "close", "hlc3", "ohlc4"],
                    ),
                ],
                outputs: vec![
                    OutputSpec::line("Upper", "#2962ff"),
                    OutputSpec::line("Middle", "#ff6d00"),
                    OutputSpec::line("Lower", "#2962ff"),
                ],
                panel: None,
            },
        }
    }
}

impl Indicator for BollingerBands {
    fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    fn calculate(&self, candles: &[Candle], params: &ParamMap) -> IndicatorResult {
        let period = period_param(params, "period", 20);
        let multiplier = number_param(params, "std_dev", 2.0);
        let prices = source_param(params).extract_series(candles);

        let middle = sma_series(&prices, period);
        let sd = stddev_series(&prices, period);

        let upper: Vec<f64> = middle
            .iter()
            .zip(sd.iter())
            .map(|(m, s)| m + multiplier * s)
            .collect();
        let lower: Vec<f64> = middle
            .iter()
            .zip(sd.iter())
            .map(|(m, s)| m - multiplier * s)
            .collect();

        IndicatorResult::new(vec![upper, middle, lower], timestamps_of(candles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParamValue;

    fn create_candles_from_closes(closes: &[f64]) -> Vec<Candle> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Candle {
                time: 1_700_000_000 + i as i64 * 60,
                open: close,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 1000.0,
            })
            .collect()
    }

    fn params() -> ParamMap {
        let mut p = ParamMap::new();
        p.insert("period".to_string(), ParamValue::Number(20.0));
        p.insert("std_dev".to_string(), ParamValue::Number(2.0));
        p
    }

    #[test]
    fn test_bollinger_band_ordering() {
        let bb = BollingerBands::default();
        let closes: Vec<f64> = (0..60)
            .map(|i| 100.0 + ((i * 7) % 13) as f64 - 6.0)
            .collect();
        let candles = create_candles_from_closes(&closes);
        let result = bb.calculate(&candles, &params());
        let (upper, middle, lower) = (&result.values[0], &result.values[1], &result.values[2]);
        for i in 0..60 {
            if !middle[i].is_nan() {
                assert!(upper[i] >= middle[i]);
                assert!(middle[i] >= lower[i]);
            }
        }
    }

    #[test]
    fn test_bollinger_flat_series_collapses() {
        // Zero variance: all three bands equal the price.
        let bb = BollingerBands::default();
        let candles = create_candles_from_closes(&[50.0; 40]);
        let result = bb.calculate(&candles, &params());
        for i in 19..40 {
            assert!((result.values[0][i] - 50.0).abs() < 1e-12);
            assert!((result.values[1][i] - 50.0).abs() < 1e-12);
            assert!((result.values[2][i] - 50.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_bollinger_warm_up() {
        let bb = BollingerBands::default();
        let candles = create_candles_from_closes(&[50.0; 40]);
        let result = bb.calculate(&candles, &params());
        for line in &result.values {
            for v in &line[..19] {
                assert!(v.is_nan());
            }
            assert!(!line[19].is_nan());
        }
    }

    #[test]
    fn test_bollinger_width_scales_with_multiplier() {
        let bb = BollingerBands::default();
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i % 5) as f64).collect();
        let candles = create_candles_from_closes(&closes);

        let mut narrow = params();
        narrow.insert("std_dev".to_string(), ParamValue::Number(1.0));
        let wide = bb.calculate(&candles, &params());
        let tight = bb.calculate(&candles, &narrow);

        let wide_width = wide.values[0][39] - wide.values[2][39];
        let tight_width = tight.values[0][39] - tight.values[2][39];
        assert!((wide_width - 2.0 * tight_width).abs() < 1e-9);
    }
}
