//! Weighted Moving Average (WMA) indicator.

use crate::indicator::{period_param, source_param, timestamps_of, Indicator};
use crate::indicators::math::wma_series;
use crate::types::{
    Candle, IndicatorCategory, IndicatorConfig, IndicatorResult, OutputSpec, ParamMap, ParamSpec,
};

/// Linearly weighted moving average; the most recent bar carries weight
/// `period`, the oldest weight 1.
pub struct Wma {
    config: IndicatorConfig,
}

impl Default for Wma {
    fn default() -> Self {
        Self {
            config: IndicatorConfig {
                name: "Weighted Moving Average",
                short_name: "WMA",
                category: IndicatorCategory::Overlay,
                description: "Moving average with linearly decaying weights",
                params: vec![
                    ParamSpec::number("period", 20.0, 2.0, 500.0),
                    ParamSpec::choice(
                        "source",
                        "close",
                        &["open", "high", "low", "close", "hlc3", "ohlc4"],
                    ),
                ],
                outputs: vec![OutputSpec::line("WMA", "#9c27b0")],
                panel: None,
            },
        }
    }
}

impl Indicator for Wma {
    fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    fn calculate(&self, candles: &[Candle], params: &ParamMap) -> IndicatorResult {
        let period = period_param(params, "period", 20);
        let prices = source_param(params).extract_series(candles);
        IndicatorResult::new(vec![wma_series(&prices, period)], timestamps_of(candles))
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

    fn params(period: f64) -> ParamMap {
        let mut p = ParamMap::new();
        p.insert("period".to_string(), ParamValue::Number(period));
        p
    }

    #[test]
    fn test_wma_known_value() {
        let wma = Wma::default();
        let candles = create_candles_from_closes(&[1.0, 2.0, 3.0]);
        let result = wma.calculate(&candles, &params(3.0));
        // (1*1 + 2*2 + 3*3) / (1 + 2 + 3) = 14/6
        assert!((result.values[0][2] - 14.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_wma_warm_up() {
        let wma = Wma::default();
        let candles = create_candles_from_closes(&[1.0, 2.0, 3.0, 4.0]);
        let result = wma.calculate(&candles, &params(3.0));
        assert!(result.values[0][0].is_nan());
        assert!(result.values[0][1].is_nan());
        assert!(!result.values[0][2].is_nan());
    }

    #[test]
    fn test_wma_constant_series() {
        let wma = Wma::default();
        let candles = create_candles_from_closes(&[9.0; 15]);
        let result = wma.calculate(&candles, &params(6.0));
        for v in result.values[0].iter().skip(5) {
            assert!((v - 9.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_wma_leans_toward_recent_prices() {
        let wma = Wma::default();
        let sma_like = [10.0, 10.0, 10.0, 10.0, 20.0];
        let candles = create_candles_from_closes(&sma_like);
        let result = wma.calculate(&candles, &params(5.0));
        // Plain mean is 12; WMA weights the jump to 20 harder.
        assert!(result.values[0][4] > 12.0);
    }
}
