//! Average True Range (ATR) indicator.

use crate::indicator::{period_param, timestamps_of, Indicator};
use crate::indicators::math::{true_range_series, wilder_series};
use crate::types::{
    Candle, IndicatorCategory, IndicatorConfig, IndicatorResult, OutputSpec, PanelHints, ParamMap,
    ParamSpec,
};

/// ATR: Wilder-smoothed True Range, where True Range is the largest of
/// high-low, |high - previous close| and |low - previous close|.
pub struct Atr {
    config: IndicatorConfig,
}

impl Default for Atr {
    fn default() -> Self {
        Self {
            config: IndicatorConfig {
                name: "Average True Range",
                short_name: "ATR",
                category: IndicatorCategory::Oscillator,
                description: "Smoothed measure of bar-to-bar price range",
                params: vec![ParamSpec::number("period", 14.0, 2.0, 100.0)],
                outputs: vec![OutputSpec::line("ATR", "#f23645")],
                panel: Some(PanelHints {
                    height: Some(100),
                    reference_lines: Vec::new(),
                    bounds: None,
                }),
            },
        }
    }
}

impl Indicator for Atr {
    fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    fn calculate(&self, candles: &[Candle], params: &ParamMap) -> IndicatorResult {
        let period = period_param(params, "period", 14);
        let tr = true_range_series(candles);
        IndicatorResult::new(vec![wilder_series(&tr, period)], timestamps_of(candles))
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

    fn params(period: f64) -> ParamMap {
        let mut p = ParamMap::new();
        p.insert("period".to_string(), ParamValue::Number(period));
        p
    }

    #[test]
    fn test_atr_warm_up() {
        let atr = Atr::default();
        let candles = create_uptrend_candles(30);
        let result = atr.calculate(&candles, &params(14.0));
        let line = &result.values[0];
        for v in &line[..13] {
            assert!(v.is_nan());
        }
        assert!(!line[13].is_nan());
    }

    #[test]
    fn test_atr_non_negative() {
        let atr = Atr::default();
        let candles = create_uptrend_candles(50);
        let result = atr.calculate(&candles, &params(14.0));
        for v in result.values[0].iter().filter(|v| !v.is_nan()) {
            assert!(*v >= 0.0);
        }
    }

    #[test]
    fn test_atr_constant_range() {
        // Every bar spans exactly 3.0 and gaps 1.5 upward; TR settles at
        // the larger of the two.
        let atr = Atr::default();
        let candles = create_uptrend_candles(60);
        let result = atr.calculate(&candles, &params(14.0));
        let last = result.values[0][59];
        assert!((last - 3.0).abs() < 0.1);
    }

    #[test]
    fn test_atr_flat_market_is_zero() {
        let atr = Atr::default();
        let candles: Vec<Candle> = (0..30)
            .map(|i| Candle {
                time: i as i64 * 60,
                open: 10.0,
                high: 10.0,
                low: 10.0,
                close: 10.0,
                volume: 100.0,
            })
            .collect();
        let result = atr.calculate(&candles, &params(14.0));
        for v in result.values[0].iter().filter(|v| !v.is_nan()) {
            assert!((v - 0.0).abs() < 1e-12);
        }
    }
}
