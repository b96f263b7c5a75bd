//! Exponential Moving Average (EMA) indicator.

use crate::indicator::{period_param, source_param, timestamps_of, Indicator};
use crate::indicators::math::ema_series;
use crate::types::{
    Candle, IndicatorCategory, IndicatorConfig, IndicatorResult, OutputSpec, ParamMap, ParamSpec,
};

/// Exponential moving average, seeded with the SMA of the first full
/// window and weighted by `2 / (period + 1)` thereafter.
pub struct Ema {
    config: IndicatorConfig,
}

impl Default for Ema {
    fn default() -> Self {
        Self {
            config: IndicatorConfig {
                name: "Exponential Moving Average",
                short_name: "EMA",
                category: IndicatorCategory::Overlay,
                description: "Moving average weighted toward recent prices",
                params: vec![
                    ParamSpec::number("period", 20.0, 2.0, 500.0),
                    ParamSpec::choice(
                        "source",
                        "close",
                        &["open", "high", "low", "close", "hlc3", "ohlc4"],
                    ),
                ],
                outputs: vec![OutputSpec::line("EMA", "#ff6d00")],
                panel: None,
            },
        }
    }
}

impl Indicator for Ema {
    fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    fn calculate(&self, candles: &[Candle], params: &ParamMap) -> IndicatorResult {
        let period = period_param(params, "period", 20);
        let prices = source_param(params).extract_series(candles);
        IndicatorResult::new(vec![ema_series(&prices, period)], timestamps_of(candles))
    }
}
