//! Simple Moving Average (SMA) indicator.

use crate::indicator::{period_param, source_param, timestamps_of, Indicator};
use crate::indicators::math::sma_series;
use crate::types::{
    Candle, IndicatorCategory, IndicatorConfig, IndicatorResult, OutputSpec, ParamMap, ParamSpec,
};

/// Simple moving average: arithmetic mean of the last `period` source
/// values.
pub struct Sma {
    config: IndicatorConfig,
}

impl Default for Sma {
    fn default() -> Self {
        Self {
            config: IndicatorConfig {
                name: "Simple Moving Average",
                short_name: "SMA",
                category: IndicatorCategory::Overlay,
                description: "Arithmetic mean of the last N prices",
                params: vec![
                    ParamSpec::number("period", 20.0, 2.0, 500.0),
                    ParamSpec::choice(
                        "source",
                        "close",
                        &["open", "high", "low", "close", "hlc3", "ohlc4"],
                    ),
                ],
                outputs: vec![OutputSpec::line("SMA", "#2962ff")],
                panel: None,
            },
        }
    }
}

impl Indicator for Sma {
    fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    fn calculate(&self, candles: &[Candle], params: &ParamMap) -> IndicatorResult {
        let period = period_param(params, "period", 20);
        let prices = source_param(params).extract_series(candles);
        IndicatorResult::new(vec![sma_series(&prices, period)], timestamps_of(candles))
    }
}
