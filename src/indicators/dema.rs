//! Double Exponential Moving Average (DEMA) indicator.

use crate::indicator::{period_param, source_param, timestamps_of, Indicator};
use crate::indicators::math::ema_series;
use crate::types::{
    Candle, IndicatorCategory, IndicatorConfig, IndicatorResult, OutputSpec, ParamMap, ParamSpec,
};

/// Double EMA: `2 * EMA(price) - EMA(EMA(price))`, which reduces the lag
/// of a plain EMA of the same period.
pub struct Dema {
    config: IndicatorConfig,
}

impl Default for Dema {
    fn default() -> Self {
        Self {
            config: IndicatorConfig {
                name: "Double Exponential Moving Average",
                short_name: "DEMA",
                category: IndicatorCategory::Overlay,
                description: "Lag-reduced double exponential moving average",
                params: vec![
                    ParamSpec::number("period", 20.0, 2.0, 500.0),
                    ParamSpec::choice(
                        "source",
                        "close",
                        &["open", "high", "low", "close", "hlc3", "ohlc4"],
                    ),
                ],
                outputs: vec![OutputSpec::line("DEMA", "#089981")],
                panel: None,
            },
        }
    }
}

impl Indicator for Dema {
    fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    fn calculate(&self, candles: &[Candle], params: &ParamMap) -> IndicatorResult {
        let period = period_param(params, "period", 20);
        let prices = source_param(params).extract_series(candles);

        let ema1 = ema_series(&prices, period);
        let ema2 = ema_series(&ema1, period);
        let dema: Vec<f64> = ema1
            .iter()
            .zip(ema2.iter())
            .map(|(a, b)| 2.0 * a - b)
            .collect();

        IndicatorResult::new(vec![dema], timestamps_of(candles))
    }
}
