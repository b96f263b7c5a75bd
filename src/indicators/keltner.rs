//! Keltner Channels indicator.

use crate::indicator::{number_param, period_param, timestamps_of, Indicator};
use crate::indicators::math::{ema_series, true_range_series, wilder_series};
use crate::types::{
    Candle, IndicatorCategory, IndicatorConfig, IndicatorResult, OutputSpec, ParamMap, ParamSpec,
};

/// Keltner Channels: EMA middle line with bands offset by a multiple of
/// ATR. Bands appear once both the EMA and the ATR are out of warm-up.
pub struct KeltnerChannels {
    config: IndicatorConfig,
}

impl Default for KeltnerChannels {
    fn default() -> Self {
        Self {
            config: IndicatorConfig {
                name: "Keltner Channels",
                short_name: "KC",
                category: IndicatorCategory::Overlay,
                description: "ATR-based volatility channel around an EMA",
                params: vec![
                    ParamSpec::number("period", 20.0, 2.0, 200.0),
                    ParamSpec::number("atr_period", 10.0, 2.0, 100.0),
                    ParamSpec::number("multiplier", 1.5, 0.1, 10.0),
                ],
                outputs: vec![
                    OutputSpec::line("Upper", "#089981"),
                    OutputSpec::line("Middle", "#787b86"),
                    OutputSpec::line("Lower", "#089981"),
                ],
                panel: None,
            },
        }
    }
}

impl Indicator for KeltnerChannels {
    fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    fn calculate(&self, candles: &[Candle], params: &ParamMap) -> IndicatorResult {
        let period = period_param(params, "period", 20);
        let atr_period = period_param(params, "atr_period", 10);
        let multiplier = number_param(params, "multiplier", 1.5);

        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let middle = ema_series(&closes, period);
        let atr = wilder_series(&true_range_series(candles), atr_period);

        let upper: Vec<f64> = middle
            .iter()
            .zip(atr.iter())
            .map(|(m, a)| m + multiplier * a)
            .collect();
        let lower: Vec<f64> = middle
            .iter()
            .zip(atr.iter())
            .map(|(m, a)| m - multiplier * a)
            .collect();

        IndicatorResult::new(vec![upper, middle, lower], timestamps_of(candles))
    }
}
