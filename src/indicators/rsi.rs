//! Relative Strength Index (RSI) indicator.

use crate::indicator::{period_param, timestamps_of, Indicator};
use crate::indicators::math::wilder_series;
use crate::types::{
    Candle, IndicatorCategory, IndicatorConfig, IndicatorResult, OutputSpec, PanelHints, ParamMap,
    ParamSpec, ResultMetadata,
};

/// RSI: Wilder-smoothed ratio of average gains to average losses, scaled
/// to 0-100. A zero average loss reads as 100.
pub struct Rsi {
    config: IndicatorConfig,
}

impl Default for Rsi {
    fn default() -> Self {
        Self {
            config: IndicatorConfig {
                name: "Relative Strength Index",
                short_name: "RSI",
                category: IndicatorCategory::Oscillator,
                description: "Momentum oscillator comparing recent gains to losses",
                params: vec![ParamSpec::number("period", 14.0, 2.0, 100.0)],
                outputs: vec![OutputSpec::line("RSI", "#7e57c2")],
                panel: Some(PanelHints {
                    height: Some(120),
                    reference_lines: vec![70.0, 30.0],
                    bounds: Some((0.0, 100.0)),
                }),
            },
        }
    }
}

impl Indicator for Rsi {
    fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    fn calculate(&self, candles: &[Candle], params: &ParamMap) -> IndicatorResult {
        let period = period_param(params, "period", 14);
        let mut rsi = vec![f64::NAN; candles.len()];

        if candles.len() > period {
            // Per-bar gains and losses; index j covers the move into bar
            // j + 1.
            let mut gains = Vec::with_capacity(candles.len() - 1);
            let mut losses = Vec::with_capacity(candles.len() - 1);
            for i in 1..candles.len() {
                let change = candles[i].close - candles[i - 1].close;
                if change.is_nan() {
                    gains.push(f64::NAN);
                    losses.push(f64::NAN);
                } else if change > 0.0 {
                    gains.push(change);
                    losses.push(0.0);
                } else {
                    gains.push(0.0);
                    losses.push(-change);
                }
            }

            let avg_gain = wilder_series(&gains, period);
            let avg_loss = wilder_series(&losses, period);

            for i in period..candles.len() {
                let (gain, loss) = (avg_gain[i - 1], avg_loss[i - 1]);
                if gain.is_nan() || loss.is_nan() {
                    continue;
                }
                rsi[i] = if loss == 0.0 {
                    100.0
                } else {
                    100.0 - 100.0 / (1.0 + gain / loss)
                };
            }
        }

        IndicatorResult::new(vec![rsi], timestamps_of(candles))
            .with_metadata(ResultMetadata::with_levels(70.0, 30.0))
    }
}
