//! Williams %R indicator.

use crate::indicator::{period_param, timestamps_of, Indicator};
use crate::indicators::math::{highest_series, lowest_series};
use crate::types::{
    Candle, IndicatorCategory, IndicatorConfig, IndicatorResult, OutputSpec, PanelHints, ParamMap,
    ParamSpec, ResultMetadata,
};

/// Williams %R: close distance from the highest high of the window, scaled
/// to the -100..0 range. A zero range reads as -50.
pub struct WilliamsR {
    config: IndicatorConfig,
}

impl Default for WilliamsR {
    fn default() -> Self {
        Self {
            config: IndicatorConfig {
                name: "Williams %R",
                short_name: "WILLR",
                category: IndicatorCategory::Oscillator,
                description: "Inverted close position within the recent range",
                params: vec![ParamSpec::number("period", 14.0, 2.0, 100.0)],
                outputs: vec![OutputSpec::line("%R", "#26a69a")],
                panel: Some(PanelHints {
                    height: Some(120),
                    reference_lines: vec![-20.0, -80.0],
                    bounds: Some((-100.0, 0.0)),
                }),
            },
        }
    }
}

impl Indicator for WilliamsR {
    fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    fn calculate(&self, candles: &[Candle], params: &ParamMap) -> IndicatorResult {
        let period = period_param(params, "period", 14);

        let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
        let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();
        let highest = highest_series(&highs, period);
        let lowest = lowest_series(&lows, period);

        let values: Vec<f64> = candles
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let (hh, ll) = (highest[i], lowest[i]);
                if hh.is_nan() || ll.is_nan() || c.close.is_nan() {
                    f64::NAN
                } else if hh == ll {
                    -50.0
                } else {
                    (hh - c.close) / (hh - ll) * -100.0
                }
            })
            .collect();

        IndicatorResult::new(vec![values], timestamps_of(candles))
            .with_metadata(ResultMetadata::with_levels(-20.0, -80.0))
    }
}
