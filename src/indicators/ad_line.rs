//! Accumulation/Distribution (A/D) line indicator.

use crate::indicator::{timestamps_of, Indicator};
use crate::types::{
    Candle, IndicatorCategory, IndicatorConfig, IndicatorResult, OutputSpec, PanelHints, ParamMap,
};

/// A/D line: cumulative money-flow-multiplier times volume, where the
/// multiplier is `((close - low) - (high - close)) / (high - low)` and a
/// zero range contributes 0.
pub struct AdLine {
    config: IndicatorConfig,
}

impl Default for AdLine {
    fn default() -> Self {
        Self {
            config: IndicatorConfig {
                name: "Accumulation/Distribution Line",
                short_name: "A/D",
                category: IndicatorCategory::Volume,
                description: "Cumulative volume weighted by close position in range",
                params: Vec::new(),
                outputs: vec![OutputSpec::line("A/D", "#26a69a")],
                panel: Some(PanelHints {
                    height: Some(100),
                    reference_lines: Vec::new(),
                    bounds: None,
                }),
            },
        }
    }
}

impl Indicator for AdLine {
    fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    fn calculate(&self, candles: &[Candle], _params: &ParamMap) -> IndicatorResult {
        let mut values = vec![f64::NAN; candles.len()];
        let mut ad = 0.0;

        for (i, candle) in candles.iter().enumerate() {
            let range = candle.high - candle.low;
            let multiplier = if range.is_nan() || candle.close.is_nan() {
                f64::NAN
            } else if range == 0.0 {
                0.0
            } else {
                ((candle.close - candle.low) - (candle.high - candle.close)) / range
            };
            ad += multiplier * candle.volume;
            values[i] = ad;
        }

        IndicatorResult::new(vec![values], timestamps_of(candles))
    }
}
