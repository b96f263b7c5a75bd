//! On-Balance Volume (OBV) indicator.

use crate::indicator::{timestamps_of, Indicator};
use crate::types::{
    Candle, IndicatorCategory, IndicatorConfig, IndicatorResult, OutputSpec, PanelHints, ParamMap,
};

/// OBV: signed cumulative volume, starting at zero. Volume is added on an
/// up-close, subtracted on a down-close and left unchanged on a flat
/// close.
pub struct Obv {
    config: IndicatorConfig,
}

impl Default for Obv {
    fn default() -> Self {
        Self {
            config: IndicatorConfig {
                name: "On-Balance Volume",
                short_name: "OBV",
                category: IndicatorCategory::Volume,
                description: "Cumulative volume signed by close direction",
                params: Vec::new(),
                outputs: vec![OutputSpec::line("OBV", "#2962ff")],
                panel: Some(PanelHints {
                    height: Some(100),
                    reference_lines: Vec::new(),
                    bounds: None,
                }),
            },
        }
    }
}

impl Indicator for Obv {
    fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    fn calculate(&self, candles: &[Candle], _params: &ParamMap) -> IndicatorResult {
        let mut values = vec![f64::NAN; candles.len()];
        if !candles.is_empty() {
            let mut obv = if candles[0].close.is_nan() {
                f64::NAN
            } else {
                0.0
            };
            values[0] = obv;

            for i in 1..candles.len() {
                let (cur, prev) = (candles[i].close, candles[i - 1].close);
                if cur.is_nan() || prev.is_nan() {
                    obv = f64::NAN;
                } else if cur > prev {
                    obv += candles[i].volume;
                } else if cur < prev {
                    obv -= candles[i].volume;
                }
                values[i] = obv;
            }
        }

        IndicatorResult::new(vec![values], timestamps_of(candles))
    }
}
