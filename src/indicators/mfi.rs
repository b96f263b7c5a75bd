//! Money Flow Index (MFI) indicator.

use crate::indicator::{period_param, timestamps_of, Indicator};
use crate::types::{
    Candle, IndicatorCategory, IndicatorConfig, IndicatorResult, OutputSpec, PanelHints, ParamMap,
    ParamSpec, ResultMetadata,
};

/// MFI: a volume-weighted RSI over typical price. Raw money flow
/// (typical price times volume) is split into positive and negative flow
/// by the direction of the typical-price change, then ratioed over the
/// window. Zero negative flow reads as 100; no flow at all reads as 50.
pub struct Mfi {
    config: IndicatorConfig,
}

impl Default for Mfi {
    fn default() -> Self {
        Self {
            config: IndicatorConfig {
                name: "Money Flow Index",
                short_name: "MFI",
                category: IndicatorCategory::Oscillator,
                description: "Volume-weighted momentum of typical price",
                params: vec![ParamSpec::number("period", 14.0, 2.0, 100.0)],
                outputs: vec![OutputSpec::line("MFI", "#ffb300")],
                panel: Some(PanelHints {
                    height: Some(120),
                    reference_lines: vec![80.0, 20.0],
                    bounds: Some((0.0, 100.0)),
                }),
            },
        }
    }
}

impl Indicator for Mfi {
    fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    fn calculate(&self, candles: &[Candle], params: &ParamMap) -> IndicatorResult {
        let period = period_param(params, "period", 14);
        let mut mfi = vec![f64::NAN; candles.len()];

        if candles.len() > period {
            let typical: Vec<f64> = candles.iter().map(Candle::typical_price).collect();

            // Signed flow per bar transition; index j covers the move into
            // bar j + 1.
            let mut positive = Vec::with_capacity(candles.len() - 1);
            let mut negative = Vec::with_capacity(candles.len() - 1);
            for i in 1..candles.len() {
                let flow = typical[i] * candles[i].volume;
                let change = typical[i] - typical[i - 1];
                if change.is_nan() || flow.is_nan() {
                    positive.push(f64::NAN);
                    negative.push(f64::NAN);
                } else if change > 0.0 {
                    positive.push(flow);
                    negative.push(0.0);
                } else if change < 0.0 {
                    positive.push(0.0);
                    negative.push(flow);
                } else {
                    positive.push(0.0);
                    negative.push(0.0);
                }
            }

            for i in period..candles.len() {
                let window = i - period..i;
                if positive[window.clone()].iter().any(|v| v.is_nan()) {
                    continue;
                }
                let pos: f64 = positive[window.clone()].iter().sum();
                let neg: f64 = negative[window].iter().sum();
                mfi[i] = if pos == 0.0 && neg == 0.0 {
                    50.0
                } else if neg == 0.0 {
                    100.0
                } else {
                    100.0 - 100.0 / (1.0 + pos / neg)
                };
            }
        }

        IndicatorResult::new(vec![mfi], timestamps_of(candles))
            .with_metadata(ResultMetadata::with_levels(80.0, 20.0))
    }
}
