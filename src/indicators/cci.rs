//! Commodity Channel Index (CCI) indicator.

use crate::indicator::{period_param, timestamps_of, Indicator};
use crate::indicators::math::sma_series;
use crate::types::{
    Candle, IndicatorCategory, IndicatorConfig, IndicatorResult, OutputSpec, PanelHints, ParamMap,
    ParamSpec, ResultMetadata,
};

/// CCI: typical-price deviation from its SMA, scaled by 0.015 times the
/// mean absolute deviation. A zero deviation window reads as 0.
pub struct Cci {
    config: IndicatorConfig,
}

impl Default for Cci {
    fn default() -> Self {
        Self {
            config: IndicatorConfig {
                name: "Commodity Channel Index",
                short_name: "CCI",
                category: IndicatorCategory::Oscillator,
                description: "Typical-price deviation from its moving average",
                params: vec![ParamSpec::number("period", 20.0, 2.0, 100.0)],
                outputs: vec![OutputSpec::line("CCI", "#e91e63")],
                panel: Some(PanelHints {
                    height: Some(120),
                    reference_lines: vec![100.0, -100.0],
                    bounds: None,
                }),
            },
        }
    }
}

impl Indicator for Cci {
    fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    fn calculate(&self, candles: &[Candle], params: &ParamMap) -> IndicatorResult {
        let period = period_param(params, "period", 20);
        let typical: Vec<f64> = candles.iter().map(Candle::typical_price).collect();
        let sma = sma_series(&typical, period);

        let mut cci = vec![f64::NAN; candles.len()];
        for i in 0..candles.len() {
            if sma[i].is_nan() {
                continue;
            }
            let window = &typical[i + 1 - period..=i];
            let mad: f64 =
                window.iter().map(|tp| (tp - sma[i]).abs()).sum::<f64>() / period as f64;
            cci[i] = if mad == 0.0 {
                0.0
            } else {
                (typical[i] - sma[i]) / (0.015 * mad)
            };
        }

        IndicatorResult::new(vec![cci], timestamps_of(candles))
            .with_metadata(ResultMetadata::with_levels(100.0, -100.0))
    }
}
