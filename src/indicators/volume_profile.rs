//! Volume Profile indicator.

use crate::indicator::{period_param, timestamps_of, Indicator};
use crate::types::{
    Candle, IndicatorCategory, IndicatorConfig, IndicatorResult, LineStyle, OutputSpec, ParamMap,
    ParamSpec, ResultMetadata, VolumeBin,
};

/// Volume profile: distributes each bar's volume into a price bin by its
/// close, then reports, per bar, the total volume of the bin that bar's
/// close falls into. The full histogram and the point of control (the
/// highest-volume bin's price) ride along as metadata.
pub struct VolumeProfile {
    config: IndicatorConfig,
}

impl Default for VolumeProfile {
    fn default() -> Self {
        Self {
            config: IndicatorConfig {
                name: "Volume Profile",
                short_name: "VP",
                category: IndicatorCategory::Volume,
                description: "Volume-by-price histogram with point of control",
                params: vec![ParamSpec::number("bins", 24.0, 2.0, 200.0)],
                outputs: vec![OutputSpec::styled("Volume", "#787b86", LineStyle::Histogram)],
                panel: None,
            },
        }
    }
}

impl Indicator for VolumeProfile {
    fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    fn calculate(&self, candles: &[Candle], params: &ParamMap) -> IndicatorResult {
        let bins = period_param(params, "bins", 24);
        let timestamps = timestamps_of(candles);

        let finite_closes: Vec<f64> = candles
            .iter()
            .map(|c| c.close)
            .filter(|c| c.is_finite())
            .collect();
        let (min_close, max_close) = match (
            finite_closes.iter().copied().reduce(f64::min),
            finite_closes.iter().copied().reduce(f64::max),
        ) {
            (Some(min), Some(max)) => (min, max),
            _ => return IndicatorResult::all_nan(1, timestamps),
        };

        // Degenerate flat series: one bin holds everything.
        let span = max_close - min_close;
        let bin_of = |close: f64| -> usize {
            if span == 0.0 {
                0
            } else {
                (((close - min_close) / span * bins as f64) as usize).min(bins - 1)
            }
        };

        let mut totals = vec![0.0; bins];
        for candle in candles {
            if candle.close.is_finite() && candle.volume.is_finite() {
                totals[bin_of(candle.close)] += candle.volume;
            }
        }

        let values: Vec<f64> = candles
            .iter()
            .map(|c| {
                if c.close.is_finite() {
                    totals[bin_of(c.close)]
                } else {
                    f64::NAN
                }
            })
            .collect();

        let bin_width = if span == 0.0 { 0.0 } else { span / bins as f64 };
        let histogram: Vec<VolumeBin> = totals
            .iter()
            .enumerate()
            .map(|(i, &volume)| VolumeBin {
                price: min_close + bin_width * (i as f64 + 0.5),
                volume,
            })
            .collect();

        let point_of_control = histogram
            .iter()
            .max_by(|a, b| a.volume.total_cmp(&b.volume))
            .map(|bin| bin.price);

        let metadata = ResultMetadata {
            point_of_control,
            bins: histogram,
            ..Default::default()
        };

        IndicatorResult::new(vec![values], timestamps).with_metadata(metadata)
    }
}
