//! Ichimoku Cloud indicator.

use crate::indicator::{period_param, timestamps_of, Indicator};
use crate::indicators::math::{highest_series, lowest_series};
use crate::types::{
    Candle, IndicatorCategory, IndicatorConfig, IndicatorResult, LineStyle, OutputSpec, ParamMap,
    ParamSpec,
};

/// Ichimoku Cloud: midpoint-of-range lines. The two Senkou spans are
/// displaced forward and the Chikou line backward, all inside fixed-length
/// arrays — positions that would fall outside the series are NaN.
pub struct Ichimoku {
    config: IndicatorConfig,
}

impl Default for Ichimoku {
    fn default() -> Self {
        Self {
            config: IndicatorConfig {
                name: "Ichimoku Cloud",
                short_name: "ICHI",
                category: IndicatorCategory::Overlay,
                description: "Range-midpoint system with displaced cloud spans",
                params: vec![
                    ParamSpec::number("conversion_period", 9.0, 2.0, 100.0),
                    ParamSpec::number("base_period", 26.0, 2.0, 100.0),
                    ParamSpec::number("span_b_period", 52.0, 2.0, 200.0),
                    ParamSpec::number("displacement", 26.0, 1.0, 100.0),
                ],
                outputs: vec![
                    OutputSpec::line("Tenkan", "#2962ff"),
                    OutputSpec::line("Kijun", "#f23645"),
                    OutputSpec::styled("Senkou A", "#089981", LineStyle::Area),
                    OutputSpec::styled("Senkou B", "#f23645", LineStyle::Area),
                    OutputSpec::line("Chikou", "#787b86"),
                ],
                panel: None,
            },
        }
    }
}

/// Midpoint of the rolling high/low range.
fn midpoint_series(candles: &[Candle], period: usize) -> Vec<f64> {
    let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
    let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();
    highest_series(&highs, period)
        .iter()
        .zip(lowest_series(&lows, period).iter())
        .map(|(h, l)| (h + l) / 2.0)
        .collect()
}

impl Indicator for Ichimoku {
    fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    fn calculate(&self, candles: &[Candle], params: &ParamMap) -> IndicatorResult {
        let conversion = period_param(params, "conversion_period", 9);
        let base = period_param(params, "base_period", 26);
        let span_b_period = period_param(params, "span_b_period", 52);
        let displacement = period_param(params, "displacement", 26);

        let n = candles.len();
        let tenkan = midpoint_series(candles, conversion);
        let kijun = midpoint_series(candles, base);
        let span_b_raw = midpoint_series(candles, span_b_period);

        let mut senkou_a = vec![f64::NAN; n];
        let mut senkou_b = vec![f64::NAN; n];
        for i in displacement..n {
            senkou_a[i] = (tenkan[i - displacement] + kijun[i - displacement]) / 2.0;
            senkou_b[i] = span_b_raw[i - displacement];
        }

        let mut chikou = vec![f64::NAN; n];
        for i in 0..n.saturating_sub(displacement) {
            chikou[i] = candles[i + displacement].close;
        }

        IndicatorResult::new(
            vec![tenkan, kijun, senkou_a, senkou_b, chikou],
            timestamps_of(candles),
        )
    }
}
