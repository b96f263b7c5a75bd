//! Average Directional Index (ADX) indicator.

use crate::indicator::{period_param, timestamps_of, Indicator};
use crate::indicators::math::{true_range_series, wilder_series};
use crate::types::{
    Candle, IndicatorCategory, IndicatorConfig, IndicatorResult, OutputSpec, PanelHints, ParamMap,
    ParamSpec,
};

/// ADX with its directional lines. Directional movement and True Range are
/// Wilder-smoothed into +DI/-DI, their normalized spread (DX) is smoothed
/// again into ADX. A zero smoothed range reads as 0 rather than dividing
/// by zero.
pub struct Adx {
    config: IndicatorConfig,
}

impl Default for Adx {
    fn default() -> Self {
        Self {
            config: IndicatorConfig {
                name: "Average Directional Index",
                short_name: "ADX",
                category: IndicatorCategory::Oscillator,
                description: "Trend strength with directional components",
                params: vec![ParamSpec::number("period", 14.0, 2.0, 100.0)],
                outputs: vec![
                    OutputSpec::line("ADX", "#f23645"),
                    OutputSpec::line("+DI", "#089981"),
                    OutputSpec::line("-DI", "#787b86"),
                ],
                panel: Some(PanelHints {
                    height: Some(120),
                    reference_lines: vec![25.0],
                    bounds: Some((0.0, 100.0)),
                }),
            },
        }
    }
}

impl Indicator for Adx {
    fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    fn calculate(&self, candles: &[Candle], params: &ParamMap) -> IndicatorResult {
        let period = period_param(params, "period", 14);
        let n = candles.len();
        let mut adx = vec![f64::NAN; n];
        let mut plus_di = vec![f64::NAN; n];
        let mut minus_di = vec![f64::NAN; n];

        if n > 1 {
            // Directional movement per bar transition; index j covers the
            // move into bar j + 1.
            let mut plus_dm = Vec::with_capacity(n - 1);
            let mut minus_dm = Vec::with_capacity(n - 1);
            for i in 1..n {
                let up_move = candles[i].high - candles[i - 1].high;
                let down_move = candles[i - 1].low - candles[i].low;
                if up_move.is_nan() || down_move.is_nan() {
                    plus_dm.push(f64::NAN);
                    minus_dm.push(f64::NAN);
                    continue;
                }
                plus_dm.push(if up_move > down_move && up_move > 0.0 {
                    up_move
                } else {
                    0.0
                });
                minus_dm.push(if down_move > up_move && down_move > 0.0 {
                    down_move
                } else {
                    0.0
                });
            }
            let tr: Vec<f64> = true_range_series(candles)[1..].to_vec();

            let smoothed_plus = wilder_series(&plus_dm, period);
            let smoothed_minus = wilder_series(&minus_dm, period);
            let smoothed_tr = wilder_series(&tr, period);

            let mut dx = vec![f64::NAN; n - 1];
            for j in 0..n - 1 {
                let str_j = smoothed_tr[j];
                if str_j.is_nan() || smoothed_plus[j].is_nan() || smoothed_minus[j].is_nan() {
                    continue;
                }
                let (pdi, mdi) = if str_j == 0.0 {
                    (0.0, 0.0)
                } else {
                    (
                        smoothed_plus[j] / str_j * 100.0,
                        smoothed_minus[j] / str_j * 100.0,
                    )
                };
                plus_di[j + 1] = pdi;
                minus_di[j + 1] = mdi;

                let di_sum = pdi + mdi;
                dx[j] = if di_sum == 0.0 {
                    0.0
                } else {
                    (pdi - mdi).abs() / di_sum * 100.0
                };
            }

            let smoothed_dx = wilder_series(&dx, period);
            for j in 0..n - 1 {
                adx[j + 1] = smoothed_dx[j];
            }
        }

        IndicatorResult::new(vec![adx, plus_di, minus_di], timestamps_of(candles))
    }
}
