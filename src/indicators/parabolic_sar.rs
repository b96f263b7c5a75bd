//! Parabolic SAR indicator.

use crate::indicator::{number_param, timestamps_of, Indicator};
use crate::types::{
    Candle, IndicatorCategory, IndicatorConfig, IndicatorResult, LineStyle, OutputSpec, ParamMap,
    ParamSpec, ResultMetadata, SignalEvent, SignalEventKind,
};

/// Parabolic SAR: a trailing stop that accelerates toward price while a
/// trend holds, and flips to the other side on reversal, resetting the
/// extreme point and acceleration factor. Trend flips are reported as
/// metadata events.
pub struct ParabolicSar {
    config: IndicatorConfig,
}

impl Default for ParabolicSar {
    fn default() -> Self {
        Self {
            config: IndicatorConfig {
                name: "Parabolic SAR",
                short_name: "PSAR",
                category: IndicatorCategory::Overlay,
                description: "Accelerating trend-following stop-and-reverse",
                params: vec![
                    ParamSpec::number("acceleration", 0.02, 0.001, 0.5),
                    ParamSpec::number("max_acceleration", 0.2, 0.01, 1.0),
                ],
                outputs: vec![OutputSpec::styled("SAR", "#2962ff", LineStyle::Dotted)],
                panel: None,
            },
        }
    }
}

impl Indicator for ParabolicSar {
    fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    fn calculate(&self, candles: &[Candle], params: &ParamMap) -> IndicatorResult {
        let step = number_param(params, "acceleration", 0.02);
        let max_af = number_param(params, "max_acceleration", 0.2);

        let n = candles.len();
        let mut sar = vec![f64::NAN; n];
        let mut events = Vec::new();

        if n >= 2 {
            let mut uptrend = candles[1].close >= candles[0].close;
            let mut current = if uptrend {
                candles[0].low
            } else {
                candles[0].high
            };
            let mut extreme = if uptrend {
                candles[1].high
            } else {
                candles[1].low
            };
            let mut af = step;
            sar[1] = current;

            for i in 2..n {
                current += af * (extreme - current);

                if uptrend {
                    // SAR may not sit above the prior two lows.
                    current = current.min(candles[i - 1].low).min(candles[i - 2].low);
                    if candles[i].low < current {
                        // Reversal: flip below-price stop to the extreme.
                        uptrend = false;
                        current = extreme;
                        extreme = candles[i].low;
                        af = step;
                        events.push(SignalEvent {
                            index: i,
                            kind: SignalEventKind::Bearish,
                        });
                    } else if candles[i].high > extreme {
                        extreme = candles[i].high;
                        af = (af + step).min(max_af);
                    }
                } else {
                    current = current.max(candles[i - 1].high).max(candles[i - 2].high);
                    if candles[i].high > current {
                        uptrend = true;
                        current = extreme;
                        extreme = candles[i].high;
                        af = step;
                        events.push(SignalEvent {
                            index: i,
                            kind: SignalEventKind::Bullish,
                        });
                    } else if candles[i].low < extreme {
                        extreme = candles[i].low;
                        af = (af + step).min(max_af);
                    }
                }

                sar[i] = current;
            }
        }

        let metadata = ResultMetadata {
            events,
            ..Default::default()
        };
        IndicatorResult::new(vec![sar], timestamps_of(candles)).with_metadata(metadata)
    }
}
