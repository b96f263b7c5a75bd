//! MACD (Moving Average Convergence Divergence) indicator.

use crate::detect::{crossovers, CrossoverFilter, CrossoverKind};
use crate::indicator::{period_param, timestamps_of, Indicator};
use crate::indicators::math::ema_series;
use crate::types::{
    Candle, IndicatorCategory, IndicatorConfig, IndicatorResult, LineStyle, OutputSpec,
    PanelHints, ParamMap, ParamSpec, ResultMetadata, SignalEvent, SignalEventKind,
};

/// MACD: fast EMA minus slow EMA, with a signal-line EMA of the MACD line
/// and a histogram of their difference. Signal-line crossovers are
/// reported as metadata events.
pub struct Macd {
    config: IndicatorConfig,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            config: IndicatorConfig {
                name: "MACD",
                short_name: "MACD",
                category: IndicatorCategory::Oscillator,
                description: "Difference of fast and slow EMAs with a signal line",
                params: vec![
                    ParamSpec::number("fast_period", 12.0, 2.0, 100.0),
                    ParamSpec::number("slow_period", 26.0, 2.0, 200.0),
                    ParamSpec::number("signal_period", 9.0, 2.0, 50.0),
                ],
                outputs: vec![
                    OutputSpec::line("MACD", "#2962ff"),
                    OutputSpec::line("Signal", "#ff6d00"),
                    OutputSpec::styled("Histogram", "#787b86", LineStyle::Histogram),
                ],
                panel: Some(PanelHints {
                    height: Some(140),
                    reference_lines: vec![0.0],
                    bounds: None,
                }),
            },
        }
    }
}

impl Indicator for Macd {
    fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    fn calculate(&self, candles: &[Candle], params: &ParamMap) -> IndicatorResult {
        let fast_period = period_param(params, "fast_period", 12);
        let slow_period = period_param(params, "slow_period", 26);
        let signal_period = period_param(params, "signal_period", 9);

        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let fast = ema_series(&closes, fast_period);
        let slow = ema_series(&closes, slow_period);

        let macd: Vec<f64> = fast.iter().zip(slow.iter()).map(|(f, s)| f - s).collect();
        let signal = ema_series(&macd, signal_period);
        let histogram: Vec<f64> = macd
            .iter()
            .zip(signal.iter())
            .map(|(m, s)| m - s)
            .collect();

        let events: Vec<SignalEvent> = crossovers(&macd, &signal, CrossoverFilter::Any)
            .into_iter()
            .map(|c| SignalEvent {
                index: c.index,
                kind: match c.kind {
                    CrossoverKind::Bullish => SignalEventKind::Bullish,
                    CrossoverKind::Bearish => SignalEventKind::Bearish,
                },
            })
            .collect();

        let metadata = ResultMetadata {
            events,
            ..Default::default()
        };

        IndicatorResult::new(vec![macd, signal, histogram], timestamps_of(candles))
            .with_metadata(metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParamValue;

    fn create_wave_candles(count: usize) -> Vec<Candle> {
        (0..count)
            .map(|i| {
                // A slow ramp with a periodic swing so MACD actually
                // crosses its signal line.
                let close = 100.0
                    + i as f64 * 0.2
                    + 8.0 * ((i as f64) * std::f64::consts::TAU / 40.0).sin();
                Candle {
                    time: 1_700_000_000 + i as i64 * 60,
                    open: close,
                    high: close + 1.0,
                    low: close - 1.0,
                    close,
                    volume: 1000.0,
                }
            })
            .collect()
    }

    fn params() -> ParamMap {
        let mut p = ParamMap::new();
        p.insert("fast_period".to_string(), ParamValue::Number(12.0));
        p.insert("slow_period".to_string(), ParamValue::Number(26.0));
        p.insert("signal_period".to_string(), ParamValue::Number(9.0));
        p
    }

    #[test]
    fn test_macd_three_lines() {
        let macd = Macd::default();
        let candles = create_wave_candles(120);
        let result = macd.calculate(&candles, &params());
        assert_eq!(result.values.len(), 3);
        for line in &result.values {
            assert_eq!(line.len(), 120);
        }
    }

    #[test]
    fn test_macd_warm_up_indices() {
        let macd = Macd::default();
        let candles = create_wave_candles(120);
        let result = macd.calculate(&candles, &params());
        let macd_line = &result.values[0];
        let signal_line = &result.values[1];
        // MACD defined from slow - 1 = 25; signal adds signal - 1 more.
        assert!(macd_line[24].is_nan());
        assert!(!macd_line[25].is_nan());
        assert!(signal_line[32].is_nan());
        assert!(!signal_line[33].is_nan());
    }

    #[test]
    fn test_macd_histogram_identity() {
        let macd = Macd::default();
        let candles = create_wave_candles(120);
        let result = macd.calculate(&candles, &params());
        let (m, s, h) = (&result.values[0], &result.values[1], &result.values[2]);
        for i in 0..120 {
            if !m[i].is_nan() && !s[i].is_nan() {
                assert_eq!(h[i], m[i] - s[i]);
            }
        }
    }

    #[test]
    fn test_macd_emits_crossover_events() {
        let macd = Macd::default();
        let candles = create_wave_candles(200);
        let result = macd.calculate(&candles, &params());
        // The sine swing guarantees at least one cross in each direction.
        let events = &result.metadata.events;
        assert!(events.iter().any(|e| e.kind == SignalEventKind::Bullish));
        assert!(events.iter().any(|e| e.kind == SignalEventKind::Bearish));
    }

    #[test]
    fn test_macd_insufficient_data() {
        let macd = Macd::default();
        let candles = create_wave_candles(10);
        let result = macd.calculate(&candles, &params());
        for line in &result.values {
            assert!(line.iter().all(|v| v.is_nan()));
        }
    }
}
