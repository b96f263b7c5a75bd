//! Volume Weighted Average Price (VWAP) indicator.

use chrono::{DateTime, Datelike, Utc};

use crate::indicator::{timestamps_of, Indicator};
use crate::types::{
    Candle, IndicatorCategory, IndicatorConfig, IndicatorResult, OutputSpec, ParamMap, ParamSpec,
    ParamValue,
};

/// Anchor period after which the cumulative sums reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    Day,
    Week,
    Month,
}

impl Anchor {
    fn from_params(params: &ParamMap) -> Self {
        match params.get("anchor").and_then(ParamValue::as_text) {
            Some("week") => Anchor::Week,
            Some("month") => Anchor::Month,
            _ => Anchor::Day,
        }
    }

    /// Key identifying the anchor period a timestamp belongs to. A new key
    /// on consecutive bars marks a period boundary.
    fn key(&self, timestamp: i64) -> i64 {
        let datetime = DateTime::<Utc>::from_timestamp(timestamp, 0).unwrap_or_default();
        match self {
            Anchor::Day => datetime.year() as i64 * 1000 + datetime.ordinal() as i64,
            Anchor::Week => {
                let week = datetime.iso_week();
                week.year() as i64 * 100 + week.week() as i64
            }
            Anchor::Month => datetime.year() as i64 * 100 + datetime.month() as i64,
        }
    }
}

/// VWAP: cumulative (typical price x volume) over cumulative volume,
/// restarted at each anchor boundary (new calendar day, ISO week or
/// month). Zero cumulative volume falls back to the bar's typical price.
pub struct Vwap {
    config: IndicatorConfig,
}

impl Default for Vwap {
    fn default() -> Self {
        Self {
            config: IndicatorConfig {
                name: "Volume Weighted Average Price",
                short_name: "VWAP",
                category: IndicatorCategory::Overlay,
                description: "Volume-weighted mean price, reset per anchor period",
                params: vec![ParamSpec::choice("anchor", "day", &["day", "week", "month"])],
                outputs: vec![OutputSpec::line("VWAP", "#ff6d00")],
                panel: None,
            },
        }
    }
}

impl Indicator for Vwap {
    fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    fn calculate(&self, candles: &[Candle], params: &ParamMap) -> IndicatorResult {
        let anchor = Anchor::from_params(params);

        let mut values = vec![f64::NAN; candles.len()];
        let mut cum_price_volume = 0.0;
        let mut cum_volume = 0.0;
        let mut current_key = None;

        for (i, candle) in candles.iter().enumerate() {
            let key = anchor.key(candle.time);
            if current_key != Some(key) {
                current_key = Some(key);
                cum_price_volume = 0.0;
                cum_volume = 0.0;
            }

            let typical = candle.typical_price();
            cum_price_volume += typical * candle.volume;
            cum_volume += candle.volume;

            values[i] = if cum_volume > 0.0 {
                cum_price_volume / cum_volume
            } else {
                typical
            };
        }

        IndicatorResult::new(vec![values], timestamps_of(candles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;

    fn candle(time: i64, price: f64, volume: f64) -> Candle {
        Candle {
            time,
            open: price,
            high: price,
            low: price,
            close: price,
            volume,
        }
    }

    #[test]
    fn test_vwap_weighted_mean() {
        let vwap = Vwap::default();
        // Same day: two bars at 10 and 20 with volumes 100 and 300.
        let candles = vec![
            candle(1_700_000_000, 10.0, 100.0),
            candle(1_700_000_060, 20.0, 300.0),
        ];
        let result = vwap.calculate(&candles, &ParamMap::new());
        assert!((result.values[0][0] - 10.0).abs() < 1e-12);
        // (10*100 + 20*300) / 400 = 17.5
        assert!((result.values[0][1] - 17.5).abs() < 1e-12);
    }

    #[test]
    fn test_vwap_resets_on_day_boundary() {
        let vwap = Vwap::default();
        let base = 1_700_000_000;
        let candles = vec![
            candle(base, 10.0, 100.0),
            candle(base + 60, 20.0, 100.0),
            // Next calendar day: cumulative state must restart.
            candle(base + DAY, 40.0, 100.0),
        ];
        let result = vwap.calculate(&candles, &ParamMap::new());
        assert!((result.values[0][1] - 15.0).abs() < 1e-12);
        assert!((result.values[0][2] - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_vwap_week_anchor_spans_days() {
        let vwap = Vwap::default();
        // 2023-11-14 (Tue) and 2023-11-15 (Wed): same ISO week.
        let base = 1_699_963_200;
        let candles = vec![candle(base, 10.0, 100.0), candle(base + DAY, 20.0, 100.0)];
        let mut params = ParamMap::new();
        params.insert("anchor".to_string(), ParamValue::Text("week".to_string()));
        let result = vwap.calculate(&candles, &params);
        // No reset: both bars accumulate.
        assert!((result.values[0][1] - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_vwap_zero_volume_falls_back_to_typical() {
        let vwap = Vwap::default();
        let candles = vec![candle(1_700_000_000, 12.0, 0.0)];
        let result = vwap.calculate(&candles, &ParamMap::new());
        assert!((result.values[0][0] - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_vwap_full_length() {
        let vwap = Vwap::default();
        let candles: Vec<Candle> = (0..10)
            .map(|i| candle(1_700_000_000 + i * 60, 10.0 + i as f64, 100.0))
            .collect();
        let result = vwap.calculate(&candles, &ParamMap::new());
        assert_eq!(result.values[0].len(), 10);
        assert!(result.values[0].iter().all(|v| !v.is_nan()));
    }
}
