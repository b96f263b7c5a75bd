use serde::{Deserialize, Serialize};

/// Direction of a detected signal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalEventKind {
    Bullish,
    Bearish,
}

/// A signal event detected during calculation (e.g. a MACD signal-line
/// cross or a Parabolic SAR trend flip), anchored to a bar index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalEvent {
    pub index: usize,
    pub kind: SignalEventKind,
}

/// Overbought/oversold levels an oscillator is conventionally read against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdLevels {
    pub overbought: f64,
    pub oversold: f64,
}

/// One price bin of a volume profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeBin {
    /// Bin midpoint price.
    pub price: f64,
    /// Total volume accumulated in the bin.
    pub volume: f64,
}

/// Structured metadata attached to a calculation result.
///
/// A closed set of known shapes rather than an open map, so consumers get
/// compile-time safety. All fields default to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResultMetadata {
    /// Conventional overbought/oversold levels, for oscillators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<ThresholdLevels>,
    /// Signal events detected while calculating.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub events: Vec<SignalEvent>,
    /// Point of control: price of the highest-volume bin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_of_control: Option<f64>,
    /// Volume-by-price histogram bins.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub bins: Vec<VolumeBin>,
}

impl ResultMetadata {
    pub fn with_levels(overbought: f64, oversold: f64) -> Self {
        Self {
            levels: Some(ThresholdLevels {
                overbought,
                oversold,
            }),
            ..Default::default()
        }
    }
}

/// Output of an indicator calculation.
///
/// `values` holds one inner series per output line; every inner series has
/// the same length as `timestamps`, which in turn matches the input series.
/// Warm-up positions hold NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorResult {
    pub values: Vec<Vec<f64>>,
    pub timestamps: Vec<i64>,
    #[serde(default)]
    pub metadata: ResultMetadata,
}

impl IndicatorResult {
    pub fn new(values: Vec<Vec<f64>>, timestamps: Vec<i64>) -> Self {
        Self {
            values,
            timestamps,
            metadata: ResultMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: ResultMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// All-NaN result of the right shape, for inputs shorter than the
    /// warm-up period.
    pub fn all_nan(lines: usize, timestamps: Vec<i64>) -> Self {
        let values = (0..lines)
            .map(|_| vec![f64::NAN; timestamps.len()])
            .collect();
        Self::new(values, timestamps)
    }

    /// Number of output lines.
    pub fn line_count(&self) -> usize {
        self.values.len()
    }

    /// One output line by index.
    pub fn line(&self, index: usize) -> Option<&[f64]> {
        self.values.get(index).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_nan_shape() {
        let result = IndicatorResult::all_nan(3, vec![1, 2, 3, 4]);
        assert_eq!(result.line_count(), 3);
        for line in &result.values {
            assert_eq!(line.len(), 4);
            assert!(line.iter().all(|v| v.is_nan()));
        }
    }

    #[test]
    fn test_line_accessor() {
        let result = IndicatorResult::new(vec![vec![1.0, 2.0]], vec![10, 20]);
        assert_eq!(result.line(0), Some(&[1.0, 2.0][..]));
        assert!(result.line(1).is_none());
    }

    #[test]
    fn test_metadata_serialization_skips_empty() {
        let result = IndicatorResult::new(vec![vec![1.0]], vec![10]);
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("pointOfControl"));
        assert!(!json.contains("events"));
    }

    #[test]
    fn test_metadata_levels() {
        let meta = ResultMetadata::with_levels(70.0, 30.0);
        let levels = meta.levels.unwrap();
        assert_eq!(levels.overbought, 70.0);
        assert_eq!(levels.oversold, 30.0);
    }

    #[test]
    fn test_nan_round_trips_as_null() {
        // serde_json writes NaN as null; consumers treat null as "no value".
        let result = IndicatorResult::all_nan(1, vec![10]);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("null"));
    }
}
