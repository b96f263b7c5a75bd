use serde::{Deserialize, Serialize};
use std::fmt;

/// OHLCV candle: one bar of market data.
///
/// Timestamps are epoch seconds, ascending and duplicate-free within a
/// series. The engine borrows candle slices for the duration of a
/// calculation and never mutates or retains them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// Typical price: (high + low + close) / 3.
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// Average of all four prices.
    pub fn ohlc4(&self) -> f64 {
        (self.open + self.high + self.low + self.close) / 4.0
    }
}

/// Price field an indicator reads from each candle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PriceField {
    Open,
    High,
    Low,
    #[default]
    Close,
    /// Typical price (high + low + close) / 3.
    Hlc3,
    /// (open + high + low + close) / 4.
    Ohlc4,
}

impl PriceField {
    /// Parse from the `source` parameter string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "open" => Some(PriceField::Open),
            "high" => Some(PriceField::High),
            "low" => Some(PriceField::Low),
            "close" => Some(PriceField::Close),
            "hlc3" | "typical" => Some(PriceField::Hlc3),
            "ohlc4" => Some(PriceField::Ohlc4),
            _ => None,
        }
    }

    /// Read this field from a candle.
    pub fn extract(&self, candle: &Candle) -> f64 {
        match self {
            PriceField::Open => candle.open,
            PriceField::High => candle.high,
            PriceField::Low => candle.low,
            PriceField::Close => candle.close,
            PriceField::Hlc3 => candle.typical_price(),
            PriceField::Ohlc4 => candle.ohlc4(),
        }
    }

    /// Extract this field from every candle in a series.
    pub fn extract_series(&self, candles: &[Candle]) -> Vec<f64> {
        candles.iter().map(|c| self.extract(c)).collect()
    }
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceField::Open => write!(f, "open"),
            PriceField::High => write!(f, "high"),
            PriceField::Low => write!(f, "low"),
            PriceField::Close => write!(f, "close"),
            PriceField::Hlc3 => write!(f, "hlc3"),
            PriceField::Ohlc4 => write!(f, "ohlc4"),
        }
    }
}
