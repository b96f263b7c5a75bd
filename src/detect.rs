//! Signal detection over already-computed numeric series.
//!
//! Pure functions on raw arrays; no indicator knowledge. Indices adjacent
//! to NaN are skipped rather than guessed at.

use serde::{Deserialize, Serialize};

/// Direction of a line crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossoverKind {
    /// A crossed from at-or-below B to above B.
    Bullish,
    /// A crossed from at-or-above B to below B.
    Bearish,
}

/// Which crossovers to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossoverFilter {
    Bullish,
    Bearish,
    #[default]
    Any,
}

/// A detected crossover of series A through series B.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crossover {
    pub index: usize,
    pub kind: CrossoverKind,
}

/// Indices where `series_a` crosses `series_b`.
///
/// A bullish crossover at `i` means `a[i-1] <= b[i-1]` and `a[i] > b[i]`;
/// bearish is the mirror. Positions where either series is NaN at `i` or
/// `i - 1` are skipped.
pub fn crossovers(series_a: &[f64], series_b: &[f64], filter: CrossoverFilter) -> Vec<Crossover> {
    let len = series_a.len().min(series_b.len());
    let mut found = Vec::new();

    for i in 1..len {
        let (prev_a, prev_b) = (series_a[i - 1], series_b[i - 1]);
        let (cur_a, cur_b) = (series_a[i], series_b[i]);
        if prev_a.is_nan() || prev_b.is_nan() || cur_a.is_nan() || cur_b.is_nan() {
            continue;
        }

        let kind = if prev_a <= prev_b && cur_a > cur_b {
            Some(CrossoverKind::Bullish)
        } else if prev_a >= prev_b && cur_a < cur_b {
            Some(CrossoverKind::Bearish)
        } else {
            None
        };

        if let Some(kind) = kind {
            let wanted = matches!(
                (filter, kind),
                (CrossoverFilter::Any, _)
                    | (CrossoverFilter::Bullish, CrossoverKind::Bullish)
                    | (CrossoverFilter::Bearish, CrossoverKind::Bearish)
            );
            if wanted {
                found.push(Crossover { index: i, kind });
            }
        }
    }

    found
}

/// Kind of threshold breach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreachKind {
    Overbought,
    Oversold,
}

/// A value at or beyond one of the configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdBreach {
    pub index: usize,
    pub kind: BreachKind,
}

/// Every index at/above `high_threshold` or at/below `low_threshold`.
/// NaN indices are skipped.
pub fn overbought_oversold(
    series: &[f64],
    high_threshold: f64,
    low_threshold: f64,
) -> Vec<ThresholdBreach> {
    let mut found = Vec::new();
    for (index, &value) in series.iter().enumerate() {
        if value.is_nan() {
            continue;
        }
        if value >= high_threshold {
            found.push(ThresholdBreach {
                index,
                kind: BreachKind::Overbought,
            });
        } else if value <= low_threshold {
            found.push(ThresholdBreach {
                index,
                kind: BreachKind::Oversold,
            });
        }
    }
    found
}

/// Kind of price/indicator divergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivergenceKind {
    /// Price set a new low while the indicator held above its value at the
    /// prior low.
    Bullish,
    /// Price set a new high while the indicator fell below its value at
    /// the prior high.
    Bearish,
}

/// A detected divergence, anchored at the bar confirming it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Divergence {
    pub index: usize,
    pub kind: DivergenceKind,
}

/// Compare local extrema of price vs. indicator over a sliding window of
/// `lookback + 1` bars. Windows containing NaN in either series are
/// skipped.
pub fn divergence(prices: &[f64], indicator: &[f64], lookback: usize) -> Vec<Divergence> {
    let len = prices.len().min(indicator.len());
    let mut found = Vec::new();
    if lookback == 0 || len <= lookback {
        return found;
    }

    for i in lookback..len {
        let window = i - lookback..=i;
        if prices[window.clone()].iter().any(|v| v.is_nan())
            || indicator[window.clone()].iter().any(|v| v.is_nan())
        {
            continue;
        }

        // Extrema of the prior bars, excluding the confirming bar itself.
        let prior = i - lookback..i;
        let mut low_idx = prior.start;
        let mut high_idx = prior.start;
        for j in prior {
            if prices[j] < prices[low_idx] {
                low_idx = j;
            }
            if prices[j] > prices[high_idx] {
                high_idx = j;
            }
        }

        if prices[i] < prices[low_idx] && indicator[i] > indicator[low_idx] {
            found.push(Divergence {
                index: i,
                kind: DivergenceKind::Bullish,
            });
        } else if prices[i] > prices[high_idx] && indicator[i] < indicator[high_idx] {
            found.push(Divergence {
                index: i,
                kind: DivergenceKind::Bearish,
            });
        }
    }

    found
}
