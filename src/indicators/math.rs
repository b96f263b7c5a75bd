//! Shared smoothing and rolling-window primitives.
//!
//! Every function returns a series of the same length as its input, with
//! NaN filling warm-up positions. A window that contains NaN produces NaN
//! for that position; rolling extrema check for NaN explicitly instead of
//! relying on `f64::min`/`f64::max`, which silently drop NaN operands.

use crate::types::Candle;

/// Simple moving average over `period` values.
pub fn sma_series(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }

    let mut sum = 0.0;
    let mut nan_in_window = 0usize;

    for i in 0..values.len() {
        let v = values[i];
        if v.is_nan() {
            nan_in_window += 1;
        } else {
            sum += v;
        }

        if i >= period {
            let leaving = values[i - period];
            if leaving.is_nan() {
                nan_in_window -= 1;
            } else {
                sum -= leaving;
            }
        }

        if i + 1 >= period && nan_in_window == 0 {
            out[i] = sum / period as f64;
        }
    }

    out
}

/// Exponential moving average, seeded with the SMA of the first full
/// window after any leading NaN prefix.
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if period == 0 {
        return out;
    }
    let start = match values.iter().position(|v| !v.is_nan()) {
        Some(s) => s,
        None => return out,
    };
    if values.len() - start < period {
        return out;
    }

    let seed_index = start + period - 1;
    let seed: f64 = values[start..=seed_index].iter().sum::<f64>() / period as f64;
    out[seed_index] = seed;

    let multiplier = 2.0 / (period as f64 + 1.0);
    for i in (seed_index + 1)..values.len() {
        out[i] = (values[i] - out[i - 1]) * multiplier + out[i - 1];
    }

    out
}

/// Linearly weighted moving average; the most recent value carries weight
/// `period`.
pub fn wma_series(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }

    let denominator = (period * (period + 1)) as f64 / 2.0;
    for i in (period - 1)..values.len() {
        let window = &values[i + 1 - period..=i];
        if window.iter().any(|v| v.is_nan()) {
            continue;
        }
        let weighted: f64 = window
            .iter()
            .enumerate()
            .map(|(j, v)| v * (j + 1) as f64)
            .sum();
        out[i] = weighted / denominator;
    }

    out
}

/// Wilder's smoothing: SMA seed, then `(prev * (period - 1) + value) / period`.
pub fn wilder_series(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if period == 0 {
        return out;
    }
    let start = match values.iter().position(|v| !v.is_nan()) {
        Some(s) => s,
        None => return out,
    };
    if values.len() - start < period {
        return out;
    }

    let seed_index = start + period - 1;
    out[seed_index] = values[start..=seed_index].iter().sum::<f64>() / period as f64;

    for i in (seed_index + 1)..values.len() {
        out[i] = (out[i - 1] * (period - 1) as f64 + values[i]) / period as f64;
    }

    out
}

/// Rolling population standard deviation.
pub fn stddev_series(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }

    for i in (period - 1)..values.len() {
        let window = &values[i + 1 - period..=i];
        if window.iter().any(|v| v.is_nan()) {
            continue;
        }
        let mean: f64 = window.iter().sum::<f64>() / period as f64;
        let variance: f64 =
            window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / period as f64;
        out[i] = variance.sqrt();
    }

    out
}

/// Rolling maximum over `period` values.
pub fn highest_series(values: &[f64], period: usize) -> Vec<f64> {
    rolling_extremum(values, period, |window| {
        window.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    })
}

/// Rolling minimum over `period` values.
pub fn lowest_series(values: &[f64], period: usize) -> Vec<f64> {
    rolling_extremum(values, period, |window| {
        window.iter().copied().fold(f64::INFINITY, f64::min)
    })
}

fn rolling_extremum(values: &[f64], period: usize, pick: impl Fn(&[f64]) -> f64) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }

    for i in (period - 1)..values.len() {
        let window = &values[i + 1 - period..=i];
        if window.iter().any(|v| v.is_nan()) {
            continue;
        }
        out[i] = pick(window);
    }

    out
}

/// True Range series. The first bar has no prior close, so its range is
/// simply high - low.
pub fn true_range_series(candles: &[Candle]) -> Vec<f64> {
    candles
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if i == 0 {
                c.high - c.low
            } else {
                let prev_close = candles[i - 1].close;
                (c.high - c.low)
                    .max((c.high - prev_close).abs())
                    .max((c.low - prev_close).abs())
            }
        })
        .collect()
}
