//! The indicator contract every concrete algorithm implements.

use crate::types::{
    Candle, IndicatorConfig, IndicatorResult, ParamMap, ParamValue, PriceField, Validation,
};

/// Trait for implementing technical indicators.
///
/// Implementations are stateless with respect to the input series:
/// `calculate` is deterministic and touches only its own local arrays, so
/// instances can be shared freely across threads. Caching is an opt-in
/// wrapper ([`crate::cache::CachedIndicator`]), not part of this contract.
pub trait Indicator: Send + Sync {
    /// The immutable descriptor for this indicator type.
    fn config(&self) -> &IndicatorConfig;

    /// Run the calculation.
    ///
    /// Must never panic on well-formed input: a series shorter than the
    /// warm-up period yields an all-NaN result of the input's length, and
    /// NaN/Infinity in source candles propagates as NaN per index.
    fn calculate(&self, candles: &[Candle], params: &ParamMap) -> IndicatorResult;

    /// Defaults derived from the config's parameter specs. Every declared
    /// parameter is present.
    fn default_params(&self) -> ParamMap {
        self.config()
            .params
            .iter()
            .map(|spec| (spec.name.to_string(), spec.default_value()))
            .collect()
    }

    /// Check a parameter map against the declared specs.
    ///
    /// Aggregates every violation (missing, wrong type, out of range, enum
    /// mismatch) instead of stopping at the first. Pure; advisory —
    /// `calculate` does not re-validate.
    fn validate(&self, params: &ParamMap) -> Validation {
        let mut errors = Vec::new();
        for spec in &self.config().params {
            match params.get(spec.name) {
                Some(value) => spec.check(value, &mut errors),
                None => errors.push(format!("parameter '{}' is missing", spec.name)),
            }
        }
        Validation::from_errors(errors)
    }

    /// Caller-supplied parameters merged over the defaults.
    fn merged_params(&self, params: &ParamMap) -> ParamMap {
        let mut merged = self.default_params();
        for (name, value) in params {
            merged.insert(name.clone(), value.clone());
        }
        merged
    }
}

impl std::fmt::Debug for dyn Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Indicator")
            .field("config", self.config())
            .finish()
    }
}

/// Extract a named numeric parameter, falling back to `default`.
pub fn number_param(params: &ParamMap, name: &str, default: f64) -> f64 {
    params
        .get(name)
        .and_then(ParamValue::as_number)
        .unwrap_or(default)
}

/// Extract a named period parameter as usize, falling back to `default`.
/// Values below 1 clamp to 1 so window arithmetic stays well-defined.
pub fn period_param(params: &ParamMap, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(ParamValue::as_number)
        .map(|v| (v as usize).max(1))
        .unwrap_or(default)
}

/// Extract the `source` price-field parameter, defaulting to close.
pub fn source_param(params: &ParamMap) -> PriceField {
    params
        .get("source")
        .and_then(ParamValue::as_text)
        .and_then(PriceField::from_str)
        .unwrap_or(PriceField::Close)
}

/// Timestamps of a candle series, in order.
pub fn timestamps_of(candles: &[Candle]) -> Vec<i64> {
    candles.iter().map(|c| c.time).collect()
}
