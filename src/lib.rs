//! Seance - Technical indicator calculation engine for OHLCV chart data
//!
//! A registry of pluggable indicator algorithms over candle series, with
//! parameter validation, deterministic warm-up/NaN semantics, an opt-in
//! fingerprint-keyed result cache and signal-detection utilities.
//!
//! The engine is synchronous and CPU-bound: it borrows an immutable candle
//! slice, computes and returns series plus metadata. Data acquisition and
//! rendering are the caller's concern.

pub mod batch;
pub mod cache;
pub mod detect;
pub mod error;
pub mod indicator;
pub mod indicators;
pub mod registry;
pub mod types;

// Re-export commonly used items
pub use batch::{calculate_batch, calculate_preset, TradingStyle};
pub use cache::{CachedIndicator, ResultCache};
pub use error::{EngineError, Result};
pub use indicator::Indicator;
pub use registry::IndicatorRegistry;
pub use types::*;
