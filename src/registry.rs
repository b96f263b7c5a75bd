//! Process-wide indicator registry.
//!
//! Maps type names to constructors. Initialized lazily with the built-in
//! family; consumers may register additional types (or replace entries
//! wholesale) at runtime without touching the built-ins.

use dashmap::DashMap;
use std::sync::{Arc, OnceLock};
use tracing::info;

use crate::cache::CachedIndicator;
use crate::error::{EngineError, Result};
use crate::indicator::Indicator;
use crate::indicators::{
    Adx, AdLine, Atr, BollingerBands, Cci, Dema, Ema, Ichimoku, KeltnerChannels, Macd, Mfi, Obv,
    ParabolicSar, Rsi, Sma, Stochastic, VolumeProfile, Vwap, WilliamsR, Wma,
};
use crate::types::{IndicatorCategory, IndicatorConfig};

/// Constructor stored per registry entry.
pub type Constructor = Arc<dyn Fn() -> Box<dyn Indicator> + Send + Sync>;

/// Registry of indicator constructors keyed by type name.
pub struct IndicatorRegistry {
    entries: DashMap<String, Constructor>,
}

fn builtin<I: Indicator + Default + 'static>() -> Constructor {
    Arc::new(|| Box::new(I::default()) as Box<dyn Indicator>)
}

impl IndicatorRegistry {
    /// Empty registry. Most callers want [`IndicatorRegistry::global`].
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Registry pre-populated with the built-in indicator family.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register("sma", builtin::<Sma>());
        registry.register("ema", builtin::<Ema>());
        registry.register("wma", builtin::<Wma>());
        registry.register("dema", builtin::<Dema>());
        registry.register("rsi", builtin::<Rsi>());
        registry.register("stochastic", builtin::<Stochastic>());
        registry.register("cci", builtin::<Cci>());
        registry.register("williams_r", builtin::<WilliamsR>());
        registry.register("mfi", builtin::<Mfi>());
        registry.register("macd", builtin::<Macd>());
        registry.register("adx", builtin::<Adx>());
        registry.register("parabolic_sar", builtin::<ParabolicSar>());
        registry.register("ichimoku", builtin::<Ichimoku>());
        registry.register("bollinger", builtin::<BollingerBands>());
        registry.register("atr", builtin::<Atr>());
        registry.register("keltner", builtin::<KeltnerChannels>());
        registry.register("obv", builtin::<Obv>());
        registry.register("vwap", builtin::<Vwap>());
        registry.register("volume_profile", builtin::<VolumeProfile>());
        registry.register("ad", builtin::<AdLine>());
        registry
    }

    /// The process-wide registry.
    pub fn global() -> &'static IndicatorRegistry {
        static GLOBAL: OnceLock<IndicatorRegistry> = OnceLock::new();
        GLOBAL.get_or_init(IndicatorRegistry::with_builtins)
    }

    /// Instantiate a registered indicator.
    pub fn create(&self, type_name: &str) -> Result<Box<dyn Indicator>> {
        match self.entries.get(type_name) {
            Some(ctor) => Ok(ctor()),
            None => Err(EngineError::UnknownIndicator(type_name.to_string())),
        }
    }

    /// Instantiate a registered indicator behind a result cache.
    pub fn create_cached(&self, type_name: &str) -> Result<CachedIndicator> {
        Ok(CachedIndicator::new(self.create(type_name)?))
    }

    /// Whether a type name is registered.
    pub fn has(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// All registered type names, sorted.
    pub fn list_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        types.sort();
        types
    }

    /// All registered types with their configs, sorted by type name.
    pub fn list_all(&self) -> Vec<(String, IndicatorConfig)> {
        let mut all: Vec<(String, IndicatorConfig)> = self
            .entries
            .iter()
            .map(|e| {
                let instance = e.value()();
                (e.key().clone(), instance.config().clone())
            })
            .collect();
        all.sort_by(|a, b| a.0.cmp(&b.0));
        all
    }

    /// Type names in one category, sorted.
    pub fn list_by_category(&self, category: IndicatorCategory) -> Vec<String> {
        let mut types: Vec<String> = self
            .entries
            .iter()
            .filter(|e| e.value()().config().category == category)
            .map(|e| e.key().clone())
            .collect();
        types.sort();
        types
    }

    /// Register a constructor under a type name, replacing any existing
    /// entry wholesale.
    pub fn register(&self, type_name: &str, constructor: Constructor) {
        info!(indicator = type_name, "registering indicator");
        self.entries.insert(type_name.to_string(), constructor);
    }

    /// Register from a plain closure.
    pub fn register_fn<F>(&self, type_name: &str, constructor: F)
    where
        F: Fn() -> Box<dyn Indicator> + Send + Sync + 'static,
    {
        self.register(type_name, Arc::new(constructor));
    }

    /// Remove a type. Returns whether an entry existed.
    pub fn unregister(&self, type_name: &str) -> bool {
        let removed = self.entries.remove(type_name).is_some();
        if removed {
            info!(indicator = type_name, "unregistered indicator");
        }
        removed
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
