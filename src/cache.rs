//! Result caching keyed by data + parameter fingerprints.
//!
//! Caching is opt-in: plain indicators are stateless, and a
//! [`CachedIndicator`] wraps one with a mutex-guarded per-instance cache.
//! Eviction is strict insertion order (oldest key first) rather than LRU —
//! a hit does not refresh an entry's position — which keeps behavior
//! reproducible under test.

use sha2::{Digest, Sha256};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::indicator::Indicator;
use crate::types::{Candle, IndicatorConfig, IndicatorResult, ParamMap};

/// Default time-to-live for cached results.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Default per-indicator entry cap.
pub const DEFAULT_CAPACITY: usize = 50;

/// Fingerprint of a (series, parameter set) pair.
///
/// Hashes the series length, first and last timestamps, last close and the
/// serialized parameters — enough to distinguish a refreshed series from a
/// cached one without hashing every candle.
pub fn fingerprint(short_name: &str, candles: &[Candle], params: &ParamMap) -> String {
    let mut hasher = Sha256::new();
    hasher.update(short_name.as_bytes());
    hasher.update(candles.len().to_le_bytes());
    if let Some(first) = candles.first() {
        hasher.update(first.time.to_le_bytes());
    }
    if let Some(last) = candles.last() {
        hasher.update(last.time.to_le_bytes());
        hasher.update(last.close.to_le_bytes());
    }
    let params_json = serde_json::to_string(params).unwrap_or_default();
    hasher.update(params_json.as_bytes());
    hex::encode(hasher.finalize())
}

struct CacheEntry {
    short_name: String,
    result: IndicatorResult,
    created_at: Instant,
}

/// Bounded, TTL-checked result cache with insertion-order eviction.
pub struct ResultCache {
    entries: HashMap<String, CacheEntry>,
    order: VecDeque<String>,
    capacity: usize,
    ttl: Duration,
}

impl ResultCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
            ttl,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_TTL)
    }

    /// Look up a fingerprint. Expired entries are removed on access.
    /// A hit does not refresh the entry's eviction position.
    pub fn get(&mut self, key: &str) -> Option<IndicatorResult> {
        let fresh = match self.entries.get(key) {
            Some(entry) => entry.created_at.elapsed() < self.ttl,
            None => return None,
        };

        if fresh {
            self.entries.get(key).map(|entry| entry.result.clone())
        } else {
            if let Some(expired) = self.entries.remove(key) {
                debug!(indicator = %expired.short_name, "cache entry expired");
            }
            self.order.retain(|k| k != key);
            None
        }
    }

    /// Store a result, evicting the oldest-inserted entry if at capacity.
    /// Re-inserting an existing key replaces the entry in place.
    pub fn insert(&mut self, key: String, short_name: &str, result: IndicatorResult) {
        if let Some(existing) = self.entries.get_mut(&key) {
            existing.result = result;
            existing.created_at = Instant::now();
            return;
        }

        while self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                if let Some(evicted) = self.entries.remove(&oldest) {
                    debug!(indicator = %evicted.short_name, "cache entry evicted");
                }
            } else {
                break;
            }
        }

        self.order.push_back(key.clone());
        self.entries.insert(
            key,
            CacheEntry {
                short_name: short_name.to_string(),
                result,
                created_at: Instant::now(),
            },
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An indicator wrapped with a per-instance result cache.
///
/// The cache is hidden mutable state behind a mutex, so a shared
/// `CachedIndicator` is safe across threads; callers that want lock-free
/// use keep the plain indicator instead.
pub struct CachedIndicator {
    inner: Box<dyn Indicator>,
    cache: Mutex<ResultCache>,
}

impl CachedIndicator {
    pub fn new(inner: Box<dyn Indicator>) -> Self {
        Self::with_cache(inner, ResultCache::with_defaults())
    }

    pub fn with_cache(inner: Box<dyn Indicator>, cache: ResultCache) -> Self {
        Self {
            inner,
            cache: Mutex::new(cache),
        }
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, ResultCache> {
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Calculate through the cache.
    ///
    /// Merges `params` over the defaults, fingerprints the pair, and
    /// returns the cached result on a fresh hit; otherwise computes,
    /// stores and returns.
    pub fn calculate_cached(&self, candles: &[Candle], params: &ParamMap) -> IndicatorResult {
        let merged = self.inner.merged_params(params);
        let short_name = self.inner.config().short_name;
        let key = fingerprint(short_name, candles, &merged);

        let mut cache = self.lock_cache();
        if let Some(hit) = cache.get(&key) {
            debug!(indicator = short_name, "cache hit");
            return hit;
        }

        debug!(indicator = short_name, "cache miss");
        let result = self.inner.calculate(candles, &merged);
        cache.insert(key, short_name, result.clone());
        result
    }

    /// Drop every cached entry.
    pub fn clear_cache(&self) {
        self.lock_cache().clear();
    }

    /// Number of live cache entries.
    pub fn cache_len(&self) -> usize {
        self.lock_cache().len()
    }
}

impl Indicator for CachedIndicator {
    fn config(&self) -> &IndicatorConfig {
        self.inner.config()
    }

    fn calculate(&self, candles: &[Candle], params: &ParamMap) -> IndicatorResult {
        self.inner.calculate(candles, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParamValue;

    fn candles(count: usize) -> Vec<Candle> {
        (0..count)
            .map(|i| Candle {
                time: 1_700_000_000 + i as i64 * 60,
                open: 100.0 + i as f64,
                high: 101.0 + i as f64,
                low: 99.0 + i as f64,
                close: 100.5 + i as f64,
                volume: 1000.0,
            })
            .collect()
    }

    fn result(marker: f64) -> IndicatorResult {
        IndicatorResult::new(vec![vec![marker]], vec![0])
    }

    #[test]
    fn test_fingerprint_stability() {
        let data = candles(10);
        let params = ParamMap::new();
        assert_eq!(
            fingerprint("SMA", &data, &params),
            fingerprint("SMA", &data, &params)
        );
    }

    #[test]
    fn test_fingerprint_changes_with_inputs() {
        let data = candles(10);
        let params = ParamMap::new();
        let base = fingerprint("SMA", &data, &params);

        // Different length.
        assert_ne!(base, fingerprint("SMA", &candles(11), &params));

        // Different last close.
        let mut moved = candles(10);
        moved[9].close += 0.5;
        assert_ne!(base, fingerprint("SMA", &moved, &params));

        // Different parameters.
        let mut with_period = ParamMap::new();
        with_period.insert("period".to_string(), ParamValue::Number(14.0));
        assert_ne!(base, fingerprint("SMA", &data, &with_period));

        // Different indicator.
        assert_ne!(base, fingerprint("EMA", &data, &params));
    }

    #[test]
    fn test_cache_get_and_insert() {
        let mut cache = ResultCache::with_defaults();
        assert!(cache.get("a").is_none());
        cache.insert("a".to_string(), "SMA", result(1.0));
        assert_eq!(cache.get("a").unwrap().values[0][0], 1.0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_ttl_expiry() {
        let mut cache = ResultCache::new(10, Duration::from_millis(10));
        cache.insert("a".to_string(), "SMA", result(1.0));
        std::thread::sleep(Duration::from_millis(20));
        assert!(cache.get("a").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_insertion_order_eviction_not_lru() {
        let mut cache = ResultCache::new(2, Duration::from_secs(60));
        cache.insert("a".to_string(), "SMA", result(1.0));
        cache.insert("b".to_string(), "SMA", result(2.0));

        // Touch "a" — under LRU this would protect it. It must not.
        assert!(cache.get("a").is_some());

        cache.insert("c".to_string(), "SMA", result(3.0));
        assert!(cache.get("a").is_none(), "oldest-inserted entry must go first");
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn test_reinsert_same_key_keeps_single_entry() {
        let mut cache = ResultCache::new(5, Duration::from_secs(60));
        cache.insert("a".to_string(), "SMA", result(1.0));
        cache.insert("a".to_string(), "SMA", result(2.0));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("a").unwrap().values[0][0], 2.0);
    }

    #[test]
    fn test_cache_clear() {
        let mut cache = ResultCache::with_defaults();
        cache.insert("a".to_string(), "SMA", result(1.0));
        cache.insert("b".to_string(), "SMA", result(2.0));
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get("a").is_none());
    }
}
