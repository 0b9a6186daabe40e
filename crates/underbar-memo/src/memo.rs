//! Memoizing wrappers around single-argument functions

use std::cell::RefCell;
use std::hash::Hash;
use tracing::{debug, trace};

use crate::cache::MemoCache;
use crate::stats::MemoStats;

/// Cache and counters shared by both wrapper flavours
struct MemoState<K, V> {
    cache: RefCell<MemoCache<K, V>>,
    stats: MemoStats,
}

impl<K, V> MemoState<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: RefCell::new(MemoCache::with_capacity(capacity)),
            stats: MemoStats::new(),
        }
    }

    fn lookup(&self, key: &K) -> Option<V> {
        // The borrow ends before the caller runs the wrapped function
        let cached = self.cache.borrow().get(key);
        match cached {
            Some(value) => {
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                trace!(cached = self.len(), "memo miss");
                None
            }
        }
    }

    fn store(&self, key: K, value: V) {
        let inserted = self.cache.borrow_mut().insert(key, value);
        if inserted {
            self.stats.record_insert();
            trace!(cached = self.len(), "memo store");
        }
    }

    fn contains(&self, key: &K) -> bool {
        self.cache.borrow().contains(key)
    }

    fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    fn clear(&self) {
        self.cache.borrow_mut().clear();
        self.stats.reset();
    }
}

/// Wrapper that caches the results of an infallible function
///
/// The wrapped function runs at most once per distinct argument. Each wrapper
/// owns its cache; two wrappers over the same function share nothing.
///
/// ```
/// use underbar_memo::memoize;
///
/// let double = memoize(|x: &i64| x * 2);
/// assert_eq!(double.call(3), 6);
/// assert_eq!(double.call(3), 6);
/// assert_eq!(double.stats().hits(), 1);
/// ```
pub struct Memoized<F, K, V> {
    /// The function being cached
    func: F,

    state: MemoState<K, V>,
}

impl<F, K, V> Memoized<F, K, V>
where
    F: Fn(&K) -> V,
    K: Hash + Eq,
    V: Clone,
{
    /// Wrap `func` with an empty cache
    pub fn new(func: F) -> Self {
        Self::with_capacity(func, 0)
    }

    /// Wrap `func` with a cache pre-sized for `capacity` arguments
    ///
    /// # Arguments
    /// * `func` - Function to cache
    /// * `capacity` - Expected number of distinct arguments (not a limit)
    pub fn with_capacity(func: F, capacity: usize) -> Self {
        Self {
            func,
            state: MemoState::with_capacity(capacity),
        }
    }

    /// Return the cached result for `arg`, computing it on first use
    pub fn call(&self, arg: K) -> V {
        if let Some(value) = self.state.lookup(&arg) {
            return value;
        }

        let value = (self.func)(&arg);
        self.state.store(arg, value.clone());
        value
    }

    /// Check whether a result for `arg` is cached, without calling the function
    pub fn contains(&self, arg: &K) -> bool {
        self.state.contains(arg)
    }

    /// Number of cached results
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Check if nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Get cache statistics
    pub fn stats(&self) -> &MemoStats {
        &self.state.stats
    }

    /// Forget every cached result and reset the statistics
    pub fn clear(&self) {
        self.state.clear();
    }

    /// Turn the wrapper into a plain closure that owns the cache
    pub fn into_fn(self) -> impl Fn(K) -> V {
        move |arg| self.call(arg)
    }
}

/// Wrapper that caches only the successful results of a fallible function
///
/// Errors are handed back to the caller untouched and never cached, so a
/// failing argument reaches the wrapped function again on the next call.
pub struct TryMemoized<F, K, V> {
    /// The function being cached
    func: F,

    state: MemoState<K, V>,
}

impl<F, K, V> TryMemoized<F, K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    /// Wrap `func` with an empty cache
    pub fn new(func: F) -> Self {
        Self::with_capacity(func, 0)
    }

    /// Wrap `func` with a cache pre-sized for `capacity` arguments
    pub fn with_capacity(func: F, capacity: usize) -> Self {
        Self {
            func,
            state: MemoState::with_capacity(capacity),
        }
    }

    /// Return the cached result for `arg`, or call the function
    ///
    /// # Returns
    /// * `Ok(V)` - Cached or freshly computed result
    /// * `Err(E)` - The wrapped function's own error, unchanged
    pub fn call<E>(&self, arg: K) -> Result<V, E>
    where
        F: Fn(&K) -> Result<V, E>,
    {
        if let Some(value) = self.state.lookup(&arg) {
            return Ok(value);
        }

        match (self.func)(&arg) {
            Ok(value) => {
                self.state.store(arg, value.clone());
                Ok(value)
            }
            Err(err) => {
                self.state.stats.record_failure();
                debug!(
                    failures = self.state.stats.failures(),
                    "memoized call failed, not caching"
                );
                Err(err)
            }
        }
    }

    /// Check whether a result for `arg` is cached, without calling the function
    pub fn contains(&self, arg: &K) -> bool {
        self.state.contains(arg)
    }

    /// Number of cached results
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Check if nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Get cache statistics
    pub fn stats(&self) -> &MemoStats {
        &self.state.stats
    }

    /// Forget every cached result and reset the statistics
    pub fn clear(&self) {
        self.state.clear();
    }

    /// Turn the wrapper into a plain closure that owns the cache
    pub fn into_fn<E>(self) -> impl Fn(K) -> Result<V, E>
    where
        F: Fn(&K) -> Result<V, E>,
    {
        move |arg| self.call(arg)
    }
}
