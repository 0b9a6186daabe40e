//! # underbar-memo
//!
//! Function wrappers that remember what they computed.
//!
//! ## Architecture
//! - **MemoCache**: AHash map from argument to result, never evicted
//! - **Memoized / TryMemoized**: wrapper owning one cache and the function
//! - **Once**: wrapper that keeps the result of a single run
//!
//! Wrappers are single-threaded: they use `Cell`/`RefCell` internally and are
//! not `Sync`.

#![warn(missing_docs)]

mod cache;
mod memo;
mod once;
mod stats;

pub use memo::{Memoized, TryMemoized};
pub use once::Once;
pub use stats::MemoStats;

use std::hash::Hash;

/// Cache the results of `func`, keyed by argument value
///
/// Keys must be `Eq + Hash` (integers, strings, booleans and the like).
pub fn memoize<F, K, V>(func: F) -> Memoized<F, K, V>
where
    F: Fn(&K) -> V,
    K: Hash + Eq,
    V: Clone,
{
    Memoized::new(func)
}

/// Cache the successful results of `func`; errors pass through uncached
pub fn try_memoize<F, K, V, E>(func: F) -> TryMemoized<F, K, V>
where
    F: Fn(&K) -> Result<V, E>,
    K: Hash + Eq,
    V: Clone,
{
    TryMemoized::new(func)
}

/// Run `func` at most once, replaying its result on later calls
pub fn once<F, R>(func: F) -> Once<F, R>
where
    F: Fn() -> R,
    R: Clone,
{
    Once::new(func)
}
