//! Function helpers

use std::thread;
use std::time::Duration;
use tracing::trace;

pub use underbar_memo::{memoize, once, try_memoize, Memoized, Once, TryMemoized};

/// Wait for `wait`, then call `f` and return its result
///
/// Blocks the calling thread; nothing runs in the background.
pub fn delay<F, R>(wait: Duration, f: F) -> R
where
    F: FnOnce() -> R,
{
    trace!(?wait, "delaying call");
    thread::sleep(wait);
    f()
}
