//! Run-once wrapper

use std::cell::OnceCell;
use tracing::trace;

/// Wrapper that runs its function on the first call only
///
/// Later calls return a clone of the first result. If the function panics,
/// nothing is stored and the next call runs it again.
pub struct Once<F, R> {
    func: F,
    result: OnceCell<R>,
}

impl<F, R> Once<F, R>
where
    F: Fn() -> R,
    R: Clone,
{
    /// Wrap `func`
    pub fn new(func: F) -> Self {
        Self {
            func,
            result: OnceCell::new(),
        }
    }

    /// Run the function if it has not run yet, then return its result
    pub fn call(&self) -> R {
        self.result
            .get_or_init(|| {
                trace!("running once-wrapped function");
                (self.func)()
            })
            .clone()
    }

    /// Check whether the function has already run
    pub fn has_run(&self) -> bool {
        self.result.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_once_runs_once() {
        let calls = Cell::new(0);
        let init = Once::new(|| {
            calls.set(calls.get() + 1);
            calls.get() * 100
        });

        assert!(!init.has_run());
        assert_eq!(init.call(), 100);
        assert_eq!(init.call(), 100);
        assert_eq!(init.call(), 100);
        assert_eq!(calls.get(), 1);
        assert!(init.has_run());
    }

    #[test]
    fn test_once_returns_first_result() {
        let counter = Cell::new(0);
        let next = Once::new(|| {
            counter.set(counter.get() + 1);
            format!("run {}", counter.get())
        });

        assert_eq!(next.call(), "run 1");
        counter.set(41);
        assert_eq!(next.call(), "run 1");
    }

    #[test]
    fn test_once_retries_after_panic() {
        let calls = Cell::new(0);
        let fragile = Once::new(|| {
            calls.set(calls.get() + 1);
            if calls.get() == 1 {
                panic!("not ready");
            }
            "ready"
        });

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| fragile.call()));
        assert!(result.is_err());
        assert!(!fragile.has_run());

        assert_eq!(fragile.call(), "ready");
        assert_eq!(fragile.call(), "ready");
        assert_eq!(calls.get(), 2);
    }
}
