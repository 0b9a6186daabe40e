//! # underbar
//!
//! Small functional helpers for sequences, objects and functions.
//!
//! ## Layout
//! - **collections**: slice helpers (`first`, `filter`, `uniq`, `zip`, ...)
//! - **objects**: JSON object merging (`extend`, `defaults`)
//! - **functions**: `delay`, plus the memoizing wrappers from `underbar-memo`
//!
//! The helpers are independent of each other and keep no shared state.
//! The only stateful pieces are the memoizing wrappers, whose caches belong to
//! the wrapper value that `memoize` returns.

#![warn(missing_docs)]

pub mod collections;
mod error;
pub mod functions;
pub mod objects;

pub use error::{Error, Result};
pub use functions::{delay, memoize, once, try_memoize, Memoized, Once, TryMemoized};
pub use underbar_memo::MemoStats;
