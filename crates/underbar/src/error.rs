//! Error types for underbar

use std::fmt;

/// Result type alias for underbar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the helpers themselves
///
/// Errors produced by caller-supplied functions are never wrapped in this
/// type; memoized wrappers hand them back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two values of a sort property cannot be ordered against each other
    Incomparable {
        /// Property being sorted on
        property: String,
    },

    /// Element at this index is not an object
    NotAnObject(usize),

    /// Root value is not an array
    NotAnArray,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Incomparable { property } => {
                write!(f, "Cannot order values of property '{}'", property)
            }
            Error::NotAnObject(index) => write!(f, "Element {} is not an object", index),
            Error::NotAnArray => write!(f, "Value is not an array"),
        }
    }
}

impl std::error::Error for Error {}
