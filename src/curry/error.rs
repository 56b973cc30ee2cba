//! Error types for the curry engine.

use thiserror::Error;

/// Name used in diagnostics for curried functions declared without a name.
pub const ANONYMOUS_NAME: &str = "<anonymous>";

/// Represents errors raised when invoking a curried function.
///
/// Passing fewer arguments than remain is never an error (that is partial
/// application), and passing exactly the remaining count invokes the target.
/// The only failure is supplying too many.
///
/// # Examples
///
/// ```rust
/// use lambars_curry::curry::CurryError;
///
/// let error = CurryError::ArityExceeded {
///     name: "three".to_string(),
///     expected: 2,
///     got: 3,
///     bound: 1,
/// };
/// assert_eq!(error.to_string(), "three, expected 2 args but got 3");
/// assert_eq!(error.declared_arity(), 3);
/// assert_eq!(error.total_supplied(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CurryError {
    /// A call supplied more arguments than the curried function had remaining.
    #[error("{name}, expected {expected} args but got {got}")]
    ArityExceeded {
        /// Display name of the curried function, or [`ANONYMOUS_NAME`].
        name: String,
        /// Arity remaining at the failing call.
        expected: usize,
        /// Number of arguments the failing call supplied.
        got: usize,
        /// Number of arguments accumulated by earlier partial calls.
        bound: usize,
    },
}

impl CurryError {
    /// Creates an `ArityExceeded` error.
    #[must_use]
    pub fn arity_exceeded(name: &str, expected: usize, got: usize, bound: usize) -> Self {
        Self::ArityExceeded {
            name: name.to_string(),
            expected,
            got,
            bound,
        }
    }

    /// Returns the display name of the function that failed.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::ArityExceeded { name, .. } => name,
        }
    }

    /// Returns the arity the function was originally declared with.
    #[must_use]
    pub const fn declared_arity(&self) -> usize {
        match self {
            Self::ArityExceeded {
                expected, bound, ..
            } => *expected + *bound,
        }
    }

    /// Returns the cumulative argument count, including bound arguments.
    #[must_use]
    pub const fn total_supplied(&self) -> usize {
        match self {
            Self::ArityExceeded { got, bound, .. } => *got + *bound,
        }
    }
}
