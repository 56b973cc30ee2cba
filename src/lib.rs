//! # lambars-curry
//!
//! Runtime currying and function composition for Rust.
//!
//! ## Overview
//!
//! A curried function wraps a target function together with a declared arity.
//! Calling it with fewer arguments than remain returns a new curried function
//! that remembers what it has been given; calling it with exactly the remaining
//! count invokes the target; calling it with more is an error.
//!
//! - **Curry Engine**: [`CurriedFunction`](curry::CurriedFunction),
//!   [`Arguments`](curry::Arguments), [`make_curried`](curry::make_curried)
//! - **Function Composition**: [`compose`](compose::compose) and `compose!`
//!
//! ## Feature Flags
//!
//! - `curry`: The curry engine
//! - `compose`: Function composition utilities
//! - `tracing`: Emit `tracing` events from the curry engine
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_curry::prelude::*;
//!
//! fn three(arguments: &mut Arguments<'_, i32>) -> i32 {
//!     arguments[0] + arguments[1] * arguments[2]
//! }
//!
//! let three = CurriedFunction::named("three", 3, three);
//!
//! let with_one = three.call([1]).unwrap().partial().unwrap();
//! assert_eq!(with_one.call([2, 3]).unwrap().complete(), Some(7));
//!
//! let error = three.call([1, 2, 3, 4]).unwrap_err();
//! assert_eq!(error.to_string(), "three, expected 3 args but got 4");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use lambars_curry::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "curry")]
    pub use crate::curry::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

mod logging;

#[cfg(feature = "curry")]
pub mod curry;

#[cfg(feature = "compose")]
pub mod compose;
