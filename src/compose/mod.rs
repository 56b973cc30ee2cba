//! Function composition utilities.
//!
//! This module chains callables together, including curried functions whose
//! arguments have not all arrived yet.
//!
//! # Overview
//!
//! - [`compose`]: Compose two functions right-to-left into a [`ComposedFunction`]
//! - [`compose!`](crate::compose!): Compose any number of plain functions into a closure
//! - [`identity`]: The unit of composition
//!
//! # Mathematical Background
//!
//! Given `f: B -> C` and `g: A -> B`, the composition `(f . g): A -> C` is
//! defined as:
//!
//! ```text
//! (f . g)(x) = f(g(x))
//! ```
//!
//! When `g` is a curried function, `x` is an argument list. If it completes
//! `g`, `f` runs immediately on the result; otherwise the composition is
//! deferred and returned as a curried function awaiting the rest.
//!
//! # Laws
//!
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`
//!
//! # Examples
//!
//! ```
//! use lambars_curry::compose::compose;
//! use lambars_curry::curry::{Arguments, CurriedFunction};
//!
//! fn three(arguments: &mut Arguments<'_, i32>) -> i32 {
//!     arguments[0] + arguments[1] * arguments[2]
//! }
//!
//! let negated = compose(|value: i32| -value, CurriedFunction::named("three", 3, three));
//!
//! let partial = negated.apply([1]).unwrap().partial().unwrap();
//! assert_eq!(partial.call([2, 3]).unwrap().complete(), Some(-7));
//! ```

mod compose_macro;
mod composed;
mod utils;

pub use composed::{ComposedFunction, compose};
pub use utils::identity;
