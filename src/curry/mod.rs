//! Runtime currying of fixed-arity functions.
//!
//! A [`CurriedFunction`] wraps a target together with a declared arity and
//! accepts its arguments spread across any number of calls.
//!
//! # Overview
//!
//! - [`CurriedFunction`]: The curried function itself
//! - [`make_curried`]: Construction from a target, an arity and an optional name
//! - [`Arguments`]: What the target receives when the arity is met
//! - [`Application`]: The result of a successful call, complete or partial
//! - [`Callable`]: The trait every target implements
//! - [`CurryError`]: Raised when a call supplies too many arguments
//!
//! # Call Protocol
//!
//! For a call supplying `got` arguments to a function with `expected`
//! arguments remaining:
//!
//! ```text
//! got >  expected  =>  Err(ArityExceeded)
//! got == expected  =>  Ok(Complete(target(bound ++ arguments)))
//! got <  expected  =>  Ok(Partial(function with bound ++ arguments))
//! ```
//!
//! # Argument Passing
//!
//! Arguments given to [`CurriedFunction::call_with`] on the completing call
//! are lent to the target mutably, so the target can write back to the caller.
//! Arguments captured by earlier partial calls are copied into every
//! invocation and never alias the caller that originally supplied them.
//!
//! # Examples
//!
//! ```rust
//! use lambars_curry::curry::{Arguments, CurriedFunction};
//!
//! fn three(arguments: &mut Arguments<'_, i32>) -> i32 {
//!     arguments[0] + arguments[1] * arguments[2]
//! }
//!
//! let three = CurriedFunction::named("three", 3, three);
//!
//! let direct = three.call([1, 2, 3]).unwrap().complete();
//! let stepwise = three
//!     .call([1]).unwrap().partial().unwrap()
//!     .call([2]).unwrap().partial().unwrap()
//!     .call([3]).unwrap().complete();
//!
//! assert_eq!(direct, Some(7));
//! assert_eq!(direct, stepwise);
//! ```

mod arguments;
mod error;
mod function;

pub use arguments::Arguments;
pub use error::{ANONYMOUS_NAME, CurryError};
pub use function::{Application, Callable, CurriedFunction, make_curried};
