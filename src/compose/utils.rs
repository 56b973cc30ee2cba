//! Helper functions for function composition.

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose(identity, f)` is equivalent to `f`
/// - `compose(f, identity)` is equivalent to `f`
///
/// In combinatory logic, this is known as the I combinator.
///
/// # Examples
///
/// ```
/// use lambars_curry::compose::{compose, identity};
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(compose(identity, double).call(5), double(5));
/// assert_eq!(compose(double, identity).call(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}
