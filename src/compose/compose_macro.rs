//! The `compose!` macro for chaining more than two functions.
//!
//! This module provides the [`compose!`] macro which composes functions
//! from right to left on top of [`compose`](crate::compose::compose).

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`.
///
/// Each step is built with [`compose`](crate::compose::compose) and turned
/// into an ordinary closure, so the result can be called directly, stored,
/// or passed to iterator adapters.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// # Examples
///
/// ```
/// use lambars_curry::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // add_one(double(square(3))) = add_one(double(9)) = add_one(18) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed(3), 19);
/// ```
///
/// ## Over curried functions
///
/// ```
/// use lambars_curry::compose;
/// use lambars_curry::curry::{Arguments, CurriedFunction, CurryError};
///
/// fn add(arguments: &mut Arguments<'_, i32>) -> i32 {
///     arguments[0] + arguments[1]
/// }
///
/// let add = CurriedFunction::named("add", 2, add);
/// let add_ten = add.call([10]).unwrap().partial().unwrap();
///
/// let apply_add_ten = |value: i32| -> Result<i32, CurryError> {
///     Ok(add_ten.call([value])?.complete().unwrap_or_default())
/// };
/// let describe = compose!(|result: Result<i32, CurryError>| format!("{result:?}"), apply_add_ten);
///
/// assert_eq!(describe(5), "Ok(15)");
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {
        $crate::compose::compose($outer_function, $inner_function).into_fn()
    };

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::compose(
            $outer_function,
            $crate::compose!($($remaining_functions),+),
        )
        .into_fn()
    };
}
