//! The curried function and its call protocol.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::arguments::{Arguments, BoundArguments};
use super::error::{ANONYMOUS_NAME, CurryError};
use crate::logging::{debug, trace};

/// Something a curried function can eventually invoke.
///
/// Every `Fn(&mut Arguments<'_, A>) -> R` implements this trait, as does
/// [`ComposedFunction`](crate::compose::ComposedFunction) when its inner
/// function does. Implement it directly for targets that carry their own state.
///
/// # Examples
///
/// ```rust
/// use lambars_curry::curry::{Arguments, Callable, CurriedFunction};
///
/// struct Scale(i32);
///
/// impl Callable<i32> for Scale {
///     type Output = i32;
///
///     fn invoke(&self, arguments: &mut Arguments<'_, i32>) -> i32 {
///         arguments.iter().map(|value| value * self.0).sum()
///     }
/// }
///
/// let curried: CurriedFunction<i32, i32> = CurriedFunction::from_callable(2, Scale(10));
/// assert_eq!(curried.call([1, 2]).unwrap().complete(), Some(30));
/// ```
pub trait Callable<A> {
    /// The result of invoking the target.
    type Output;

    /// Invokes the target with the complete argument list.
    fn invoke(&self, arguments: &mut Arguments<'_, A>) -> Self::Output;
}

impl<A, R, F> Callable<A> for F
where
    F: Fn(&mut Arguments<'_, A>) -> R,
{
    type Output = R;

    #[inline]
    fn invoke(&self, arguments: &mut Arguments<'_, A>) -> R {
        self(arguments)
    }
}

type SharedTarget<A, R> = Arc<dyn Callable<A, Output = R> + Send + Sync>;

/// The outcome of a successful call to a [`CurriedFunction`].
#[derive(Clone, Debug)]
pub enum Application<A, R> {
    /// The remaining arity was met and the target returned this value.
    Complete(R),
    /// Fewer arguments than remain were supplied.
    Partial(CurriedFunction<A, R>),
}

impl<A, R> Application<A, R> {
    /// Returns `true` if the target was invoked.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns `true` if the call produced a partially applied function.
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        matches!(self, Self::Partial(_))
    }

    /// Returns the target's result, if it was invoked.
    pub fn complete(self) -> Option<R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// Returns the partially applied function, if one was produced.
    pub fn partial(self) -> Option<CurriedFunction<A, R>> {
        match self {
            Self::Complete(_) => None,
            Self::Partial(function) => Some(function),
        }
    }
}

/// A function of fixed arity that accepts its arguments in any number of
/// calls.
///
/// Calling with fewer arguments than remain returns a new `CurriedFunction`
/// holding everything supplied so far. Calling with exactly the remaining
/// count invokes the target. Calling with more fails with
/// [`CurryError::ArityExceeded`].
///
/// A `CurriedFunction` is immutable. Cloning it, or producing a partial
/// application from it, shares the target by reference count.
///
/// # Examples
///
/// ```rust
/// use lambars_curry::curry::{Arguments, CurriedFunction};
///
/// fn three(arguments: &mut Arguments<'_, i32>) -> i32 {
///     arguments[0] + arguments[1] * arguments[2]
/// }
///
/// let three = CurriedFunction::named("three", 3, three);
///
/// assert_eq!(three.call([1, 2, 3]).unwrap().complete(), Some(7));
///
/// let one = three.call([1]).unwrap().partial().unwrap();
/// let one_two = one.call([2]).unwrap().partial().unwrap();
/// assert_eq!(one_two.call([3]).unwrap().complete(), Some(7));
///
/// let error = one.call([2, 3, 4]).unwrap_err();
/// assert_eq!(error.to_string(), "three, expected 2 args but got 3");
/// ```
pub struct CurriedFunction<A, R> {
    target: SharedTarget<A, R>,
    arity: usize,
    accumulated: BoundArguments<A>,
    name: Option<Arc<str>>,
}

impl<A, R> CurriedFunction<A, R> {
    /// Wraps a target function with a declared arity.
    ///
    /// The arity is not checked against anything; it is simply the number of
    /// arguments that must accumulate before the target runs.
    pub fn new<F>(arity: usize, target: F) -> Self
    where
        F: Fn(&mut Arguments<'_, A>) -> R + Send + Sync + 'static,
    {
        Self::from_callable(arity, target)
    }

    /// Wraps a target function with a declared arity and a display name.
    pub fn named<F>(name: &str, arity: usize, target: F) -> Self
    where
        F: Fn(&mut Arguments<'_, A>) -> R + Send + Sync + 'static,
    {
        Self::new(arity, target).with_name(name)
    }

    /// Wraps any [`Callable`] with a declared arity.
    pub fn from_callable<C>(arity: usize, callable: C) -> Self
    where
        C: Callable<A, Output = R> + Send + Sync + 'static,
    {
        trace!(arity, "curried function declared");
        Self {
            target: Arc::new(callable),
            arity,
            accumulated: BoundArguments::new(),
            name: None,
        }
    }

    /// Wraps a target function whose arity is the length of a parameter list.
    ///
    /// ```rust
    /// use lambars_curry::curry::{Arguments, CurriedFunction};
    ///
    /// let area = CurriedFunction::from_parameters(&["width", "height"], |arguments: &mut Arguments<'_, u32>| {
    ///     arguments[0] * arguments[1]
    /// });
    /// assert_eq!(area.arity(), 2);
    /// ```
    pub fn from_parameters<F>(parameter_names: &[&str], target: F) -> Self
    where
        F: Fn(&mut Arguments<'_, A>) -> R + Send + Sync + 'static,
    {
        Self::new(parameter_names.len(), target)
    }

    /// Returns a copy of this function carrying `name` in its diagnostics.
    #[must_use]
    pub fn with_name(self, name: &str) -> Self {
        Self {
            name: Some(Arc::from(name)),
            ..self
        }
    }

    /// Returns the declared arity.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Returns how many more arguments are needed before the target runs.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.arity - self.accumulated.len()
    }

    /// Returns the arguments accumulated by earlier partial calls.
    #[must_use]
    pub fn accumulated(&self) -> &[A] {
        &self.accumulated
    }

    /// Returns the display name, if one was given.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the display name, or [`ANONYMOUS_NAME`] for unnamed functions.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or(ANONYMOUS_NAME)
    }

    /// Returns `true` if both functions invoke the same target allocation.
    ///
    /// Every partial application and alias of a curried function shares its
    /// target, so this is the identity check for "the same declared function".
    #[must_use]
    pub fn shares_target(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.target, &other.target)
    }

    /// Post-composes `function` onto the target's result.
    ///
    /// The returned curried function keeps this function's arity, name and
    /// accumulated arguments, so composition over a partial application stays
    /// deferred until the remaining arguments arrive.
    ///
    /// ```rust
    /// use lambars_curry::curry::{Arguments, CurriedFunction};
    ///
    /// fn add(arguments: &mut Arguments<'_, i32>) -> i32 {
    ///     arguments[0] + arguments[1]
    /// }
    ///
    /// let describe = CurriedFunction::new(2, add).map(|sum| format!("sum = {sum}"));
    /// let partial = describe.call([1]).unwrap().partial().unwrap();
    /// assert_eq!(partial.call([2]).unwrap().complete().as_deref(), Some("sum = 3"));
    /// ```
    #[cfg(feature = "compose")]
    pub fn map<S, F>(self, function: F) -> CurriedFunction<A, S>
    where
        A: 'static,
        R: 'static,
        F: Fn(R) -> S + Send + Sync + 'static,
    {
        let target = self.target;
        let inner = move |arguments: &mut Arguments<'_, A>| target.invoke(arguments);
        CurriedFunction {
            target: Arc::new(crate::compose::compose(function, inner)),
            arity: self.arity,
            accumulated: self.accumulated,
            name: self.name,
        }
    }

    fn exceeded(&self, got: usize) -> CurryError {
        let expected = self.remaining();
        debug!(
            name = self.display_name(),
            expected,
            got,
            "curried function called with too many arguments"
        );
        CurryError::arity_exceeded(self.display_name(), expected, got, self.accumulated.len())
    }

    fn extended(&self, bound: BoundArguments<A>) -> Self {
        trace!(
            name = self.display_name(),
            arity = self.arity,
            bound = bound.len(),
            "partially applied"
        );
        Self {
            target: Arc::clone(&self.target),
            arity: self.arity,
            accumulated: bound,
            name: self.name.clone(),
        }
    }
}

impl<A: Clone, R> CurriedFunction<A, R> {
    /// Calls the function with owned arguments.
    ///
    /// The target sees these values as its live arguments, but since they are
    /// owned by the call, any changes it makes are discarded.
    ///
    /// `arguments` must be finite. At most one argument beyond the remaining
    /// arity is buffered; any further ones are only counted for the error.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::ArityExceeded`] if more arguments are supplied
    /// than remain.
    pub fn call<I>(&self, arguments: I) -> Result<Application<A, R>, CurryError>
    where
        I: IntoIterator<Item = A>,
    {
        let remaining = self.remaining();
        let mut arguments = arguments.into_iter();
        let mut supplied: BoundArguments<A> = arguments
            .by_ref()
            .take(remaining.saturating_add(1))
            .collect();
        match supplied.len().cmp(&remaining) {
            Ordering::Greater => Err(self.exceeded(supplied.len() + arguments.count())),
            Ordering::Equal => Ok(Application::Complete(self.invoke_with(&mut supplied))),
            Ordering::Less => {
                let mut bound = self.accumulated.clone();
                bound.extend(supplied);
                Ok(Application::Partial(self.extended(bound)))
            }
        }
    }

    /// Calls the function with borrowed arguments.
    ///
    /// If this call completes the function, the target receives `arguments`
    /// as its live arguments and anything it writes to them is visible here.
    /// If it is a partial call, the values are copied into the returned
    /// function and `arguments` is not referenced again.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::ArityExceeded`] if more arguments are supplied
    /// than remain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_curry::curry::{Arguments, CurriedFunction};
    ///
    /// fn swap(arguments: &mut Arguments<'_, i32>) {
    ///     arguments.live_mut().swap(0, 1);
    /// }
    ///
    /// let swap = CurriedFunction::new(2, swap);
    /// let mut pair = [1, 2];
    /// swap.call_with(&mut pair).unwrap();
    /// assert_eq!(pair, [2, 1]);
    /// ```
    pub fn call_with(&self, arguments: &mut [A]) -> Result<Application<A, R>, CurryError> {
        match arguments.len().cmp(&self.remaining()) {
            Ordering::Greater => Err(self.exceeded(arguments.len())),
            Ordering::Equal => Ok(Application::Complete(self.invoke_with(arguments))),
            Ordering::Less => {
                let mut bound = self.accumulated.clone();
                bound.extend(arguments.iter().cloned());
                Ok(Application::Partial(self.extended(bound)))
            }
        }
    }

    /// Calls the function with no arguments.
    ///
    /// For a function that still needs arguments this returns an equivalent
    /// function sharing the same target. For a function of arity zero it
    /// invokes the target.
    ///
    /// ```rust
    /// use lambars_curry::curry::{Application, Arguments, CurriedFunction};
    ///
    /// let add = CurriedFunction::new(2, |arguments: &mut Arguments<'_, i32>| arguments[0] + arguments[1]);
    /// let alias = add.alias().partial().unwrap();
    /// assert!(alias.shares_target(&add));
    ///
    /// let answer = CurriedFunction::new(0, |_: &mut Arguments<'_, i32>| 42);
    /// assert_eq!(answer.alias().complete(), Some(42));
    /// ```
    pub fn alias(&self) -> Application<A, R> {
        if self.remaining() == 0 {
            Application::Complete(self.invoke_with(&mut []))
        } else {
            Application::Partial(self.extended(self.accumulated.clone()))
        }
    }

    fn invoke_with(&self, live: &mut [A]) -> R {
        trace!(
            name = self.display_name(),
            arity = self.arity,
            bound = self.accumulated.len(),
            supplied = live.len(),
            "invoking curried function"
        );
        let mut arguments = Arguments::new(self.accumulated.clone(), live);
        self.target.invoke(&mut arguments)
    }
}

impl<A: Clone, R> Clone for CurriedFunction<A, R> {
    fn clone(&self) -> Self {
        Self {
            target: Arc::clone(&self.target),
            arity: self.arity,
            accumulated: self.accumulated.clone(),
            name: self.name.clone(),
        }
    }
}

impl<A: fmt::Debug, R> fmt::Debug for CurriedFunction<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("CurriedFunction")
            .field("name", &self.display_name())
            .field("arity", &self.arity)
            .field("accumulated", &self.accumulated.as_slice())
            .finish_non_exhaustive()
    }
}

/// Wraps `target` as a curried function of the given arity.
///
/// This is the entry point for a declaration layer that knows a function's
/// parameter count and, optionally, its name. Any [`Callable`] is accepted,
/// including a [`ComposedFunction`](crate::compose::ComposedFunction).
///
/// # Examples
///
/// ```rust
/// use lambars_curry::curry::{Arguments, make_curried};
///
/// let add = make_curried(
///     |arguments: &mut Arguments<'_, i32>| arguments[0] + arguments[1],
///     2,
///     Some("add"),
/// );
///
/// assert_eq!(add.display_name(), "add");
/// assert_eq!(add.call([1, 2]).unwrap().complete(), Some(3));
/// ```
pub fn make_curried<A, R, C>(target: C, arity: usize, name: Option<&str>) -> CurriedFunction<A, R>
where
    C: Callable<A, Output = R> + Send + Sync + 'static,
{
    let function = CurriedFunction::from_callable(arity, target);
    match name {
        Some(name) => function.with_name(name),
        None => function,
    }
}

static_assertions::assert_impl_all!(CurriedFunction<i32, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Application<String, String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn three(arguments: &mut Arguments<'_, i32>) -> i32 {
        arguments[0] + arguments[1] * arguments[2]
    }

    fn count(arguments: &mut Arguments<'_, i32>) -> usize {
        arguments.len()
    }

    #[rstest]
    fn test_full_application_invokes() {
        let curried = CurriedFunction::named("three", 3, three);
        assert_eq!(curried.call([1, 2, 3]).unwrap().complete(), Some(7));
    }

    #[rstest]
    fn test_partial_application_accumulates() {
        let curried = CurriedFunction::named("three", 3, three);
        let partial = curried.call([1, 2]).unwrap().partial().unwrap();

        assert_eq!(partial.accumulated(), &[1, 2]);
        assert_eq!(partial.remaining(), 1);
        assert_eq!(partial.arity(), 3);
        assert_eq!(partial.name(), Some("three"));
        assert!(partial.shares_target(&curried));
    }

    #[rstest]
    fn test_too_many_arguments() {
        let curried = CurriedFunction::named("three", 3, three);
        let error = curried.call([1, 2, 3, 4]).unwrap_err();

        assert_eq!(error, CurryError::arity_exceeded("three", 3, 4, 0));
    }

    #[rstest]
    fn test_anonymous_name_in_error() {
        let curried = CurriedFunction::new(1, count);
        let error = curried.call([1, 2]).unwrap_err();

        assert_eq!(error.to_string(), "<anonymous>, expected 1 args but got 2");
    }

    #[rstest]
    fn test_zero_arity_invokes_on_empty_call() {
        let curried = CurriedFunction::new(0, count);

        assert_eq!(curried.call([]).unwrap().complete(), Some(0));
        assert!(curried.call([1]).is_err());
    }

    #[rstest]
    fn test_empty_call_returns_equivalent_function() {
        let curried = CurriedFunction::new(2, count);
        let alias = curried.call([]).unwrap().partial().unwrap();

        assert!(alias.shares_target(&curried));
        assert_eq!(alias.remaining(), 2);
        assert_eq!(alias.call([1, 2]).unwrap().complete(), Some(2));
    }

    #[rstest]
    fn test_partial_is_reusable() {
        let curried = CurriedFunction::new(3, three);
        let with_one = curried.call([1]).unwrap().partial().unwrap();

        assert_eq!(with_one.call([2, 3]).unwrap().complete(), Some(7));
        assert_eq!(with_one.call([4, 5]).unwrap().complete(), Some(21));
    }

    #[rstest]
    fn test_application_accessors() {
        let complete: Application<i32, i32> = Application::Complete(1);
        assert!(complete.is_complete());
        assert!(!complete.is_partial());

        let partial = CurriedFunction::new(2, three).alias();
        assert!(partial.is_partial());
        assert!(partial.complete().is_none());
    }

    #[rstest]
    fn test_debug_output() {
        let curried = CurriedFunction::named("three", 3, three);
        let partial = curried.call([1]).unwrap().partial().unwrap();
        let debug_string = format!("{partial:?}");

        assert!(debug_string.contains("CurriedFunction"));
        assert!(debug_string.contains("three"));
        assert!(debug_string.contains("[1]"));
    }
}
