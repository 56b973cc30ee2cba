//! The [`compose`] function and the [`ComposedFunction`] it returns.

use crate::curry::{Application, Arguments, Callable, CurriedFunction, CurryError};

/// Two callables chained so that `outer` receives whatever `inner` returns.
///
/// Invoking a `ComposedFunction` computes `outer(inner(input))`. It performs
/// no arity checking of its own: if either side is a curried function, any
/// arity mismatch surfaces as a [`CurryError`] when that side is reached.
///
/// A `ComposedFunction` can be used in three ways:
///
/// - [`call`](Self::call) for plain unary functions
/// - as a [`Callable`] target, handed to [`CurriedFunction::from_callable`]
/// - [`apply`](Self::apply) when `inner` is itself a [`CurriedFunction`]
#[derive(Clone, Copy, Debug)]
pub struct ComposedFunction<O, I> {
    outer: O,
    inner: I,
}

/// Composes two functions from right to left.
///
/// `compose(f, g)` returns a [`ComposedFunction`] computing `f(g(x))`.
///
/// # Examples
///
/// ```
/// use lambars_curry::compose::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose(add_one, double);
/// assert_eq!(composed.call(5), 11); // add_one(double(5)) = add_one(10) = 11
/// ```
///
/// ## As a curried target
///
/// ```
/// use lambars_curry::compose::compose;
/// use lambars_curry::curry::{Arguments, CurriedFunction};
///
/// fn sum(arguments: &mut Arguments<'_, i32>) -> i32 {
///     arguments.iter().sum()
/// }
///
/// let describe = compose(|total: i32| format!("total = {total}"), sum);
/// let curried: CurriedFunction<i32, String> = CurriedFunction::from_callable(3, describe);
///
/// let partial = curried.call([1, 2]).unwrap().partial().unwrap();
/// assert_eq!(partial.call([3]).unwrap().complete().as_deref(), Some("total = 6"));
/// ```
#[inline]
pub const fn compose<O, I>(outer: O, inner: I) -> ComposedFunction<O, I> {
    ComposedFunction { outer, inner }
}

impl<O, I> ComposedFunction<O, I> {
    /// Returns the function applied last.
    pub const fn outer(&self) -> &O {
        &self.outer
    }

    /// Returns the function applied first.
    pub const fn inner(&self) -> &I {
        &self.inner
    }

    /// Applies the composition to a single input.
    #[inline]
    pub fn call<X, Y, Z>(&self, input: X) -> Z
    where
        I: Fn(X) -> Y,
        O: Fn(Y) -> Z,
    {
        (self.outer)((self.inner)(input))
    }

    /// Converts the composition into an ordinary closure.
    ///
    /// ```
    /// use lambars_curry::compose::compose;
    ///
    /// let shout = compose(|text: String| text + "!", |text: &str| text.to_uppercase()).into_fn();
    /// let shouted: Vec<String> = ["hi", "yo"].into_iter().map(shout).collect();
    /// assert_eq!(shouted, vec!["HI!", "YO!"]);
    /// ```
    pub fn into_fn<X, Y, Z>(self) -> impl Fn(X) -> Z
    where
        I: Fn(X) -> Y,
        O: Fn(Y) -> Z,
    {
        let Self { outer, inner } = self;
        move |input| outer(inner(input))
    }
}

impl<A, B, O> ComposedFunction<O, CurriedFunction<A, B>>
where
    A: Clone + 'static,
    B: 'static,
{
    /// Calls the inner curried function and passes a complete result through
    /// `outer`.
    ///
    /// If the call is partial, the composition is deferred: the returned
    /// curried function applies `outer` once the inner function's remaining
    /// arguments arrive.
    ///
    /// # Errors
    ///
    /// Returns the inner function's [`CurryError::ArityExceeded`] unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambars_curry::compose::compose;
    /// use lambars_curry::curry::{Arguments, CurriedFunction};
    ///
    /// fn add(arguments: &mut Arguments<'_, i32>) -> i32 {
    ///     arguments[0] + arguments[1]
    /// }
    ///
    /// let doubled_sum = compose(|sum: i32| sum * 2, CurriedFunction::named("add", 2, add));
    ///
    /// assert_eq!(doubled_sum.apply([3, 4]).unwrap().complete(), Some(14));
    ///
    /// let deferred = doubled_sum.apply([3]).unwrap().partial().unwrap();
    /// assert_eq!(deferred.call([4]).unwrap().complete(), Some(14));
    ///
    /// let error = doubled_sum.apply([1, 2, 3]).unwrap_err();
    /// assert_eq!(error.to_string(), "add, expected 2 args but got 3");
    /// ```
    pub fn apply<C, T>(&self, arguments: T) -> Result<Application<A, C>, CurryError>
    where
        O: Fn(B) -> C + Clone + Send + Sync + 'static,
        T: IntoIterator<Item = A>,
    {
        match self.inner.call(arguments)? {
            Application::Complete(result) => Ok(Application::Complete((self.outer)(result))),
            Application::Partial(partial) => {
                Ok(Application::Partial(partial.map(self.outer.clone())))
            }
        }
    }

    /// Converts the composition into a single curried function with the
    /// inner function's arity, name and accumulated arguments.
    pub fn into_curried<C>(self) -> CurriedFunction<A, C>
    where
        O: Fn(B) -> C + Send + Sync + 'static,
    {
        self.inner.map(self.outer)
    }
}

impl<A, Z, O, I> Callable<A> for ComposedFunction<O, I>
where
    I: Callable<A>,
    O: Fn(I::Output) -> Z,
{
    type Output = Z;

    #[inline]
    fn invoke(&self, arguments: &mut Arguments<'_, A>) -> Z {
        (self.outer)(self.inner.invoke(arguments))
    }
}
