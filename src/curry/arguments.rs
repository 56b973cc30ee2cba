//! The argument view handed to a curried function's target.
//!
//! A target never sees the curried function's own storage. On the completing
//! call it receives an [`Arguments`] made of two parts:
//!
//! - **bound**: fresh copies of the values captured by earlier partial calls
//! - **live**: the completing call's own arguments, borrowed mutably
//!
//! Writes through the live part reach the caller. Writes through the bound
//! part are local to the invocation.

use std::iter::Chain;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use smallvec::SmallVec;

/// Inline capacity of the bound-argument buffer.
pub(crate) const INLINE_ARGUMENTS: usize = 4;

/// Storage for arguments captured by partial application.
pub(crate) type BoundArguments<A> = SmallVec<[A; INLINE_ARGUMENTS]>;

/// The full argument list of a completing call.
///
/// Indexing is over the logical concatenation `bound ++ live`, so a target
/// reads its parameters by position without caring which call supplied them.
///
/// # Examples
///
/// ```rust
/// use lambars_curry::curry::{Arguments, CurriedFunction};
///
/// fn describe(arguments: &mut Arguments<'_, i32>) -> (usize, usize) {
///     (arguments.bound().len(), arguments.live().len())
/// }
///
/// let curried = CurriedFunction::new(3, describe);
/// let partial = curried.call([1]).unwrap().partial().unwrap();
/// assert_eq!(partial.call([2, 3]).unwrap().complete(), Some((1, 2)));
/// ```
#[derive(Debug)]
pub struct Arguments<'a, A> {
    bound: BoundArguments<A>,
    live: &'a mut [A],
}

impl<'a, A> Arguments<'a, A> {
    pub(crate) const fn new(bound: BoundArguments<A>, live: &'a mut [A]) -> Self {
        Self { bound, live }
    }

    /// Creates arguments with nothing bound, for calling a target directly.
    ///
    /// ```rust
    /// use lambars_curry::curry::Arguments;
    ///
    /// fn add(arguments: &mut Arguments<'_, i32>) -> i32 {
    ///     arguments[0] + arguments[1]
    /// }
    ///
    /// assert_eq!(add(&mut Arguments::from_live(&mut [1, 2])), 3);
    /// ```
    pub const fn from_live(live: &'a mut [A]) -> Self {
        Self::new(BoundArguments::new_const(), live)
    }

    /// Returns the total number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bound.len() + self.live.len()
    }

    /// Returns `true` if there are no arguments at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the arguments captured by earlier partial calls.
    #[must_use]
    pub fn bound(&self) -> &[A] {
        &self.bound
    }

    /// Returns the captured arguments mutably.
    ///
    /// These are copies; changes are discarded when the invocation ends.
    pub fn bound_mut(&mut self) -> &mut [A] {
        &mut self.bound
    }

    /// Returns the arguments supplied by the completing call.
    #[must_use]
    pub fn live(&self) -> &[A] {
        &*self.live
    }

    /// Returns the completing call's arguments mutably.
    ///
    /// Changes are visible to the caller that supplied them.
    pub fn live_mut(&mut self) -> &mut [A] {
        &mut *self.live
    }

    /// Returns the argument at `index`, counting bound arguments first.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&A> {
        let bound_length = self.bound.len();
        if index < bound_length {
            self.bound.get(index)
        } else {
            self.live.get(index - bound_length)
        }
    }

    /// Returns the argument at `index` mutably, counting bound arguments first.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut A> {
        let bound_length = self.bound.len();
        if index < bound_length {
            self.bound.get_mut(index)
        } else {
            self.live.get_mut(index - bound_length)
        }
    }

    /// Iterates over every argument in positional order.
    pub fn iter(&self) -> Chain<Iter<'_, A>, Iter<'_, A>> {
        self.bound.iter().chain(self.live.iter())
    }

    /// Iterates mutably over every argument in positional order.
    pub fn iter_mut(&mut self) -> Chain<IterMut<'_, A>, IterMut<'_, A>> {
        self.bound.iter_mut().chain(self.live.iter_mut())
    }

    /// Copies every argument into an owned vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<A> Index<usize> for Arguments<'_, A> {
    type Output = A;

    fn index(&self, index: usize) -> &A {
        let bound_length = self.bound.len();
        if index < bound_length {
            &self.bound[index]
        } else {
            &self.live[index - bound_length]
        }
    }
}

impl<A> IndexMut<usize> for Arguments<'_, A> {
    fn index_mut(&mut self, index: usize) -> &mut A {
        let bound_length = self.bound.len();
        if index < bound_length {
            &mut self.bound[index]
        } else {
            &mut self.live[index - bound_length]
        }
    }
}

impl<'b, A> IntoIterator for &'b Arguments<'_, A> {
    type Item = &'b A;
    type IntoIter = Chain<Iter<'b, A>, Iter<'b, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
