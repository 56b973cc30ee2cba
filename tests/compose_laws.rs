#![cfg(feature = "compose")]
//! Property-based tests for function composition laws.
//!
//! ## Composition Laws
//! - **Definition**: `compose(f, g)(x) == f(g(x))`
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`
//!
//! ## Curried Composition
//! - **Deferral**: composing over a partial curried function gives the same
//!   result as composing over the complete call

use lambars_curry::compose;
use lambars_curry::compose::{compose, identity};
use lambars_curry::curry::{Arguments, CurriedFunction};
use proptest::prelude::*;

fn linear(arguments: &mut Arguments<'_, i32>) -> i32 {
    arguments[0]
        .wrapping_mul(arguments[1])
        .wrapping_add(arguments[2])
}

proptest! {
    /// Definition: compose(f, g)(x) == f(g(x))
    #[test]
    fn prop_compose_definition(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        prop_assert_eq!(compose(function1, function2).call(x), function1(function2(x)));
    }

    /// Left Identity Law: compose(identity, f)(x) == f(x)
    #[test]
    fn prop_compose_left_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        prop_assert_eq!(compose(identity, function).call(x), function(x));
    }

    /// Right Identity Law: compose(f, identity)(x) == f(x)
    #[test]
    fn prop_compose_right_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        prop_assert_eq!(compose(function, identity).call(x), function(x));
    }

    /// Associativity Law: compose(f, compose(g, h)) == compose(compose(f, g), h)
    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        let left_associative = compose(function1, compose(function2, function3).into_fn());
        let right_associative = compose(compose(function1, function2).into_fn(), function3);

        prop_assert_eq!(left_associative.call(x), right_associative.call(x));
    }

    /// compose! agrees with nested compose
    #[test]
    fn prop_compose_macro_matches_function(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        let from_macro = compose!(function1, function2, function3);
        let nested = compose(function1, compose(function2, function3).into_fn());

        prop_assert_eq!(from_macro(x), nested.call(x));
    }

    /// Deferral: a composition over a partial curried function completes
    /// with the same value as one over a full call
    #[test]
    fn prop_deferred_composition(
        a in any::<i32>(),
        b in any::<i32>(),
        c in any::<i32>()
    ) {
        let negate = |n: i32| n.wrapping_neg();
        let composed = compose(negate, CurriedFunction::new(3, linear));

        let direct = composed.apply([a, b, c]).unwrap().complete();
        let deferred = composed
            .apply([a])
            .unwrap()
            .partial()
            .unwrap()
            .call([b, c])
            .unwrap()
            .complete();

        prop_assert_eq!(direct, deferred);
        prop_assert_eq!(direct, Some(negate(a.wrapping_mul(b).wrapping_add(c))));
    }
}
