//! Numerically represented algebraic numbers.

use crate::interval::ExactInterval;
use crate::numbers::ExactNumber;
use crate::polynomial::{IntervalEvaluator, Polynomial};
use crate::sign::Sign;
use std::fmt;

/// An algebraic number whose exact value is known.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumericRan<N> {
    value: N,
    is_root: bool,
}

impl<N: ExactNumber> NumericRan<N> {
    /// Wrap an exact value.
    pub fn new(value: N, is_root: bool) -> Self {
        Self { value, is_root }
    }

    /// The exact value.
    #[inline]
    pub fn value(&self) -> &N {
        &self.value
    }

    /// Unwrap the exact value.
    pub fn into_value(self) -> N {
        self.value
    }

    /// Whether the number was produced as a polynomial root.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// Set the root flag.
    pub fn set_is_root(&mut self, is_root: bool) {
        self.is_root = is_root;
    }

    /// Returns true if the value is 0.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Sign of the value.
    pub fn sgn(&self) -> Sign {
        Sign::of(&self.value)
    }

    /// Sign of `q` at the value.
    pub fn sgn_of_with<E>(&self, q: &Polynomial<N>, evaluator: &E) -> Sign
    where
        E: IntervalEvaluator<N> + ?Sized,
    {
        Sign::of(&evaluator.evaluate_at(q, &self.value))
    }

    /// The value itself.
    pub fn branching_point(&self) -> N {
        self.value.clone()
    }

    /// The value itself.
    pub fn approximate_value(&self) -> N {
        self.value.clone()
    }

    /// Whether the value lies in `interval`.
    pub fn contained_in(&self, interval: &ExactInterval<N>) -> bool {
        interval.contains(&self.value)
    }
}

impl<N: ExactNumber> fmt::Display for NumericRan<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
