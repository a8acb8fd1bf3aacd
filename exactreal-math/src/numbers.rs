//! Exact Number Capability.
//!
//! The interval and algebraic-number layers are generic over the exact numeric
//! type they compute with. Everything they need from that type is collected in
//! [`ExactNumber`]: a totally ordered field with floor/ceiling and an integrality
//! test.
//!
//! Any `num_rational::Ratio<T>` over a signed integer type that can be built from
//! an `i64` qualifies, so both `BigRational` and `Rational64` work out of the box.

use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{Num, Signed};
use std::fmt;

/// An exact, totally ordered numeric type usable as an interval bound.
pub trait ExactNumber: Clone + Ord + fmt::Debug + fmt::Display + Num + Signed {
    /// Convert a machine integer.
    fn from_i64(n: i64) -> Self;

    /// Largest integer not greater than `self`.
    fn floor(&self) -> Self;

    /// Smallest integer not less than `self`.
    fn ceil(&self) -> Self;

    /// Whether `self` is an integer.
    fn is_integral(&self) -> bool;

    /// The constant 2.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// The midpoint `(a + b) / 2`.
    #[inline]
    fn half_sum(a: &Self, b: &Self) -> Self {
        (a.clone() + b.clone()) / Self::two()
    }
}

impl<T> ExactNumber for Ratio<T>
where
    T: Clone + Integer + Signed + From<i64> + fmt::Debug + fmt::Display,
{
    #[inline]
    fn from_i64(n: i64) -> Self {
        Ratio::from_integer(T::from(n))
    }

    #[inline]
    fn floor(&self) -> Self {
        Ratio::floor(self)
    }

    #[inline]
    fn ceil(&self) -> Self {
        Ratio::ceil(self)
    }

    #[inline]
    fn is_integral(&self) -> bool {
        Ratio::is_integer(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::{BigRational, Rational64};

    #[test]
    fn test_big_rational_floor_ceil() {
        let x = BigRational::new(7.into(), 2.into());
        assert_eq!(ExactNumber::floor(&x), BigRational::from_i64(3));
        assert_eq!(ExactNumber::ceil(&x), BigRational::from_i64(4));
        assert!(!x.is_integral());
        assert!(BigRational::from_i64(-5).is_integral());
    }

    #[test]
    fn test_negative_floor() {
        let x = Rational64::new(-7, 2);
        assert_eq!(ExactNumber::floor(&x), Rational64::from_i64(-4));
        assert_eq!(ExactNumber::ceil(&x), Rational64::from_i64(-3));
    }

    #[test]
    fn test_half_sum() {
        let a = BigRational::from_i64(1);
        let b = BigRational::from_i64(2);
        assert_eq!(
            BigRational::half_sum(&a, &b),
            BigRational::new(3.into(), 2.into())
        );
        assert_eq!(BigRational::two(), BigRational::from_i64(2));
    }
}
