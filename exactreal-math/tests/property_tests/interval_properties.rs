//! Property-based tests for exact interval arithmetic

use exactreal_math::interval::{BoundType, ExactInterval, IntervalError, IntervalSplit};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;
use proptest::prelude::*;

/// Helper to create rational
fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/// Strategy for small fractions
fn frac_strategy() -> impl Strategy<Value = BigRational> {
    (-20i64..20i64, 1i64..5i64)
        .prop_map(|(n, d)| BigRational::new(BigInt::from(n), BigInt::from(d)))
}

fn bound_type_strategy() -> impl Strategy<Value = BoundType> {
    prop_oneof![
        Just(BoundType::Weak),
        Just(BoundType::Strict),
        Just(BoundType::Infty)
    ]
}

fn finite_bound_type_strategy() -> impl Strategy<Value = BoundType> {
    prop_oneof![Just(BoundType::Weak), Just(BoundType::Strict)]
}

fn make_interval(
    a: BigRational,
    b: BigRational,
    lt: BoundType,
    rt: BoundType,
) -> ExactInterval<BigRational> {
    let (l, r) = if a <= b { (a, b) } else { (b, a) };
    ExactInterval::new(l, lt, r, rt).expect("ordered bounds")
}

/// Any interval, possibly empty or unbounded
fn interval_strategy() -> impl Strategy<Value = ExactInterval<BigRational>> {
    (
        frac_strategy(),
        frac_strategy(),
        bound_type_strategy(),
        bound_type_strategy(),
    )
        .prop_map(|(a, b, lt, rt)| make_interval(a, b, lt, rt))
}

/// Intervals with finite bounds
fn bounded_interval_strategy() -> impl Strategy<Value = ExactInterval<BigRational>> {
    (
        frac_strategy(),
        frac_strategy(),
        finite_bound_type_strategy(),
        finite_bound_type_strategy(),
    )
        .prop_map(|(a, b, lt, rt)| make_interval(a, b, lt, rt))
}

/// Non-empty intervals with finite bounds that exclude zero
fn nonzero_interval_strategy() -> impl Strategy<Value = ExactInterval<BigRational>> {
    (
        1i64..10i64,
        0i64..10i64,
        1i64..4i64,
        any::<bool>(),
        finite_bound_type_strategy(),
        finite_bound_type_strategy(),
    )
        .prop_map(|(lo, extra, d, negative, lt, rt)| {
            let d = BigInt::from(d);
            let a = BigRational::new(BigInt::from(lo), d.clone());
            let b = BigRational::new(BigInt::from(lo + extra), d);
            if negative {
                make_interval(-b, -a, lt, rt)
            } else {
                make_interval(a, b, lt, rt)
            }
        })
}

/// A member of a non-empty interval, chosen by `k` in `0..=8`
fn member(iv: &ExactInterval<BigRational>, k: i64) -> BigRational {
    let k_rat = BigRational::new(BigInt::from(k), BigInt::from(8));
    match (iv.left_type().is_infinite(), iv.right_type().is_infinite()) {
        (false, false) => {
            let x = iv.left() + (iv.right() - iv.left()) * k_rat;
            if iv.contains(&x) {
                x
            } else {
                iv.midpoint()
            }
        }
        (true, true) => rat(k - 4) * rat(5),
        (true, false) => iv.right() - rat(1 + k),
        (false, true) => iv.left() + rat(1 + k),
    }
}

#[cfg(test)]
mod predicate_properties {
    use super::*;

    proptest! {
        /// A non-empty interval contains its midpoint
        #[test]
        fn midpoint_is_contained(iv in interval_strategy()) {
            prop_assume!(!iv.is_empty());
            prop_assert!(iv.contains(&iv.midpoint()));
        }

        /// Exactly one of bounded, half-unbounded, unbounded holds
        #[test]
        fn boundedness_classification(iv in interval_strategy()) {
            let flags = [iv.is_bounded(), iv.is_half_unbounded(), iv.is_unbounded()];
            prop_assert_eq!(flags.iter().filter(|f| **f).count(), 1);
        }

        /// Containment implies closure membership
        #[test]
        fn contains_implies_meets(iv in interval_strategy(), x in frac_strategy()) {
            if iv.contains(&x) {
                prop_assert!(iv.meets(&x));
            }
        }

        /// The sign of an interval agrees with the sign of its members
        #[test]
        fn sign_agrees_with_members(iv in interval_strategy(), k in 0i64..=8i64) {
            prop_assume!(!iv.is_empty());
            let x = member(&iv, k);
            prop_assert!(iv.contains(&x));
            match iv.sgn().to_i8() {
                1 => prop_assert!(x.is_positive()),
                -1 => prop_assert!(x.is_negative()),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod arithmetic_properties {
    use super::*;

    proptest! {
        /// Addition is commutative
        #[test]
        fn add_commutative(a in interval_strategy(), b in interval_strategy()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        /// Multiplication is commutative
        #[test]
        fn mul_commutative(a in interval_strategy(), b in interval_strategy()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        /// Addition of bounded intervals is associative
        #[test]
        fn add_associative(
            a in bounded_interval_strategy(),
            b in bounded_interval_strategy(),
            c in bounded_interval_strategy()
        ) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        /// Sums and products of members are members of the result
        #[test]
        fn arithmetic_encloses_members(
            a in interval_strategy(),
            b in interval_strategy(),
            i in 0i64..=8i64,
            j in 0i64..=8i64
        ) {
            prop_assume!(!a.is_empty() && !b.is_empty());
            let (x, y) = (member(&a, i), member(&b, j));
            prop_assert!(a.add(&b).contains(&(x.clone() + y.clone())));
            prop_assert!(a.sub(&b).contains(&(x.clone() - y.clone())));
            prop_assert!(a.mul(&b).contains(&(x * y)));
        }

        /// Dividing then multiplying by an interval away from zero encloses the
        /// starting interval
        #[test]
        fn div_then_mul_contains(
            x in bounded_interval_strategy(),
            y in nonzero_interval_strategy()
        ) {
            prop_assume!(!x.is_empty() && !y.is_empty());
            let q = x.div(&y).expect("divisor excludes zero");
            prop_assert!(q.mul(&y).contains_interval(&x));
        }

        /// Squares have a non-negative lower bound
        #[test]
        fn square_lower_bound_nonnegative(iv in interval_strategy()) {
            let sq = iv.power(2);
            prop_assert!(!sq.left_type().is_infinite());
            prop_assert!(!sq.left().is_negative());
        }

        /// Powers enclose powers of members
        #[test]
        fn power_encloses_members(
            iv in interval_strategy(),
            k in 0i64..=8i64,
            e in 0u32..5u32
        ) {
            prop_assume!(!iv.is_empty());
            let x = member(&iv, k);
            prop_assert!(iv.power(e).contains(&num_traits::pow(x, e as usize)));
        }

        /// The absolute value is non-negative and encloses |x|
        #[test]
        fn abs_encloses_members(iv in interval_strategy(), k in 0i64..=8i64) {
            prop_assume!(!iv.is_empty());
            let x = member(&iv, k);
            let a = iv.abs();
            prop_assert!(a.contains(&x.abs()));
            prop_assert_ne!(a.sgn().to_i8(), -1);
        }
    }
}

#[cfg(test)]
mod division_properties {
    use super::*;

    proptest! {
        /// Division by an interval around zero fails; extended division splits
        #[test]
        fn div_ext_splits_through_zero(
            lo in 1i64..10i64,
            hi in 1i64..10i64,
            num in 1i64..10i64,
            t in -9i64..10i64
        ) {
            let y = ExactInterval::closed(rat(-lo), rat(hi)).expect("valid interval");
            let x = ExactInterval::point(rat(num));

            prop_assert_eq!(x.div(&y), Err(IntervalError::DivisionByIntervalContainingZero));

            let split = x.div_ext(&y);
            prop_assert!(split.is_split());
            let (is_split, a, b) = split.into_parts();
            prop_assert!(is_split);
            prop_assert!(a.intersect(&b).is_empty());

            // Every quotient num / t with t a nonzero member of y lies in a part.
            if t != 0 && y.contains(&rat(t)) {
                let q = BigRational::new(BigInt::from(num), BigInt::from(t));
                prop_assert!(a.contains(&q) || b.contains(&q));
            }
        }

        /// Inverse of an interval away from zero is a single interval enclosing 1/x
        #[test]
        fn inverse_encloses_reciprocals(y in nonzero_interval_strategy(), k in 0i64..=8i64) {
            prop_assume!(!y.is_empty());
            let x = member(&y, k);
            match y.inverse() {
                IntervalSplit::Single(inv) => prop_assert!(inv.contains(&x.recip())),
                IntervalSplit::Split(..) => prop_assert!(false, "unexpected split"),
            }
        }
    }
}

#[cfg(test)]
mod lattice_properties {
    use super::*;

    proptest! {
        /// The intersection lies in both operands
        #[test]
        fn intersect_is_subset(a in interval_strategy(), b in interval_strategy()) {
            let i = a.intersect(&b);
            prop_assert!(a.contains_interval(&i));
            prop_assert!(b.contains_interval(&i));
        }

        /// A point is in the intersection iff it is in both operands
        #[test]
        fn intersect_membership(
            a in interval_strategy(),
            b in interval_strategy(),
            x in frac_strategy()
        ) {
            prop_assert_eq!(a.intersect(&b).contains(&x), a.contains(&x) && b.contains(&x));
        }

        /// The hull contains both operands
        #[test]
        fn hull_is_superset(a in interval_strategy(), b in interval_strategy()) {
            let h = a.hull(&b);
            prop_assert!(h.contains_interval(&a));
            prop_assert!(h.contains_interval(&b));
        }
    }
}
