//! Property-based tests for root counting and real algebraic numbers

use exactreal_math::algebraic::{
    AlgebraicError, AlgebraicManager, RealAlgebraicNumber, Refinement, RefinementConfig,
};
use exactreal_math::interval::{BoundType, ExactInterval};
use exactreal_math::polynomial::{Polynomial, SturmSequence};
use exactreal_math::sign::Sign;
use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;
use std::cmp::Ordering;

/// Helper to create rational
fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn frac(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

fn open(l: BigRational, r: BigRational) -> ExactInterval<BigRational> {
    ExactInterval::open(l, r).expect("valid interval")
}

/// `x^2 - n`
fn square_minus(n: i64) -> Polynomial<BigRational> {
    Polynomial::from_integers(&[-n, 0, 1])
}

/// Product of `(x - r)` over the given roots
fn from_roots(roots: &[i64]) -> Polynomial<BigRational> {
    roots
        .iter()
        .fold(Polynomial::constant(rat(1)), |p, r| {
            &p * &Polynomial::from_integers(&[-r, 1])
        })
}

/// sqrt(n) as the positive root of `x^2 - n` in `(0, n)`
fn sqrt(n: i64) -> RealAlgebraicNumber<BigRational> {
    RealAlgebraicNumber::from_root(square_minus(n), open(rat(0), rat(n)), true)
        .expect("isolating")
}

/// Strategy for integers at least 2 that are not perfect squares
fn non_square_strategy() -> impl Strategy<Value = i64> {
    (2i64..60i64).prop_filter("not a perfect square", |n| {
        let r = (*n as f64).sqrt().round() as i64;
        r * r != *n
    })
}

#[cfg(test)]
mod root_counting_properties {
    use super::*;

    proptest! {
        /// Sturm counts match the roots of a product of linear factors
        #[test]
        fn sturm_count_matches_roots(
            roots in prop::collection::vec(-5i64..5i64, 1..5),
            a in -6i64..6i64,
            width in 1i64..8i64
        ) {
            let p = from_roots(&roots);
            let sturm = SturmSequence::new(&p);
            let b = a + width;

            let mut distinct = roots.clone();
            distinct.sort_unstable();
            distinct.dedup();

            let half_open = ExactInterval::new(rat(a), BoundType::Strict, rat(b), BoundType::Weak)
                .expect("valid interval");
            let expected = distinct.iter().filter(|r| a < **r && **r <= b).count();
            prop_assert_eq!(sturm.count_roots(&half_open), expected);

            let closed = ExactInterval::closed(rat(a), rat(b)).expect("valid interval");
            let expected = distinct.iter().filter(|r| a <= **r && **r <= b).count();
            prop_assert_eq!(sturm.count_roots(&closed), expected);

            prop_assert_eq!(
                sturm.count_roots(&ExactInterval::unbounded_interval()),
                distinct.len()
            );
        }
    }
}

#[cfg(test)]
mod algebraic_number_properties {
    use super::*;

    proptest! {
        /// Comparison against a rational agrees with squaring
        #[test]
        fn sqrt_compares_like_squares(
            n in non_square_strategy(),
            p in -40i64..40i64,
            q in 1i64..6i64
        ) {
            let config = RefinementConfig::default();
            let mut a = sqrt(n);
            let x = frac(p, q);
            let mut b = RealAlgebraicNumber::from_rational(x.clone(), false);

            let expected = if p <= 0 {
                Ordering::Greater
            } else {
                rat(n).cmp(&(x.clone() * x))
            };
            prop_assert_eq!(a.compare(&mut b, &config), Ok(expected));
            prop_assert!(!a.is_numeric());
        }

        /// Sign of x^2 - m at sqrt(n) is the sign of n - m
        #[test]
        fn sign_of_square_minus(n in non_square_strategy(), m in 0i64..60i64) {
            let config = RefinementConfig::default();
            let mut a = sqrt(n);
            let expected = Sign::from_ordering(n.cmp(&m));
            prop_assert_eq!(a.sgn_of(&square_minus(m), &config), Ok(expected));
        }

        /// Different isolating intervals of the same root compare equal
        #[test]
        fn same_root_different_intervals(n in non_square_strategy(), shift in 0i64..4i64) {
            let config = RefinementConfig::default();
            let mut a = sqrt(n);
            let mut b = RealAlgebraicNumber::from_root(
                square_minus(n),
                open(rat(1), rat(n + shift)),
                true,
            )
            .expect("isolating");
            prop_assert_eq!(a.compare(&mut b, &config), Ok(Ordering::Equal));
        }

        /// Distinct square roots are ordered like their radicands
        #[test]
        fn distinct_roots_ordered(n in non_square_strategy(), m in non_square_strategy()) {
            let config = RefinementConfig::default();
            let mut a = sqrt(n);
            let mut b = sqrt(m);
            prop_assert_eq!(a.compare(&mut b, &config), Ok(n.cmp(&m)));
        }

        /// Refinement keeps the root inside a shrinking interval
        #[test]
        fn refinement_brackets_root(n in non_square_strategy(), bits in 1u32..24u32) {
            let config = RefinementConfig::default().with_precision_bits(bits);
            let mut a = sqrt(n);
            prop_assert_eq!(a.refine_to_precision(&config), Ok(Refinement::Resolved));

            let iv = a.interval().expect("interval representation").clone();
            let width = iv.width().expect("bounded");
            prop_assert!(width < config.target_width());
            prop_assert!(iv.left().clone() * iv.left().clone() < rat(n));
            prop_assert!(iv.right().clone() * iv.right().clone() > rat(n));
            prop_assert!(iv.contains(&a.approximate_value()));
        }

        /// Branching points of irrational roots are never integers
        #[test]
        fn branching_point_not_integral(n in non_square_strategy()) {
            let config = RefinementConfig::default();
            let mut a = sqrt(n);
            let b = a.branching_point(&config).expect("converges");
            prop_assert!(!b.is_integer());
            prop_assert!(a.interval().is_some_and(|iv| iv.contains(&b)));
        }

        /// Containment in a rational interval agrees with squaring
        #[test]
        fn containment_like_squares(
            n in non_square_strategy(),
            lo in 0i64..10i64,
            len in 1i64..5i64
        ) {
            let config = RefinementConfig::default();
            let mut a = sqrt(n);
            let hi = lo + len;
            let expected = lo * lo < n && n < hi * hi;
            prop_assert_eq!(a.contained_in(&open(rat(lo), rat(hi)), &config), Ok(expected));
        }

        /// Linear polynomials give numeric values immediately
        #[test]
        fn linear_roots_collapse(k in -20i64..20i64) {
            let a = RealAlgebraicNumber::from_root(
                Polynomial::from_integers(&[-k, 1]),
                open(rat(k - 1), rat(k + 1)),
                true,
            )
            .expect("isolating");
            prop_assert_eq!(a.value(), Some(&rat(k)));
            prop_assert_eq!(a.sgn(), Sign::from_ordering(k.cmp(&0)));
            prop_assert_eq!(a.is_zero(), k == 0);
        }
    }
}

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn root_two_of_linear_polynomial() {
        let config = RefinementConfig::default();
        let mut a = RealAlgebraicNumber::from_root(
            Polynomial::from_integers(&[-2, 1]),
            open(rat(1), rat(3)),
            true,
        )
        .expect("isolating");
        assert_eq!(a.sgn(), Sign::Positive);
        let b = a.branching_point(&config).expect("converges");
        assert!(rat(1) < b && b < rat(3));
    }

    #[test]
    fn sqrt2_less_than_three_halves() {
        let config = RefinementConfig::default();
        let mut a = sqrt(2);
        let mut b = RealAlgebraicNumber::from_rational(frac(3, 2), false);
        assert_eq!(a.compare(&mut b, &config), Ok(Ordering::Less));
        // The interval was narrowed to exclude 3/2.
        let iv = a.interval().expect("interval representation");
        assert!(!iv.contains(&frac(3, 2)));
    }

    #[test]
    fn overlapping_intervals_of_sqrt2_are_equal() {
        let config = RefinementConfig::default();
        let mut a = RealAlgebraicNumber::from_root(square_minus(2), open(rat(1), rat(2)), true)
            .expect("isolating");
        let mut b =
            RealAlgebraicNumber::from_root(square_minus(2), open(rat(1), frac(8, 5)), true)
                .expect("isolating");
        assert_eq!(a.compare(&mut b, &config), Ok(Ordering::Equal));
    }

    #[test]
    fn interval_without_root_rejected() {
        let err = RealAlgebraicNumber::from_root(square_minus(2), open(rat(-1), rat(1)), true)
            .unwrap_err();
        assert_eq!(err, AlgebraicError::NonIsolatingInterval { roots: 0 });
    }

    #[test]
    fn manager_tracks_comparisons() {
        let mut manager = AlgebraicManager::default_config();
        let mut roots: Vec<_> = [5, 2, 3]
            .iter()
            .map(|n| {
                manager
                    .create_root_between(square_minus(*n), rat(1), rat(3), true)
                    .expect("isolating")
            })
            .collect();

        let (first, rest) = roots.split_at_mut(1);
        let (second, third) = rest.split_at_mut(1);
        assert_eq!(manager.compare(&mut first[0], &mut second[0]), Ok(Ordering::Greater));
        assert_eq!(manager.compare(&mut second[0], &mut third[0]), Ok(Ordering::Less));
        assert_eq!(manager.stats().comparisons, 2);
        assert_eq!(manager.interned(), 3);
    }
}
