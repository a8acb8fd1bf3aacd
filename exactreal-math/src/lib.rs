//! Exact Real Arithmetic Kernel
//!
//! This crate provides exact interval arithmetic and real algebraic numbers for
//! non-linear real arithmetic reasoning: sign determination, ordering and
//! branching on irrational roots of polynomials without any floating point.
//!
//! # Features
//!
//! - Intervals with included, excluded and infinite bounds over any exact
//!   ordered field ([`ExactInterval`])
//! - Splitting division and inversion through zero
//! - Dense univariate polynomials with Sturm sequences and Horner schemes
//! - Real algebraic numbers in numeric or isolating-interval form
//!   ([`RealAlgebraicNumber`]), refined lazily by bisection under a
//!   configurable cap
//! - Certified equality of roots through polynomial gcds
//!
//! # Examples
//!
//! ## Interval Arithmetic
//!
//! ```
//! use exactreal_math::interval::{ExactInterval, IntervalSplit};
//! use num_rational::Rational64;
//!
//! let r = Rational64::from_integer;
//! let a = ExactInterval::closed(r(-1), r(2)).unwrap();
//! let b = ExactInterval::closed(r(3), r(4)).unwrap();
//! assert_eq!(a.mul(&b), ExactInterval::closed(r(-4), r(8)).unwrap());
//!
//! // Dividing by an interval around zero splits the result.
//! assert!(a.div(&a).is_err());
//! assert!(matches!(b.div_ext(&a), IntervalSplit::Split(..)));
//! ```
//!
//! ## Comparing Algebraic Numbers
//!
//! ```
//! use exactreal_math::{AlgebraicManager, Polynomial, Sign};
//! use num_rational::BigRational;
//! use num_bigint::BigInt;
//! use std::cmp::Ordering;
//!
//! let rat = |n: i64| BigRational::from_integer(BigInt::from(n));
//! let mut manager = AlgebraicManager::default_config();
//!
//! let mut sqrt2 = manager
//!     .create_root_between(Polynomial::from_integers(&[-2, 0, 1]), rat(1), rat(2), true)
//!     .unwrap();
//! let mut sqrt3 = manager
//!     .create_root_between(Polynomial::from_integers(&[-3, 0, 1]), rat(1), rat(2), true)
//!     .unwrap();
//!
//! assert_eq!(manager.compare(&mut sqrt2, &mut sqrt3).unwrap(), Ordering::Less);
//! assert_eq!(manager.sgn(&sqrt2), Sign::Positive);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod algebraic;
pub mod interval;
pub mod numbers;
pub mod polynomial;
pub mod sign;

pub use algebraic::{
    AlgebraicError, AlgebraicManager, AlgebraicResult, AlgebraicStats, IsolatedRan, NumericRan,
    RealAlgebraicNumber, Refinement, RefinementConfig,
};
pub use interval::{BoundType, ExactInterval, IntervalError, IntervalSplit};
pub use numbers::ExactNumber;
pub use polynomial::{
    HornerEvaluator, HornerScheme, HornerTerm, IntervalAssignment, IntervalEvaluator, Polynomial,
    SturmSequence,
};
pub use sign::Sign;
