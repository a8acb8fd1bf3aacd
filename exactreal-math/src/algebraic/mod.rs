//! Real Algebraic Numbers.
//!
//! A real algebraic number is either known exactly ([`NumericRan`]) or known as
//! the unique root of a polynomial inside an isolating interval
//! ([`IsolatedRan`]). [`RealAlgebraicNumber`] is the closed sum of the two and
//! dispatches every query by pattern match.
//!
//! Interval-represented numbers answer queries by refinement, so most queries
//! take `&mut self` and a [`RefinementConfig`] bounding the work. Defining
//! polynomials are shared read-only through `Arc`.
//!
//! ## Example
//!
//! ```
//! use exactreal_math::algebraic::{RealAlgebraicNumber, RefinementConfig};
//! use exactreal_math::interval::ExactInterval;
//! use exactreal_math::polynomial::Polynomial;
//! use num_bigint::BigInt;
//! use num_rational::BigRational;
//! use std::cmp::Ordering;
//!
//! let rat = |n: i64, d: i64| BigRational::new(BigInt::from(n), BigInt::from(d));
//! let config = RefinementConfig::default();
//!
//! // sqrt(2) as the root of x^2 - 2 in (1, 2)
//! let p = Polynomial::from_integers(&[-2, 0, 1]);
//! let interval = ExactInterval::open(rat(1, 1), rat(2, 1)).unwrap();
//! let mut sqrt2 = RealAlgebraicNumber::from_root(p, interval, true).unwrap();
//! let mut half3 = RealAlgebraicNumber::from_rational(rat(3, 2), false);
//!
//! assert_eq!(sqrt2.compare(&mut half3, &config).unwrap(), Ordering::Less);
//! ```

pub mod config;
pub mod isolated;
pub mod manager;
pub mod numeric;

pub use config::{Refinement, RefinementConfig};
pub use isolated::IsolatedRan;
pub use manager::{AlgebraicManager, AlgebraicStats};
pub use numeric::NumericRan;

use crate::interval::{ExactInterval, IntervalError};
use crate::numbers::ExactNumber;
use crate::polynomial::{HornerEvaluator, IntervalEvaluator, Polynomial};
use crate::sign::Sign;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by algebraic-number construction and refinement.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraicError {
    /// The interval does not hold exactly one root of the polynomial.
    #[error("interval is not isolating: it holds {roots} distinct real roots")]
    NonIsolatingInterval {
        /// Number of distinct roots found.
        roots: usize,
    },
    /// The zero polynomial defines no number.
    #[error("the zero polynomial does not define an algebraic number")]
    ZeroPolynomial,
    /// The refinement cap was hit before the query was decided.
    #[error("refinement did not converge within {iterations} steps")]
    RefinementDidNotConverge {
        /// Steps taken.
        iterations: usize,
    },
    /// An interval could not be formed.
    #[error(transparent)]
    Interval(#[from] IntervalError),
}

impl AlgebraicError {
    /// Count `steps` already spent before this error was raised.
    pub(crate) fn after_steps(self, steps: usize) -> Self {
        match self {
            AlgebraicError::RefinementDidNotConverge { iterations } => {
                AlgebraicError::RefinementDidNotConverge {
                    iterations: iterations + steps,
                }
            }
            e => e,
        }
    }
}

/// Result type for algebraic-number operations.
pub type AlgebraicResult<T> = Result<T, AlgebraicError>;

/// A real algebraic number.
#[derive(Debug, Clone)]
pub enum RealAlgebraicNumber<N> {
    /// Numeric representation: the exact value.
    Numeric(NumericRan<N>),
    /// Interval representation: a root and its isolating interval.
    Isolated(IsolatedRan<N>),
}

impl<N: ExactNumber> RealAlgebraicNumber<N> {
    /// A number with a known exact value.
    pub fn from_rational(value: N, is_root: bool) -> Self {
        RealAlgebraicNumber::Numeric(NumericRan::new(value, is_root))
    }

    /// The unique root of `polynomial` in `interval`.
    pub fn from_root(
        polynomial: impl Into<Arc<Polynomial<N>>>,
        interval: ExactInterval<N>,
        is_root: bool,
    ) -> AlgebraicResult<Self> {
        IsolatedRan::new(polynomial.into(), interval, is_root).map(RealAlgebraicNumber::Isolated)
    }

    /// Whether the number was produced as a polynomial root.
    pub fn is_root(&self) -> bool {
        match self {
            RealAlgebraicNumber::Numeric(a) => a.is_root(),
            RealAlgebraicNumber::Isolated(a) => a.is_root(),
        }
    }

    /// Set the root flag.
    pub fn set_is_root(&mut self, is_root: bool) {
        match self {
            RealAlgebraicNumber::Numeric(a) => a.set_is_root(is_root),
            RealAlgebraicNumber::Isolated(a) => a.set_is_root(is_root),
        }
    }

    /// Whether the exact value is known, in either representation.
    pub fn is_numeric(&self) -> bool {
        self.value().is_some()
    }

    /// Whether this is the numeric representation.
    pub fn is_numeric_representation(&self) -> bool {
        matches!(self, RealAlgebraicNumber::Numeric(_))
    }

    /// The exact value, if known.
    pub fn value(&self) -> Option<&N> {
        match self {
            RealAlgebraicNumber::Numeric(a) => Some(a.value()),
            RealAlgebraicNumber::Isolated(a) => a.value(),
        }
    }

    /// The isolating interval of an interval-represented number.
    pub fn interval(&self) -> Option<&ExactInterval<N>> {
        match self {
            RealAlgebraicNumber::Numeric(_) => None,
            RealAlgebraicNumber::Isolated(a) => Some(a.interval()),
        }
    }

    /// The defining polynomial of an interval-represented number.
    pub fn polynomial(&self) -> Option<&Arc<Polynomial<N>>> {
        match self {
            RealAlgebraicNumber::Numeric(_) => None,
            RealAlgebraicNumber::Isolated(a) => Some(a.polynomial()),
        }
    }

    /// Bisection steps performed so far; always 0 for numeric numbers.
    pub fn refinements(&self) -> u64 {
        match self {
            RealAlgebraicNumber::Numeric(_) => 0,
            RealAlgebraicNumber::Isolated(a) => a.refinements(),
        }
    }

    /// Returns true if the number is 0.
    pub fn is_zero(&self) -> bool {
        match self {
            RealAlgebraicNumber::Numeric(a) => a.is_zero(),
            RealAlgebraicNumber::Isolated(a) => a.is_zero(),
        }
    }

    /// Sign of the number.
    pub fn sgn(&self) -> Sign {
        match self {
            RealAlgebraicNumber::Numeric(a) => a.sgn(),
            RealAlgebraicNumber::Isolated(a) => a.sgn(),
        }
    }

    /// Sign of `q` at the number, using Horner interval evaluation.
    pub fn sgn_of(
        &mut self,
        q: &Polynomial<N>,
        config: &RefinementConfig,
    ) -> AlgebraicResult<Sign> {
        self.sgn_of_with(q, &HornerEvaluator, config)
    }

    /// Sign of `q` at the number, using the given evaluator.
    pub fn sgn_of_with<E>(
        &mut self,
        q: &Polynomial<N>,
        evaluator: &E,
        config: &RefinementConfig,
    ) -> AlgebraicResult<Sign>
    where
        E: IntervalEvaluator<N> + ?Sized,
    {
        match self {
            RealAlgebraicNumber::Numeric(a) => Ok(a.sgn_of_with(q, evaluator)),
            RealAlgebraicNumber::Isolated(a) => a.sgn_of_with(q, evaluator, config),
        }
    }

    /// A point to branch on: the value itself, or a non-integral point of the
    /// isolating interval. An integral result is always the exact value.
    pub fn branching_point(&mut self, config: &RefinementConfig) -> AlgebraicResult<N> {
        match self {
            RealAlgebraicNumber::Numeric(a) => Ok(a.branching_point()),
            RealAlgebraicNumber::Isolated(a) => a.branching_point(config),
        }
    }

    /// A point of the isolating interval, or the value itself.
    pub fn approximate_value(&self) -> N {
        match self {
            RealAlgebraicNumber::Numeric(a) => a.approximate_value(),
            RealAlgebraicNumber::Isolated(a) => a.approximate_value(),
        }
    }

    /// Whether the number lies in `interval`.
    pub fn contained_in(
        &mut self,
        interval: &ExactInterval<N>,
        config: &RefinementConfig,
    ) -> AlgebraicResult<bool> {
        match self {
            RealAlgebraicNumber::Numeric(a) => Ok(a.contained_in(interval)),
            RealAlgebraicNumber::Isolated(a) => a.contained_in(interval, config),
        }
    }

    /// Order two numbers, refining either as needed.
    pub fn compare(
        &mut self,
        other: &mut Self,
        config: &RefinementConfig,
    ) -> AlgebraicResult<Ordering> {
        match (self, other) {
            (RealAlgebraicNumber::Numeric(a), RealAlgebraicNumber::Numeric(b)) => {
                Ok(a.value().cmp(b.value()))
            }
            (RealAlgebraicNumber::Isolated(a), RealAlgebraicNumber::Numeric(b)) => {
                a.compare_value(b.value(), config)
            }
            (RealAlgebraicNumber::Numeric(a), RealAlgebraicNumber::Isolated(b)) => {
                b.compare_value(a.value(), config).map(Ordering::reverse)
            }
            (RealAlgebraicNumber::Isolated(a), RealAlgebraicNumber::Isolated(b)) => {
                a.compare(b, config)
            }
        }
    }

    /// Narrow an interval-represented number below `2^-precision_bits`.
    pub fn refine_to_precision(
        &mut self,
        config: &RefinementConfig,
    ) -> AlgebraicResult<Refinement> {
        match self {
            RealAlgebraicNumber::Numeric(_) => Ok(Refinement::Collapsed),
            RealAlgebraicNumber::Isolated(a) => a.refine_to_precision(config),
        }
    }

    /// Switch a collapsed interval representation to the numeric one.
    pub fn into_simplified(self) -> Self {
        match self {
            RealAlgebraicNumber::Isolated(a) => match a.value() {
                Some(v) => RealAlgebraicNumber::from_rational(v.clone(), a.is_root()),
                None => RealAlgebraicNumber::Isolated(a),
            },
            numeric => numeric,
        }
    }
}

impl<N> From<NumericRan<N>> for RealAlgebraicNumber<N> {
    fn from(a: NumericRan<N>) -> Self {
        RealAlgebraicNumber::Numeric(a)
    }
}

impl<N> From<IsolatedRan<N>> for RealAlgebraicNumber<N> {
    fn from(a: IsolatedRan<N>) -> Self {
        RealAlgebraicNumber::Isolated(a)
    }
}

impl<N: ExactNumber> fmt::Display for RealAlgebraicNumber<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RealAlgebraicNumber::Numeric(a) => write!(f, "{}", a),
            RealAlgebraicNumber::Isolated(a) => write!(f, "{}", a),
        }
    }
}
