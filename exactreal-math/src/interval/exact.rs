//! Exact intervals with typed bounds.
//!
//! An [`ExactInterval`] is a range of reals delimited by two exact bounds, each
//! of which is included ([`BoundType::Weak`]), excluded ([`BoundType::Strict`])
//! or absent ([`BoundType::Infty`]). All operations are exact and return new
//! intervals; the operands are never modified.
//!
//! ## Operations
//!
//! - Predicates: emptiness, boundedness, point and subset tests
//! - Arithmetic: `add`, `minus`, `mul`, `div`, `div_ext`, `power`, `inverse`
//! - Lattice: `intersect`, `hull`
//! - Sign determination of the values the interval may take
//!
//! ## Multiplication Policy
//!
//! Products are taken over the four bound pairs. A finite bound that is exactly
//! zero annihilates an infinite one, so `0 · ∞ = 0` with the zero bound's type.
//! An extremal product is included if any bound pair attaining it is included on
//! both sides, or if it is zero and an included zero bound takes part.
//!
//! ## References
//!
//! - Moore, Kearfott, Cloud: "Introduction to Interval Analysis" (2009)
//! - Hickey, Ju, van Emden: "Interval Arithmetic: From Principles to
//!   Implementation" (2001)

use super::{BoundType, IntervalError};
use crate::numbers::ExactNumber;
use crate::sign::Sign;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg};

/// An interval over an exact number type.
///
/// Invariant: unless one bound is infinite, `left <= right`. Equal bounds with a
/// strict side denote the empty interval; equal weak bounds denote a point.
#[derive(Debug, Clone)]
pub struct ExactInterval<N> {
    left: N,
    left_type: BoundType,
    right: N,
    right_type: BoundType,
}

/// Result of an interval operation that may split at infinity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntervalSplit<N> {
    /// A single interval (possibly empty).
    Single(ExactInterval<N>),
    /// Two disjoint intervals, lower part first.
    Split(ExactInterval<N>, ExactInterval<N>),
}

impl<N: ExactNumber> IntervalSplit<N> {
    /// Whether a real split occurred.
    pub fn is_split(&self) -> bool {
        matches!(self, IntervalSplit::Split(..))
    }

    /// The split flag plus both parts; the second part is empty when there was
    /// no split.
    pub fn into_parts(self) -> (bool, ExactInterval<N>, ExactInterval<N>) {
        match self {
            IntervalSplit::Single(a) => (false, a, ExactInterval::empty_interval()),
            IntervalSplit::Split(a, b) => (true, a, b),
        }
    }
}

/// A bound lifted to the extended reals, used for corner products.
#[derive(Debug, Clone)]
enum Extended<N> {
    NegInf,
    Finite(N, BoundType),
    PosInf,
}

impl<N: ExactNumber> Extended<N> {
    fn infinity(positive: bool) -> Self {
        if positive {
            Extended::PosInf
        } else {
            Extended::NegInf
        }
    }

    fn cmp_value(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Extended::NegInf, Extended::NegInf) | (Extended::PosInf, Extended::PosInf) => {
                Ordering::Equal
            }
            (Extended::NegInf, _) | (_, Extended::PosInf) => Ordering::Less,
            (_, Extended::NegInf) | (Extended::PosInf, _) => Ordering::Greater,
            (Extended::Finite(a, _), Extended::Finite(b, _)) => a.cmp(b),
        }
    }

    fn mul(&self, other: &Self) -> Self {
        match (self, other) {
            (Extended::Finite(x, tx), Extended::Finite(y, ty)) => {
                let zero_attained =
                    (x.is_zero() && tx.is_weak()) || (y.is_zero() && ty.is_weak());
                let ty = if zero_attained {
                    BoundType::Weak
                } else {
                    BoundType::weakest(*tx, *ty)
                };
                Extended::Finite(x.clone() * y.clone(), ty)
            }
            (Extended::Finite(x, tx), inf) | (inf, Extended::Finite(x, tx)) => {
                if x.is_zero() {
                    Extended::Finite(N::zero(), *tx)
                } else {
                    let inf_positive = matches!(inf, Extended::PosInf);
                    Extended::infinity(x.is_positive() == inf_positive)
                }
            }
            (a, b) => {
                let a_positive = matches!(a, Extended::PosInf);
                let b_positive = matches!(b, Extended::PosInf);
                Extended::infinity(a_positive == b_positive)
            }
        }
    }

    /// Pick the extremal element, merging the types of coinciding finite values.
    fn extremum(values: Vec<Self>, wanted: Ordering) -> Self {
        let mut best: Option<Self> = None;
        for v in values {
            best = Some(match best {
                None => v,
                Some(b) => match v.cmp_value(&b) {
                    ord if ord == wanted => v,
                    Ordering::Equal => match (b, v) {
                        (Extended::Finite(x, tb), Extended::Finite(_, tv)) => {
                            Extended::Finite(x, BoundType::loosest_finite(tb, tv))
                        }
                        (b, _) => b,
                    },
                    _ => b,
                },
            });
        }
        best.unwrap_or(Extended::NegInf)
    }
}

impl<N: ExactNumber> ExactInterval<N> {
    /// Create an interval, checking that the bounds do not cross.
    pub fn new(
        left: N,
        left_type: BoundType,
        right: N,
        right_type: BoundType,
    ) -> Result<Self, IntervalError> {
        if !left_type.is_infinite() && !right_type.is_infinite() && left > right {
            return Err(IntervalError::CrossedBounds {
                left: left.to_string(),
                right: right.to_string(),
            });
        }
        Ok(Self::from_parts(left, left_type, right, right_type))
    }

    /// Build without validation; infinite bounds store zero.
    pub(crate) fn from_parts(
        left: N,
        left_type: BoundType,
        right: N,
        right_type: BoundType,
    ) -> Self {
        let left = if left_type.is_infinite() { N::zero() } else { left };
        let right = if right_type.is_infinite() { N::zero() } else { right };
        Self {
            left,
            left_type,
            right,
            right_type,
        }
    }

    /// The point interval `[n, n]`.
    pub fn point(n: N) -> Self {
        Self::from_parts(n.clone(), BoundType::Weak, n, BoundType::Weak)
    }

    /// The open interval `(left, right)`.
    pub fn open(left: N, right: N) -> Result<Self, IntervalError> {
        Self::new(left, BoundType::Strict, right, BoundType::Strict)
    }

    /// The closed interval `[left, right]`.
    pub fn closed(left: N, right: N) -> Result<Self, IntervalError> {
        Self::new(left, BoundType::Weak, right, BoundType::Weak)
    }

    /// The canonical empty interval `(0, 0)`.
    pub fn empty_interval() -> Self {
        Self::from_parts(N::zero(), BoundType::Strict, N::zero(), BoundType::Strict)
    }

    /// The whole real line.
    pub fn unbounded_interval() -> Self {
        Self::from_parts(N::zero(), BoundType::Infty, N::zero(), BoundType::Infty)
    }

    /// Left bound; meaningless when the left type is `Infty`.
    #[inline]
    pub fn left(&self) -> &N {
        &self.left
    }

    /// Right bound; meaningless when the right type is `Infty`.
    #[inline]
    pub fn right(&self) -> &N {
        &self.right
    }

    /// Type of the left bound.
    #[inline]
    pub fn left_type(&self) -> BoundType {
        self.left_type
    }

    /// Type of the right bound.
    #[inline]
    pub fn right_type(&self) -> BoundType {
        self.right_type
    }


    /// Returns true if no real number lies in the interval.
    pub fn is_empty(&self) -> bool {
        !(self.left_type.is_infinite()
            || self.right_type.is_infinite()
            || self.left < self.right
            || (self.left == self.right
                && !self.left_type.is_strict()
                && !self.right_type.is_strict()))
    }

    /// Returns true if both bounds are infinite.
    pub fn is_unbounded(&self) -> bool {
        self.left_type.is_infinite() && self.right_type.is_infinite()
    }

    /// Returns true if exactly one bound is infinite.
    pub fn is_half_unbounded(&self) -> bool {
        self.left_type.is_infinite() != self.right_type.is_infinite()
    }

    /// Returns true if neither bound is infinite.
    pub fn is_bounded(&self) -> bool {
        !self.left_type.is_infinite() && !self.right_type.is_infinite()
    }

    /// Returns true for a point interval `[n, n]`.
    pub fn is_point(&self) -> bool {
        self.left_type.is_weak() && self.right_type.is_weak() && self.left == self.right
    }

    fn admits_from_left(&self, n: &N) -> bool {
        match self.left_type {
            BoundType::Infty => true,
            BoundType::Strict => &self.left < n,
            BoundType::Weak => &self.left <= n,
        }
    }

    fn admits_from_right(&self, n: &N) -> bool {
        match self.right_type {
            BoundType::Infty => true,
            BoundType::Strict => n < &self.right,
            BoundType::Weak => n <= &self.right,
        }
    }

    /// Returns true if `n` lies in the interval.
    pub fn contains(&self, n: &N) -> bool {
        !self.is_empty() && self.admits_from_left(n) && self.admits_from_right(n)
    }

    /// Returns true if `other` is a subset of this interval.
    pub fn contains_interval(&self, other: &Self) -> bool {
        if other.is_empty() {
            return true;
        }
        if self.is_empty() {
            return false;
        }
        let left_ok = match (self.left_type, other.left_type) {
            (BoundType::Infty, _) => true,
            (_, BoundType::Infty) => false,
            (mine, theirs) => {
                self.left < other.left
                    || (self.left == other.left && (mine.is_weak() || theirs.is_strict()))
            }
        };
        let right_ok = match (self.right_type, other.right_type) {
            (BoundType::Infty, _) => true,
            (_, BoundType::Infty) => false,
            (mine, theirs) => {
                other.right < self.right
                    || (self.right == other.right && (mine.is_weak() || theirs.is_strict()))
            }
        };
        left_ok && right_ok
    }

    /// Returns true if `n` lies in the closure of the interval, whatever the
    /// declared strictness of its bounds.
    pub fn meets(&self, n: &N) -> bool {
        (self.left_type.is_infinite() || &self.left <= n)
            && (self.right_type.is_infinite() || n <= &self.right)
    }


    /// Sign of the values in the interval: negative if it lies left of 0,
    /// positive if right of 0, zero if it contains 0. The empty interval has
    /// sign zero.
    pub fn sgn(&self) -> Sign {
        if self.is_empty() {
            return Sign::Zero;
        }
        if !self.right_type.is_infinite()
            && (self.right.is_negative() || (self.right.is_zero() && self.right_type.is_strict()))
        {
            Sign::Negative
        } else if !self.left_type.is_infinite()
            && (self.left.is_positive() || (self.left.is_zero() && self.left_type.is_strict()))
        {
            Sign::Positive
        } else {
            Sign::Zero
        }
    }

    /// A point of the interval. For bounded intervals this is the midpoint; an
    /// unbounded interval yields 0 and a half-unbounded one its finite bound
    /// moved one unit inward.
    pub fn midpoint(&self) -> N {
        match (self.left_type.is_infinite(), self.right_type.is_infinite()) {
            (false, false) => N::half_sum(&self.left, &self.right),
            (true, true) => N::zero(),
            (true, false) => self.right.clone() - N::one(),
            (false, true) => self.left.clone() + N::one(),
        }
    }

    /// Width `right - left`, or `None` when a bound is infinite.
    pub fn width(&self) -> Option<N> {
        if self.is_bounded() {
            Some(self.right.clone() - self.left.clone())
        } else {
            None
        }
    }

    /// Absolute value: the interval of `|x|` for `x` in this interval.
    pub fn abs(&self) -> Self {
        if self.is_empty() {
            return Self::empty_interval();
        }
        match self.sgn() {
            Sign::Positive => self.clone(),
            Sign::Negative => self.minus(),
            Sign::Zero => {
                let (value, ty) = if self.left_type.is_infinite() || self.right_type.is_infinite()
                {
                    (N::zero(), BoundType::Infty)
                } else {
                    let l = self.left.abs();
                    let r = self.right.abs();
                    match l.cmp(&r) {
                        Ordering::Greater => (l, self.left_type),
                        Ordering::Less => (r, self.right_type),
                        Ordering::Equal => (
                            r,
                            BoundType::loosest_finite(self.left_type, self.right_type),
                        ),
                    }
                };
                Self::from_parts(N::zero(), BoundType::Weak, value, ty)
            }
        }
    }


    /// Sum of two intervals.
    pub fn add(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::empty_interval();
        }
        Self::from_parts(
            self.left.clone() + other.left.clone(),
            BoundType::weakest(self.left_type, other.left_type),
            self.right.clone() + other.right.clone(),
            BoundType::weakest(self.right_type, other.right_type),
        )
    }

    /// Negation: `{-x | x in self}`.
    pub fn minus(&self) -> Self {
        Self::from_parts(
            -self.right.clone(),
            self.right_type,
            -self.left.clone(),
            self.left_type,
        )
    }

    /// Difference `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.minus())
    }

    fn left_extended(&self) -> Extended<N> {
        if self.left_type.is_infinite() {
            Extended::NegInf
        } else {
            Extended::Finite(self.left.clone(), self.left_type)
        }
    }

    fn right_extended(&self) -> Extended<N> {
        if self.right_type.is_infinite() {
            Extended::PosInf
        } else {
            Extended::Finite(self.right.clone(), self.right_type)
        }
    }

    /// Product of two intervals.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::empty_interval();
        }
        let (a, b) = (self.left_extended(), self.right_extended());
        let (c, d) = (other.left_extended(), other.right_extended());
        let corners = vec![a.mul(&c), a.mul(&d), b.mul(&c), b.mul(&d)];

        let lower = Extended::extremum(corners.clone(), Ordering::Less);
        let upper = Extended::extremum(corners, Ordering::Greater);

        let (left, left_type) = match lower {
            Extended::Finite(v, t) => (v, t),
            _ => (N::zero(), BoundType::Infty),
        };
        let (right, right_type) = match upper {
            Extended::Finite(v, t) => (v, t),
            _ => (N::zero(), BoundType::Infty),
        };
        Self::from_parts(left, left_type, right, right_type)
    }

    /// Reciprocal of a bound; the reciprocal of an infinite bound is a strict 0
    /// and that of a (necessarily strict) zero bound is infinite.
    fn reciprocal_bound(value: &N, ty: BoundType) -> (N, BoundType) {
        if ty.is_infinite() {
            (N::zero(), BoundType::Strict)
        } else if value.is_zero() {
            (N::zero(), BoundType::Infty)
        } else {
            (N::one() / value.clone(), ty)
        }
    }

    /// Reciprocal of an interval that does not contain 0.
    fn reciprocal(&self) -> Self {
        if self.is_empty() {
            return Self::empty_interval();
        }
        let (l, lt) = Self::reciprocal_bound(&self.right, self.right_type);
        let (r, rt) = Self::reciprocal_bound(&self.left, self.left_type);
        Self::from_parts(l, lt, r, rt)
    }

    /// Quotient `self / other`.
    ///
    /// # Errors
    ///
    /// Fails with [`IntervalError::DivisionByIntervalContainingZero`] if the
    /// divisor contains 0; use [`ExactInterval::div_ext`] in that case.
    pub fn div(&self, other: &Self) -> Result<Self, IntervalError> {
        if other.contains(&N::zero()) {
            return Err(IntervalError::DivisionByIntervalContainingZero);
        }
        Ok(self.mul(&other.reciprocal()))
    }

    /// Extended division. If the divisor contains 0 the quotient is projected
    /// through infinity and may consist of two disjoint intervals.
    pub fn div_ext(&self, other: &Self) -> IntervalSplit<N> {
        match other.inverse() {
            IntervalSplit::Single(inv) => IntervalSplit::Single(self.mul(&inv)),
            IntervalSplit::Split(lo, hi) => {
                let a = self.mul(&lo);
                let b = self.mul(&hi);
                if a.is_empty() {
                    IntervalSplit::Single(b)
                } else if b.is_empty() {
                    IntervalSplit::Single(a)
                } else if a.intersect(&b).is_empty() {
                    IntervalSplit::Split(a, b)
                } else {
                    IntervalSplit::Single(a.hull(&b))
                }
            }
        }
    }

    /// Multiplicative inverse `{1/x | x in self, x != 0}`.
    ///
    /// An interval with 0 strictly inside splits into a negative and a positive
    /// half-line. The inverse of `[0, 0]` is empty.
    pub fn inverse(&self) -> IntervalSplit<N> {
        if self.is_empty() {
            return IntervalSplit::Single(Self::empty_interval());
        }
        if !self.contains(&N::zero()) {
            return IntervalSplit::Single(self.reciprocal());
        }

        let has_negative = self.left_type.is_infinite() || self.left.is_negative();
        let has_positive = self.right_type.is_infinite() || self.right.is_positive();

        let lower = || {
            let (r, rt) = Self::reciprocal_bound(&self.left, self.left_type);
            Self::from_parts(N::zero(), BoundType::Infty, r, rt)
        };
        let upper = || {
            let (l, lt) = Self::reciprocal_bound(&self.right, self.right_type);
            Self::from_parts(l, lt, N::zero(), BoundType::Infty)
        };

        match (has_negative, has_positive) {
            (true, true) => IntervalSplit::Split(lower(), upper()),
            (true, false) => IntervalSplit::Single(lower()),
            (false, true) => IntervalSplit::Single(upper()),
            (false, false) => IntervalSplit::Single(Self::empty_interval()),
        }
    }

    /// The interval `{x^e | x in self}`.
    pub fn power(&self, e: u32) -> Self {
        if self.is_empty() {
            return Self::empty_interval();
        }
        if e == 0 {
            return Self::point(N::one());
        }
        let pow = |x: &N| num_traits::pow(x.clone(), e as usize);

        if e % 2 == 1 {
            return Self::from_parts(
                pow(&self.left),
                self.left_type,
                pow(&self.right),
                self.right_type,
            );
        }

        let nonnegative = !self.left_type.is_infinite() && !self.left.is_negative();
        let nonpositive = !self.right_type.is_infinite() && !self.right.is_positive();

        if nonnegative {
            Self::from_parts(
                pow(&self.left),
                self.left_type,
                pow(&self.right),
                self.right_type,
            )
        } else if nonpositive {
            Self::from_parts(
                pow(&self.right),
                self.right_type,
                pow(&self.left),
                self.left_type,
            )
        } else {
            // Straddles zero.
            let (value, ty) = if !self.is_bounded() {
                (N::zero(), BoundType::Infty)
            } else {
                let l = pow(&self.left);
                let r = pow(&self.right);
                match l.cmp(&r) {
                    Ordering::Greater => (l, self.left_type),
                    Ordering::Less => (r, self.right_type),
                    Ordering::Equal => (
                        r,
                        BoundType::loosest_finite(self.left_type, self.right_type),
                    ),
                }
            };
            Self::from_parts(N::zero(), BoundType::Weak, value, ty)
        }
    }


    /// Intersection, or the canonical empty interval if it is empty.
    pub fn intersect(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::empty_interval();
        }
        let (left, left_type) = match (self.left_type, other.left_type) {
            (BoundType::Infty, BoundType::Infty) => (N::zero(), BoundType::Infty),
            (BoundType::Infty, t) => (other.left.clone(), t),
            (t, BoundType::Infty) => (self.left.clone(), t),
            (ts, to) => match self.left.cmp(&other.left) {
                Ordering::Greater => (self.left.clone(), ts),
                Ordering::Less => (other.left.clone(), to),
                Ordering::Equal => (self.left.clone(), BoundType::weakest(ts, to)),
            },
        };
        let (right, right_type) = match (self.right_type, other.right_type) {
            (BoundType::Infty, BoundType::Infty) => (N::zero(), BoundType::Infty),
            (BoundType::Infty, t) => (other.right.clone(), t),
            (t, BoundType::Infty) => (self.right.clone(), t),
            (ts, to) => match self.right.cmp(&other.right) {
                Ordering::Less => (self.right.clone(), ts),
                Ordering::Greater => (other.right.clone(), to),
                Ordering::Equal => (self.right.clone(), BoundType::weakest(ts, to)),
            },
        };
        if !left_type.is_infinite() && !right_type.is_infinite() && left > right {
            return Self::empty_interval();
        }
        let result = Self::from_parts(left, left_type, right, right_type);
        if result.is_empty() {
            Self::empty_interval()
        } else {
            result
        }
    }

    /// Smallest interval containing both operands.
    pub fn hull(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        let (left, left_type) = match (self.left_type, other.left_type) {
            (BoundType::Infty, _) | (_, BoundType::Infty) => (N::zero(), BoundType::Infty),
            (ts, to) => match self.left.cmp(&other.left) {
                Ordering::Less => (self.left.clone(), ts),
                Ordering::Greater => (other.left.clone(), to),
                Ordering::Equal => (self.left.clone(), BoundType::loosest_finite(ts, to)),
            },
        };
        let (right, right_type) = match (self.right_type, other.right_type) {
            (BoundType::Infty, _) | (_, BoundType::Infty) => (N::zero(), BoundType::Infty),
            (ts, to) => match self.right.cmp(&other.right) {
                Ordering::Greater => (self.right.clone(), ts),
                Ordering::Less => (other.right.clone(), to),
                Ordering::Equal => (self.right.clone(), BoundType::loosest_finite(ts, to)),
            },
        };
        Self::from_parts(left, left_type, right, right_type)
    }

    // The relations below order intervals by their bounds, not the reals
    // they enclose.

    /// Bound-wise equality.
    pub fn is_equal(&self, other: &Self) -> bool {
        self == other
    }

    /// Whether the left bound of `self` is at most the left bound of `other`.
    pub fn is_less_or_equal(&self, other: &Self) -> bool {
        match (self.left_type.is_infinite(), other.left_type.is_infinite()) {
            (true, _) => true,
            (false, true) => false,
            (false, false) => self.left <= other.left,
        }
    }

    /// Whether the right bound of `self` is at least the right bound of `other`.
    pub fn is_greater_or_equal(&self, other: &Self) -> bool {
        match (self.right_type.is_infinite(), other.right_type.is_infinite()) {
            (true, _) => true,
            (false, true) => false,
            (false, false) => self.right >= other.right,
        }
    }
}

// Stored values of infinite bounds are ignored.
impl<N: PartialEq> PartialEq for ExactInterval<N> {
    fn eq(&self, other: &Self) -> bool {
        self.left_type == other.left_type
            && self.right_type == other.right_type
            && (self.left_type.is_infinite() || self.left == other.left)
            && (self.right_type.is_infinite() || self.right == other.right)
    }
}

impl<N: Eq> Eq for ExactInterval<N> {}

impl<N: ExactNumber> fmt::Display for ExactInterval<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.left_type {
            BoundType::Infty => write!(f, "(-inf")?,
            BoundType::Strict => write!(f, "({}", self.left)?,
            BoundType::Weak => write!(f, "[{}", self.left)?,
        }
        match self.right_type {
            BoundType::Infty => write!(f, ", inf)"),
            BoundType::Strict => write!(f, ", {})", self.right),
            BoundType::Weak => write!(f, ", {}]", self.right),
        }
    }
}

impl<N: ExactNumber> Add for &ExactInterval<N> {
    type Output = ExactInterval<N>;

    fn add(self, rhs: &ExactInterval<N>) -> ExactInterval<N> {
        ExactInterval::add(self, rhs)
    }
}

impl<N: ExactNumber> Mul for &ExactInterval<N> {
    type Output = ExactInterval<N>;

    fn mul(self, rhs: &ExactInterval<N>) -> ExactInterval<N> {
        ExactInterval::mul(self, rhs)
    }
}

impl<N: ExactNumber> Neg for &ExactInterval<N> {
    type Output = ExactInterval<N>;

    fn neg(self) -> ExactInterval<N> {
        self.minus()
    }
}
