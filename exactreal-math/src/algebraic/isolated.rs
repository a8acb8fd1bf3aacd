//! Interval-represented algebraic numbers.
//!
//! An [`IsolatedRan`] is the unique real root of a polynomial inside an
//! isolating interval. Queries that the interval cannot answer yet are resolved
//! by bisecting it, using the cached Sturm sequence to keep the half that holds
//! the root.
//!
//! ## Normal Form
//!
//! After construction the interval is bounded, open, and excludes 0, unless the
//! value is already known exactly. Construction collapses to the exact value
//! when
//!
//! - the interval is a point,
//! - the square-free part of the polynomial is linear,
//! - an included endpoint is the root, or
//! - the root is 0.
//!
//! Infinite bounds are replaced by the Cauchy bound, and an interval around 0
//! is cut at 0. The sign of the number is then the sign of either bound.
//!
//! ## Refinement
//!
//! Each step halves the interval. A step whose midpoint is the root collapses
//! the number; afterwards every query is answered from the exact value.
//! Refinement loops stop at a caller supplied predicate or at the configured
//! cap, which fails with [`AlgebraicError::RefinementDidNotConverge`] and leaves
//! the number usable.
//!
//! ## References
//!
//! - Z3's `math/realclosure` and `nlsat` algebraic numbers
//! - Collins, Loos: "Real Zeros of Polynomials" (1982)

use super::config::{Refinement, RefinementConfig};
use super::{AlgebraicError, AlgebraicResult};
use crate::interval::{BoundType, ExactInterval};
use crate::numbers::ExactNumber;
use crate::polynomial::{IntervalEvaluator, Polynomial, SturmSequence};
use crate::sign::Sign;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// A real root of a polynomial, known through an isolating interval.
#[derive(Debug, Clone)]
pub struct IsolatedRan<N> {
    polynomial: Arc<Polynomial<N>>,
    sturm: Arc<SturmSequence<N>>,
    interval: ExactInterval<N>,
    value: Option<N>,
    is_root: bool,
    refinements: u64,
}

impl<N: ExactNumber> IsolatedRan<N> {
    /// The root of `polynomial` inside `interval`.
    ///
    /// Fails unless `interval` holds exactly one distinct real root.
    pub fn new(
        polynomial: Arc<Polynomial<N>>,
        interval: ExactInterval<N>,
        is_root: bool,
    ) -> AlgebraicResult<Self> {
        if polynomial.is_zero() {
            return Err(AlgebraicError::ZeroPolynomial);
        }
        let sturm = Arc::new(SturmSequence::new(&polynomial));
        Self::with_shared(polynomial, sturm, interval, is_root)
    }

    /// Another root of the same polynomial, sharing its Sturm sequence.
    pub fn sibling(&self, interval: ExactInterval<N>, is_root: bool) -> AlgebraicResult<Self> {
        Self::with_shared(
            Arc::clone(&self.polynomial),
            Arc::clone(&self.sturm),
            interval,
            is_root,
        )
    }

    /// Build from a polynomial and its precomputed Sturm sequence.
    pub(crate) fn with_shared(
        polynomial: Arc<Polynomial<N>>,
        sturm: Arc<SturmSequence<N>>,
        interval: ExactInterval<N>,
        is_root: bool,
    ) -> AlgebraicResult<Self> {
        if polynomial.is_zero() {
            return Err(AlgebraicError::ZeroPolynomial);
        }
        let roots = sturm.count_roots(&interval);
        if roots != 1 {
            return Err(AlgebraicError::NonIsolatingInterval { roots });
        }
        let mut ran = Self {
            polynomial,
            sturm,
            interval,
            value: None,
            is_root,
            refinements: 0,
        };
        ran.normalize();
        Ok(ran)
    }

    fn normalize(&mut self) {
        if self.interval.is_point() {
            let v = self.interval.left().clone();
            self.collapse(v);
            return;
        }

        let square_free = self.sturm.polynomial();
        if square_free.degree() == 1 {
            // Monic, so the root is the negated constant term.
            let v = -square_free.constant_term();
            self.collapse(v);
            return;
        }

        let (left, left_type) = (self.interval.left().clone(), self.interval.left_type());
        let (right, right_type) = (self.interval.right().clone(), self.interval.right_type());
        if left_type == BoundType::Weak && self.sturm.is_root(&left) {
            self.collapse(left);
            return;
        }
        if right_type == BoundType::Weak && self.sturm.is_root(&right) {
            self.collapse(right);
            return;
        }

        let bound = self.polynomial.cauchy_bound();
        let left = if left_type.is_infinite() {
            -bound.clone()
        } else {
            left
        };
        let right = if right_type.is_infinite() { bound } else { right };
        // Neither endpoint is a root now.
        self.interval =
            ExactInterval::from_parts(left, BoundType::Strict, right, BoundType::Strict);

        let zero = N::zero();
        if self.interval.contains(&zero) {
            if self.sturm.is_root(&zero) {
                self.collapse(zero);
                return;
            }
            let negative = ExactInterval::from_parts(
                self.interval.left().clone(),
                BoundType::Strict,
                zero.clone(),
                BoundType::Strict,
            );
            self.interval = if self.sturm.count_roots(&negative) == 1 {
                negative
            } else {
                ExactInterval::from_parts(
                    zero,
                    BoundType::Strict,
                    self.interval.right().clone(),
                    BoundType::Strict,
                )
            };
            debug!("split isolating interval at 0: {}", self.interval);
        }
    }

    fn collapse(&mut self, v: N) {
        debug!("root of {} collapsed to {}", self.polynomial, v);
        self.interval = ExactInterval::point(v.clone());
        self.value = Some(v);
    }


    /// The defining polynomial.
    pub fn polynomial(&self) -> &Arc<Polynomial<N>> {
        &self.polynomial
    }

    /// The Sturm sequence of the defining polynomial.
    pub fn sturm_sequence(&self) -> &Arc<SturmSequence<N>> {
        &self.sturm
    }

    /// The current isolating interval; a point once collapsed.
    pub fn interval(&self) -> &ExactInterval<N> {
        &self.interval
    }

    /// The exact value, once known.
    pub fn value(&self) -> Option<&N> {
        self.value.as_ref()
    }

    /// Whether the exact value is known.
    pub fn is_collapsed(&self) -> bool {
        self.value.is_some()
    }

    /// Whether the number was produced as a polynomial root.
    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// Set the root flag.
    pub fn set_is_root(&mut self, is_root: bool) {
        self.is_root = is_root;
    }

    /// Total bisection steps performed on this number.
    pub fn refinements(&self) -> u64 {
        self.refinements
    }


    /// Halve the isolating interval once. Returns true if the value is known
    /// afterwards.
    pub fn refine(&mut self) -> bool {
        if self.value.is_some() {
            return true;
        }
        let m = self.interval.midpoint();
        self.refinements += 1;
        if self.sturm.is_root(&m) {
            self.collapse(m);
            return true;
        }
        let lower = ExactInterval::from_parts(
            self.interval.left().clone(),
            BoundType::Strict,
            m.clone(),
            BoundType::Strict,
        );
        self.interval = if self.sturm.count_roots(&lower) == 1 {
            lower
        } else {
            ExactInterval::from_parts(
                m,
                BoundType::Strict,
                self.interval.right().clone(),
                BoundType::Strict,
            )
        };
        trace!("refined to {}", self.interval);
        false
    }

    /// Refine until `stop` holds for the interval or the value is known.
    ///
    /// At most `max_refinements` steps are taken; the number stays valid when
    /// the cap is hit.
    pub fn refine_until<F>(
        &mut self,
        max_refinements: usize,
        mut stop: F,
    ) -> AlgebraicResult<Refinement>
    where
        F: FnMut(&ExactInterval<N>) -> bool,
    {
        let mut steps = 0;
        loop {
            if self.value.is_some() {
                return Ok(Refinement::Collapsed);
            }
            if stop(&self.interval) {
                return Ok(Refinement::Resolved);
            }
            if steps >= max_refinements {
                warn!(
                    "refinement of root of {} stopped after {} steps at {}",
                    self.polynomial, steps, self.interval
                );
                return Err(AlgebraicError::RefinementDidNotConverge { iterations: steps });
            }
            self.refine();
            steps += 1;
        }
    }

    /// Refine until the interval is narrower than `2^-precision_bits`.
    pub fn refine_to_precision(
        &mut self,
        config: &RefinementConfig,
    ) -> AlgebraicResult<Refinement> {
        let target: N = config.target_width();
        self.refine_until(config.max_refinements, |iv| {
            iv.width().is_some_and(|w| w < target)
        })
    }


    /// Returns true if the number is 0. Exact without refinement, since a zero
    /// root collapses on construction.
    pub fn is_zero(&self) -> bool {
        self.value.as_ref().is_some_and(|v| v.is_zero())
    }

    /// Sign of the number, read off the normalised interval.
    pub fn sgn(&self) -> Sign {
        match &self.value {
            Some(v) => Sign::of(v),
            None => self.interval.sgn(),
        }
    }

    /// Sign of `q` at the number.
    ///
    /// `q` vanishes at the root iff `gcd(p, q)` has a root in the isolating
    /// interval; otherwise the interval is refined until the enclosure of `q`
    /// over it excludes 0.
    pub fn sgn_of_with<E>(
        &mut self,
        q: &Polynomial<N>,
        evaluator: &E,
        config: &RefinementConfig,
    ) -> AlgebraicResult<Sign>
    where
        E: IntervalEvaluator<N> + ?Sized,
    {
        if let Some(v) = &self.value {
            return Ok(Sign::of(&evaluator.evaluate_at(q, v)));
        }
        if q.is_constant() {
            return Ok(Sign::of(&q.constant_term()));
        }

        let g = self.polynomial.gcd(q);
        if !g.is_constant() && SturmSequence::new(&g).count_roots(&self.interval) > 0 {
            debug!("{} vanishes at root of {}", q, self.polynomial);
            return Ok(Sign::Zero);
        }

        let enclose = evaluator.prepare(q);
        let mut sign = Sign::Zero;
        let outcome = self.refine_until(config.max_refinements, |iv| {
            sign = enclose(iv).sgn();
            !sign.is_zero()
        })?;
        match (outcome, &self.value) {
            (Refinement::Collapsed, Some(v)) => Ok(Sign::of(&evaluator.evaluate_at(q, v))),
            _ => Ok(sign),
        }
    }

    /// A point of the interval to branch on.
    ///
    /// Returns the midpoint when it is not an integer. An integral midpoint is
    /// returned only when it is the root itself; otherwise the interval is
    /// bisected and the search repeats.
    pub fn branching_point(&mut self, config: &RefinementConfig) -> AlgebraicResult<N> {
        let mut steps = 0;
        loop {
            if let Some(v) = &self.value {
                return Ok(v.clone());
            }
            let m = self.interval.midpoint();
            if self.sturm.is_root(&m) {
                self.collapse(m.clone());
                return Ok(m);
            }
            if !m.is_integral() {
                return Ok(m);
            }
            if steps >= config.max_refinements {
                warn!("no branching point within {} steps", steps);
                return Err(AlgebraicError::RefinementDidNotConverge { iterations: steps });
            }
            self.refine();
            steps += 1;
        }
    }

    /// A point of the current isolating interval.
    pub fn approximate_value(&self) -> N {
        match &self.value {
            Some(v) => v.clone(),
            None => self.interval.midpoint(),
        }
    }

    /// Whether the number lies in `query`.
    ///
    /// Refines until the isolating interval is inside `query` or disjoint from
    /// it. Endpoints of `query` that are roots are checked first, as no open
    /// interval around them can be decided.
    pub fn contained_in(
        &mut self,
        query: &ExactInterval<N>,
        config: &RefinementConfig,
    ) -> AlgebraicResult<bool> {
        if let Some(v) = &self.value {
            return Ok(query.contains(v));
        }
        if query.is_empty() {
            return Ok(false);
        }
        let endpoints = [
            (!query.left_type().is_infinite()).then(|| query.left().clone()),
            (!query.right_type().is_infinite()).then(|| query.right().clone()),
        ];
        for e in endpoints.into_iter().flatten() {
            if self.interval.contains(&e) && self.sturm.is_root(&e) {
                self.collapse(e);
                return Ok(self.value.as_ref().is_some_and(|v| query.contains(v)));
            }
        }

        let outcome = self.refine_until(config.max_refinements, |iv| {
            query.contains_interval(iv) || iv.intersect(query).is_empty()
        })?;
        match (outcome, &self.value) {
            (Refinement::Collapsed, Some(v)) => Ok(query.contains(v)),
            _ => Ok(query.contains_interval(&self.interval)),
        }
    }


    /// Order the number against the exact value `v`.
    pub fn compare_value(
        &mut self,
        v: &N,
        config: &RefinementConfig,
    ) -> AlgebraicResult<Ordering> {
        self.compare_value_within(v, config.max_refinements)
    }

    fn compare_value_within(&mut self, v: &N, budget: usize) -> AlgebraicResult<Ordering> {
        if let Some(x) = &self.value {
            return Ok(x.cmp(v));
        }
        if self.interval.contains(v) && self.sturm.is_root(v) {
            self.collapse(v.clone());
            return Ok(Ordering::Equal);
        }
        let outcome = self.refine_until(budget, |iv| !iv.contains(v))?;
        Ok(match (outcome, &self.value) {
            (Refinement::Collapsed, Some(x)) => x.cmp(v),
            _ if self.interval.left() >= v => Ordering::Greater,
            _ => Ordering::Less,
        })
    }

    /// Order two interval-represented numbers.
    ///
    /// Overlapping intervals holding a common root of both polynomials certify
    /// equality. Otherwise the numbers are refined in turn until their intervals
    /// separate. The cap bounds the bisections of both numbers together.
    pub fn compare(
        &mut self,
        other: &mut Self,
        config: &RefinementConfig,
    ) -> AlgebraicResult<Ordering> {
        let mut steps = 0;
        loop {
            let budget = config.max_refinements.saturating_sub(steps);
            if let Some(v) = other.value.clone() {
                return self
                    .compare_value_within(&v, budget)
                    .map_err(|e| e.after_steps(steps));
            }
            if let Some(v) = self.value.clone() {
                return other
                    .compare_value_within(&v, budget)
                    .map(Ordering::reverse)
                    .map_err(|e| e.after_steps(steps));
            }
            if let Some(ord) = Self::disjoint_order(&self.interval, &other.interval) {
                return Ok(ord);
            }
            if steps == 0 && self.shares_root_with(other) {
                debug!(
                    "roots of {} and {} coincide in {}",
                    self.polynomial,
                    other.polynomial,
                    self.interval.intersect(&other.interval)
                );
                return Ok(Ordering::Equal);
            }
            if steps >= config.max_refinements {
                warn!("comparison undecided after {} steps", steps);
                return Err(AlgebraicError::RefinementDidNotConverge { iterations: steps });
            }
            if steps % 2 == 0 {
                self.refine();
            } else {
                other.refine();
            }
            steps += 1;
        }
    }

    fn disjoint_order(a: &ExactInterval<N>, b: &ExactInterval<N>) -> Option<Ordering> {
        if !a.intersect(b).is_empty() {
            return None;
        }
        Some(a.left().cmp(b.left()))
    }

    /// Whether the two numbers are provably the same root.
    fn shares_root_with(&self, other: &Self) -> bool {
        let overlap = self.interval.intersect(&other.interval);
        if overlap.is_empty() {
            return false;
        }
        if Arc::ptr_eq(&self.sturm, &other.sturm) || self.polynomial == other.polynomial {
            return self.sturm.count_roots(&overlap) > 0;
        }
        let g = self.polynomial.gcd(&other.polynomial);
        !g.is_constant() && SturmSequence::new(&g).count_roots(&overlap) > 0
    }
}

impl<N: ExactNumber> fmt::Display for IsolatedRan<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{}", v),
            None => write!(f, "({}, {})", self.polynomial, self.interval),
        }
    }
}
