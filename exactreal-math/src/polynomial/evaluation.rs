//! Polynomial evaluation over intervals.
//!
//! Sign determination of algebraic numbers only needs a sound enclosure of a
//! polynomial's values over an isolating interval. [`IntervalEvaluator`] is the
//! seam for that; [`HornerEvaluator`] is the default strategy.

use super::horner::{HornerTerm, IntervalAssignment};
use super::Polynomial;
use crate::interval::ExactInterval;
use crate::numbers::ExactNumber;

/// A range enclosure for one fixed polynomial, reused across intervals.
pub type Enclosure<'a, N> = Box<dyn Fn(&ExactInterval<N>) -> ExactInterval<N> + 'a>;

/// Bounds the range of a univariate polynomial.
pub trait IntervalEvaluator<N: ExactNumber> {
    /// An interval containing `{p(x) | x in interval}`.
    fn evaluate_over(&self, p: &Polynomial<N>, interval: &ExactInterval<N>) -> ExactInterval<N>;

    /// The exact value `p(x)`.
    fn evaluate_at(&self, p: &Polynomial<N>, x: &N) -> N {
        p.eval(x)
    }

    /// Fix `p` for repeated enclosures over shrinking intervals.
    ///
    /// Evaluators with per-polynomial setup override this to do it once.
    fn prepare<'a>(&'a self, p: &'a Polynomial<N>) -> Enclosure<'a, N> {
        Box::new(move |interval: &ExactInterval<N>| self.evaluate_over(p, interval))
    }
}

/// Interval evaluation through the Horner form of the polynomial.
#[derive(Debug, Clone, Copy, Default)]
pub struct HornerEvaluator;

fn enclose<N: ExactNumber>(
    p: &Polynomial<N>,
    horner: &HornerTerm<N>,
    interval: &ExactInterval<N>,
) -> ExactInterval<N> {
    if interval.is_point() {
        return ExactInterval::point(p.eval(interval.left()));
    }
    horner.evaluate(&IntervalAssignment::single(0, interval.clone()))
}

impl<N: ExactNumber> IntervalEvaluator<N> for HornerEvaluator {
    fn evaluate_over(&self, p: &Polynomial<N>, interval: &ExactInterval<N>) -> ExactInterval<N> {
        enclose(p, &HornerTerm::from_univariate(p, 0), interval)
    }

    fn prepare<'a>(&'a self, p: &'a Polynomial<N>) -> Enclosure<'a, N> {
        let horner = HornerTerm::from_univariate(p, 0);
        Box::new(move |interval: &ExactInterval<N>| enclose(p, &horner, interval))
    }
}
