//! Horner Schemes.
//!
//! A Horner scheme is a binary expression tree
//!
//! ```text
//! h = var^exponent * h_dependent + h_independent
//! ```
//!
//! whose children are either nested schemes or constants. Evaluating it over
//! intervals gives a tighter enclosure than expanding the monomials, because
//! each variable occurrence is factored out once.
//!
//! Variable ranges are supplied by an explicit [`IntervalAssignment`]; a
//! variable missing from the assignment takes the assignment's fallback
//! interval, which is the whole real line unless configured otherwise.

use super::Polynomial;
use crate::interval::ExactInterval;
use crate::numbers::ExactNumber;
use rustc_hash::FxHashMap;
use std::fmt;

/// Variable identifier.
pub type Var = u32;

/// A child of a Horner node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HornerTerm<N> {
    /// A constant leaf.
    Constant(N),
    /// A nested scheme.
    Scheme(Box<HornerScheme<N>>),
}

/// A node `variable^exponent * dependent + independent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HornerScheme<N> {
    variable: Var,
    exponent: u32,
    dependent: HornerTerm<N>,
    independent: HornerTerm<N>,
}

/// Ranges for the variables of a Horner scheme.
#[derive(Debug, Clone)]
pub struct IntervalAssignment<N> {
    intervals: FxHashMap<Var, ExactInterval<N>>,
    fallback: ExactInterval<N>,
}

impl<N: ExactNumber> IntervalAssignment<N> {
    /// Empty assignment; unassigned variables range over the real line.
    pub fn new() -> Self {
        Self::with_fallback(ExactInterval::unbounded_interval())
    }

    /// Empty assignment with a custom range for unassigned variables.
    pub fn with_fallback(fallback: ExactInterval<N>) -> Self {
        Self {
            intervals: FxHashMap::default(),
            fallback,
        }
    }

    /// Assignment of a single variable.
    pub fn single(var: Var, interval: ExactInterval<N>) -> Self {
        let mut assignment = Self::new();
        assignment.assign(var, interval);
        assignment
    }

    /// Set the range of a variable.
    pub fn assign(&mut self, var: Var, interval: ExactInterval<N>) {
        self.intervals.insert(var, interval);
    }

    /// Range of a variable.
    pub fn get(&self, var: Var) -> &ExactInterval<N> {
        self.intervals.get(&var).unwrap_or(&self.fallback)
    }

    /// Number of explicitly assigned variables.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether no variable is explicitly assigned.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl<N: ExactNumber> Default for IntervalAssignment<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: ExactNumber> HornerScheme<N> {
    /// Create a node `variable^exponent * dependent + independent`.
    pub fn new(
        variable: Var,
        exponent: u32,
        dependent: HornerTerm<N>,
        independent: HornerTerm<N>,
    ) -> Self {
        Self {
            variable,
            exponent,
            dependent,
            independent,
        }
    }

    /// The factored variable.
    pub fn variable(&self) -> Var {
        self.variable
    }

    /// Its exponent.
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// The factor multiplied by `variable^exponent`.
    pub fn dependent(&self) -> &HornerTerm<N> {
        &self.dependent
    }

    /// The summand independent of this node's variable power.
    pub fn independent(&self) -> &HornerTerm<N> {
        &self.independent
    }

    /// Enclosure of the node's values over the given ranges.
    pub fn evaluate(&self, assignment: &IntervalAssignment<N>) -> ExactInterval<N> {
        let base = assignment.get(self.variable).power(self.exponent);
        base.mul(&self.dependent.evaluate(assignment))
            .add(&self.independent.evaluate(assignment))
    }

    /// Exact value at a point, or `None` if a variable is unassigned.
    pub fn evaluate_at(&self, values: &FxHashMap<Var, N>) -> Option<N> {
        let x = values.get(&self.variable)?;
        let base = num_traits::pow(x.clone(), self.exponent as usize);
        Some(base * self.dependent.evaluate_at(values)? + self.independent.evaluate_at(values)?)
    }
}

impl<N: ExactNumber> HornerTerm<N> {
    /// Horner form of a univariate polynomial in `var`. Runs of zero
    /// coefficients are folded into the exponent.
    pub fn from_univariate(p: &Polynomial<N>, var: Var) -> Self {
        let mut nonzero = p
            .coeffs()
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, c)| !c.is_zero());

        let Some((top, lead)) = nonzero.next() else {
            return HornerTerm::Constant(N::zero());
        };

        let mut term = HornerTerm::Constant(lead.clone());
        let mut degree = top;
        for (k, c) in nonzero {
            term = HornerTerm::Scheme(Box::new(HornerScheme::new(
                var,
                (degree - k) as u32,
                term,
                HornerTerm::Constant(c.clone()),
            )));
            degree = k;
        }
        if degree > 0 {
            term = HornerTerm::Scheme(Box::new(HornerScheme::new(
                var,
                degree as u32,
                term,
                HornerTerm::Constant(N::zero()),
            )));
        }
        term
    }

    /// Returns true for a constant leaf.
    pub fn is_constant(&self) -> bool {
        matches!(self, HornerTerm::Constant(_))
    }

    /// Enclosure of the term's values over the given ranges.
    pub fn evaluate(&self, assignment: &IntervalAssignment<N>) -> ExactInterval<N> {
        match self {
            HornerTerm::Constant(c) => ExactInterval::point(c.clone()),
            HornerTerm::Scheme(s) => s.evaluate(assignment),
        }
    }

    /// Exact value at a point, or `None` if a variable is unassigned.
    pub fn evaluate_at(&self, values: &FxHashMap<Var, N>) -> Option<N> {
        match self {
            HornerTerm::Constant(c) => Some(c.clone()),
            HornerTerm::Scheme(s) => s.evaluate_at(values),
        }
    }
}

impl<N: ExactNumber> fmt::Display for HornerTerm<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HornerTerm::Constant(c) => write!(f, "{}", c),
            HornerTerm::Scheme(s) => write!(f, "{}", s),
        }
    }
}

impl<N: ExactNumber> fmt::Display for HornerScheme<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.variable)?;
        if self.exponent != 1 {
            write!(f, "^{}", self.exponent)?;
        }
        write!(f, " * ({}) + {}", self.dependent, self.independent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::BoundType;
    use num_bigint::BigInt;
    use num_rational::BigRational;

    fn rat(n: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(n))
    }

    fn closed(l: i64, r: i64) -> ExactInterval<BigRational> {
        ExactInterval::closed(rat(l), rat(r)).expect("valid interval")
    }

    #[test]
    fn test_from_univariate_folds_zero_runs() {
        // x^4 - 2 = x^4 * (1) + (-2)
        let p = Polynomial::<BigRational>::from_integers(&[-2, 0, 0, 0, 1]);
        let h = HornerTerm::from_univariate(&p, 0);
        match &h {
            HornerTerm::Scheme(s) => {
                assert_eq!(s.exponent(), 4);
                assert_eq!(s.dependent(), &HornerTerm::Constant(rat(1)));
                assert_eq!(s.independent(), &HornerTerm::Constant(rat(-2)));
            }
            HornerTerm::Constant(_) => panic!("expected a scheme"),
        }
    }

    #[test]
    fn test_point_evaluation_matches_polynomial() {
        let p = Polynomial::<BigRational>::from_integers(&[3, 0, -1, 2]);
        let h = HornerTerm::from_univariate(&p, 7);
        let mut values = FxHashMap::default();
        for x in -3..=3 {
            values.insert(7, rat(x));
            assert_eq!(h.evaluate_at(&values), Some(p.eval(&rat(x))));
        }
        assert_eq!(h.evaluate_at(&FxHashMap::default()), None);
    }

    #[test]
    fn test_interval_evaluation_encloses() {
        // x^2 - 2 over [1, 2] -> [-1, 2]
        let p = Polynomial::<BigRational>::from_integers(&[-2, 0, 1]);
        let h = HornerTerm::from_univariate(&p, 0);
        let range = h.evaluate(&IntervalAssignment::single(0, closed(1, 2)));
        assert_eq!(range, closed(-1, 2));
    }

    #[test]
    fn test_even_power_uses_sign_information() {
        // x^2 over [-1, 1] is [0, 1], not [-1, 1].
        let p = Polynomial::<BigRational>::from_integers(&[0, 0, 1]);
        let h = HornerTerm::from_univariate(&p, 0);
        let range = h.evaluate(&IntervalAssignment::single(0, closed(-1, 1)));
        assert_eq!(range, closed(0, 1));
    }

    #[test]
    fn test_multivariate_and_fallback() {
        // x0 * (x1) + 1
        let inner = HornerTerm::Scheme(Box::new(HornerScheme::new(
            1,
            1,
            HornerTerm::Constant(rat(1)),
            HornerTerm::Constant(rat(0)),
        )));
        let h = HornerScheme::new(0, 1, inner, HornerTerm::Constant(rat(1)));

        let mut assignment = IntervalAssignment::new();
        assignment.assign(0, closed(1, 2));
        assignment.assign(1, closed(-1, 3));
        assert_eq!(h.evaluate(&assignment), closed(-1, 7));

        // Unassigned x1 ranges over the real line.
        let partial = IntervalAssignment::single(0, closed(1, 2));
        let range = h.evaluate(&partial);
        assert_eq!(range.left_type(), BoundType::Infty);
        assert_eq!(range.right_type(), BoundType::Infty);

        // A point fallback pins unassigned variables.
        let mut pinned = IntervalAssignment::with_fallback(ExactInterval::point(rat(0)));
        pinned.assign(0, closed(1, 2));
        assert_eq!(h.evaluate(&pinned), closed(1, 1));
    }
}
