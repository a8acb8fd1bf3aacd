//! Algebraic number manager.
//!
//! Owns the refinement configuration, the interval evaluator, and a table of
//! interned defining polynomials, and counts the work done through it. Roots of
//! the same polynomial created here share one polynomial and one Sturm sequence.

use super::config::{Refinement, RefinementConfig};
use super::{AlgebraicResult, IsolatedRan, RealAlgebraicNumber};
use crate::interval::ExactInterval;
use crate::numbers::ExactNumber;
use crate::polynomial::{HornerEvaluator, IntervalEvaluator, Polynomial, SturmSequence};
use crate::sign::Sign;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use tracing::debug;

/// Statistics for algebraic number operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlgebraicStats {
    /// Bisection steps performed.
    pub refinements: u64,
    /// Sign queries answered.
    pub sign_evaluations: u64,
    /// Comparisons performed.
    pub comparisons: u64,
    /// Containment queries answered.
    pub containment_checks: u64,
    /// Polynomial table hits.
    pub cache_hits: u64,
}

type Interned<N> = (Arc<Polynomial<N>>, Arc<SturmSequence<N>>);

/// Manager for algebraic number operations.
pub struct AlgebraicManager<N: ExactNumber> {
    config: RefinementConfig,
    stats: AlgebraicStats,
    evaluator: Box<dyn IntervalEvaluator<N> + Send + Sync>,
    polynomials: FxHashMap<Polynomial<N>, Interned<N>>,
}

impl<N: ExactNumber + Hash> AlgebraicManager<N> {
    /// Create a manager evaluating through Horner schemes.
    pub fn new(config: RefinementConfig) -> Self {
        Self {
            config,
            stats: AlgebraicStats::default(),
            evaluator: Box::new(HornerEvaluator),
            polynomials: FxHashMap::default(),
        }
    }

    /// Create with default configuration.
    pub fn default_config() -> Self {
        Self::new(RefinementConfig::default())
    }

    /// Replace the interval evaluator.
    pub fn with_evaluator<E>(mut self, evaluator: E) -> Self
    where
        E: IntervalEvaluator<N> + Send + Sync + 'static,
    {
        self.evaluator = Box::new(evaluator);
        self
    }

    /// The refinement configuration.
    pub fn config(&self) -> &RefinementConfig {
        &self.config
    }

    /// Get statistics.
    pub fn stats(&self) -> &AlgebraicStats {
        &self.stats
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.stats = AlgebraicStats::default();
    }

    /// Number of distinct interned polynomials.
    pub fn interned(&self) -> usize {
        self.polynomials.len()
    }

    fn intern(&mut self, polynomial: Polynomial<N>) -> Interned<N> {
        if let Some((p, s)) = self.polynomials.get(&polynomial) {
            self.stats.cache_hits += 1;
            return (Arc::clone(p), Arc::clone(s));
        }
        let sturm = Arc::new(SturmSequence::new(&polynomial));
        let shared = Arc::new(polynomial.clone());
        debug!("interned {} ({} Sturm polynomials)", shared, sturm.len());
        self.polynomials
            .insert(polynomial, (Arc::clone(&shared), Arc::clone(&sturm)));
        (shared, sturm)
    }

    /// The shared copy of `polynomial`.
    pub fn polynomial(&mut self, polynomial: Polynomial<N>) -> Arc<Polynomial<N>> {
        self.intern(polynomial).0
    }

    /// The root of `polynomial` isolated by `interval`.
    pub fn create_root(
        &mut self,
        polynomial: Polynomial<N>,
        interval: ExactInterval<N>,
        is_root: bool,
    ) -> AlgebraicResult<RealAlgebraicNumber<N>> {
        let (p, sturm) = self.intern(polynomial);
        IsolatedRan::with_shared(p, sturm, interval, is_root).map(RealAlgebraicNumber::Isolated)
    }

    /// The root of `polynomial` strictly between `lower` and `upper`.
    pub fn create_root_between(
        &mut self,
        polynomial: Polynomial<N>,
        lower: N,
        upper: N,
        is_root: bool,
    ) -> AlgebraicResult<RealAlgebraicNumber<N>> {
        let interval = ExactInterval::open(lower, upper)?;
        self.create_root(polynomial, interval, is_root)
    }

    /// Create from an exact value.
    pub fn from_rational(&mut self, value: N, is_root: bool) -> RealAlgebraicNumber<N> {
        RealAlgebraicNumber::from_rational(value, is_root)
    }

    /// Sign of a number.
    pub fn sgn(&mut self, a: &RealAlgebraicNumber<N>) -> Sign {
        self.stats.sign_evaluations += 1;
        a.sgn()
    }

    /// Sign of `q` at a number.
    pub fn sgn_of(
        &mut self,
        a: &mut RealAlgebraicNumber<N>,
        q: &Polynomial<N>,
    ) -> AlgebraicResult<Sign> {
        self.stats.sign_evaluations += 1;
        let before = a.refinements();
        let result = a.sgn_of_with(q, self.evaluator.as_ref(), &self.config);
        self.stats.refinements += a.refinements() - before;
        result
    }

    /// Order two numbers.
    pub fn compare(
        &mut self,
        a: &mut RealAlgebraicNumber<N>,
        b: &mut RealAlgebraicNumber<N>,
    ) -> AlgebraicResult<Ordering> {
        self.stats.comparisons += 1;
        let before = a.refinements() + b.refinements();
        let result = a.compare(b, &self.config);
        self.stats.refinements += a.refinements() + b.refinements() - before;
        result
    }

    /// Whether a number lies in `interval`.
    pub fn contained_in(
        &mut self,
        a: &mut RealAlgebraicNumber<N>,
        interval: &ExactInterval<N>,
    ) -> AlgebraicResult<bool> {
        self.stats.containment_checks += 1;
        let before = a.refinements();
        let result = a.contained_in(interval, &self.config);
        self.stats.refinements += a.refinements() - before;
        result
    }

    /// A branching point for a number.
    pub fn branching_point(&mut self, a: &mut RealAlgebraicNumber<N>) -> AlgebraicResult<N> {
        let before = a.refinements();
        let result = a.branching_point(&self.config);
        self.stats.refinements += a.refinements() - before;
        result
    }

    /// Refine a number to the configured precision.
    pub fn refine_to_precision(
        &mut self,
        a: &mut RealAlgebraicNumber<N>,
    ) -> AlgebraicResult<Refinement> {
        let before = a.refinements();
        let result = a.refine_to_precision(&self.config);
        self.stats.refinements += a.refinements() - before;
        result
    }
}

impl<N: ExactNumber> fmt::Debug for AlgebraicManager<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgebraicManager")
            .field("config", &self.config)
            .field("stats", &self.stats)
            .field("interned", &self.polynomials.len())
            .finish_non_exhaustive()
    }
}
