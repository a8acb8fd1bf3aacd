//! Sturm Sequences.
//!
//! For a square-free polynomial `p`, the sequence
//!
//! ```text
//! p_0 = p,  p_1 = p',  p_{i+1} = -rem(p_{i-1}, p_i)
//! ```
//!
//! has the property that the drop in sign variations between `a` and `b`
//! equals the number of distinct real roots of `p` in `(a, b]`. The sequence is
//! built from the square-free part, so multiple roots are counted once.
//!
//! ## References
//!
//! - Basu, Pollack, Roy: "Algorithms in Real Algebraic Geometry", Thm 2.50
//! - Z3's `math/polynomial/upolynomial.cpp` (`sturm_seq`)

use super::Polynomial;
use crate::interval::{BoundType, ExactInterval};
use crate::numbers::ExactNumber;
use crate::sign::Sign;
use smallvec::SmallVec;

/// Cached Sturm sequence of a polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SturmSequence<N> {
    polys: Vec<Polynomial<N>>,
}

impl<N: ExactNumber> SturmSequence<N> {
    /// Build the Sturm sequence of the square-free part of `p`.
    pub fn new(p: &Polynomial<N>) -> Self {
        let head = p.square_free_part();
        if head.is_constant() {
            return Self { polys: vec![head] };
        }
        let mut polys = vec![head.clone(), head.derivative()];
        loop {
            let n = polys.len();
            let r = polys[n - 2].rem(&polys[n - 1]);
            if r.is_zero() {
                break;
            }
            polys.push(r.neg());
        }
        Self { polys }
    }

    /// The square-free polynomial the sequence starts with.
    pub fn polynomial(&self) -> &Polynomial<N> {
        &self.polys[0]
    }

    /// Number of polynomials in the sequence.
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// Whether the sequence is empty (never, by construction).
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    fn variations(signs: impl Iterator<Item = Sign>) -> usize {
        let nonzero: SmallVec<[Sign; 8]> = signs.filter(|s| !s.is_zero()).collect();
        nonzero.windows(2).filter(|w| w[0] != w[1]).count()
    }

    /// Sign variations of the sequence evaluated at `x`.
    pub fn sign_changes_at(&self, x: &N) -> usize {
        Self::variations(self.polys.iter().map(|p| p.sign_at(x)))
    }

    /// Sign variations for `x -> -inf`.
    pub fn sign_changes_at_neg_infinity(&self) -> usize {
        Self::variations(self.polys.iter().map(|p| p.sign_at_neg_infinity()))
    }

    /// Sign variations for `x -> +inf`.
    pub fn sign_changes_at_pos_infinity(&self) -> usize {
        Self::variations(self.polys.iter().map(|p| p.sign_at_pos_infinity()))
    }

    /// Whether `x` is a root of the polynomial.
    pub fn is_root(&self, x: &N) -> bool {
        self.polys[0].eval(x).is_zero()
    }

    /// Number of distinct real roots in `interval`, honouring bound types.
    pub fn count_roots(&self, interval: &ExactInterval<N>) -> usize {
        if interval.is_empty() || self.polys[0].is_constant() {
            return 0;
        }
        if interval.is_point() {
            return usize::from(self.is_root(interval.left()));
        }

        let left_infinite = interval.left_type().is_infinite();
        let right_infinite = interval.right_type().is_infinite();

        let va = if left_infinite {
            self.sign_changes_at_neg_infinity()
        } else {
            self.sign_changes_at(interval.left())
        };
        let vb = if right_infinite {
            self.sign_changes_at_pos_infinity()
        } else {
            self.sign_changes_at(interval.right())
        };

        // va - vb counts roots in (a, b].
        let mut count = va.saturating_sub(vb);
        if interval.left_type() == BoundType::Weak && self.is_root(interval.left()) {
            count += 1;
        }
        if interval.right_type() == BoundType::Strict && self.is_root(interval.right()) {
            count = count.saturating_sub(1);
        }
        count
    }

    /// Whether `interval` contains exactly one root.
    pub fn is_isolating(&self, interval: &ExactInterval<N>) -> bool {
        self.count_roots(interval) == 1
    }
}
