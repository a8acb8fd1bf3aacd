//! Univariate Polynomials over an Exact Field.
//!
//! Dense polynomials with exact coefficients, together with the collaborators
//! the algebraic-number layer consumes as black boxes:
//!
//! - [`sturm`]: Sturm sequences for counting distinct real roots in an interval
//! - [`horner`]: Horner schemes for interval evaluation
//! - [`evaluation`]: the [`IntervalEvaluator`] seam and its Horner-backed default
//!
//! ## References
//!
//! - Knuth: "The Art of Computer Programming Vol. 2", §4.6 (polynomial arithmetic)
//! - Z3's `math/polynomial/upolynomial.cpp`

pub mod evaluation;
pub mod horner;
pub mod sturm;

pub use evaluation::{Enclosure, HornerEvaluator, IntervalEvaluator};
pub use horner::{HornerScheme, HornerTerm, IntervalAssignment, Var};
pub use sturm::SturmSequence;

use crate::numbers::ExactNumber;
use crate::sign::Sign;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A univariate polynomial with exact coefficients.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polynomial<N> {
    /// Coefficients in increasing degree order; no trailing zeros.
    coeffs: Vec<N>,
}

impl<N: ExactNumber> Polynomial<N> {
    /// Create a polynomial from coefficients `a_0, a_1, ..., a_n`.
    pub fn new(coeffs: Vec<N>) -> Self {
        let mut poly = Self { coeffs };
        poly.normalize();
        poly
    }

    /// Create a polynomial from integer coefficients `a_0, a_1, ..., a_n`.
    pub fn from_integers(coeffs: &[i64]) -> Self {
        Self::new(coeffs.iter().map(|&c| N::from_i64(c)).collect())
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// A constant polynomial.
    pub fn constant(c: N) -> Self {
        Self::new(vec![c])
    }

    /// The polynomial `x`.
    pub fn x() -> Self {
        Self::monomial(N::one(), 1)
    }

    /// The polynomial `c * x^k`.
    pub fn monomial(c: N, k: usize) -> Self {
        let mut coeffs = vec![N::zero(); k + 1];
        coeffs[k] = c;
        Self::new(coeffs)
    }

    fn normalize(&mut self) {
        while self.coeffs.last().is_some_and(|c| c.is_zero()) {
            self.coeffs.pop();
        }
    }

    /// Coefficients in increasing degree order.
    #[inline]
    pub fn coeffs(&self) -> &[N] {
        &self.coeffs
    }

    /// Coefficient of `x^k`.
    pub fn coeff(&self, k: usize) -> N {
        self.coeffs.get(k).cloned().unwrap_or_else(N::zero)
    }

    /// Degree; the zero polynomial has degree 0.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Returns true for the zero polynomial.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns true for constant polynomials, including zero.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    /// Leading coefficient (zero for the zero polynomial).
    pub fn leading_coeff(&self) -> N {
        self.coeffs.last().cloned().unwrap_or_else(N::zero)
    }

    /// Constant term.
    pub fn constant_term(&self) -> N {
        self.coeff(0)
    }

    /// Evaluate at a point using Horner's method.
    pub fn eval(&self, x: &N) -> N {
        let mut result = N::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x.clone() + c.clone();
        }
        result
    }

    /// Sign of the value at a point.
    pub fn sign_at(&self, x: &N) -> Sign {
        Sign::of(&self.eval(x))
    }

    /// Sign for `x -> +inf`.
    pub fn sign_at_pos_infinity(&self) -> Sign {
        Sign::of(&self.leading_coeff())
    }

    /// Sign for `x -> -inf`.
    pub fn sign_at_neg_infinity(&self) -> Sign {
        let s = self.sign_at_pos_infinity();
        if self.degree() % 2 == 1 {
            -s
        } else {
            s
        }
    }

    /// Formal derivative.
    pub fn derivative(&self) -> Self {
        Self::new(
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, c)| c.clone() * N::from_i64(i as i64))
                .collect(),
        )
    }

    /// Multiply every coefficient by `c`.
    pub fn scale(&self, c: &N) -> Self {
        Self::new(self.coeffs.iter().map(|a| a.clone() * c.clone()).collect())
    }

    /// Negation.
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -c.clone()).collect(),
        }
    }

    /// Sum.
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        Self::new((0..len).map(|k| self.coeff(k) + other.coeff(k)).collect())
    }

    /// Difference.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Product.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![N::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j].clone() + a.clone() * b.clone();
            }
        }
        Self::new(coeffs)
    }

    /// Euclidean division: `self = q * divisor + r` with `deg r < deg divisor`.
    ///
    /// Division by the zero polynomial yields `(0, self)`.
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        if divisor.is_zero() {
            return (Self::zero(), self.clone());
        }
        let mut rem = self.coeffs.clone();
        let dd = divisor.degree();
        let lead = divisor.leading_coeff();
        if rem.len() <= dd {
            return (Self::zero(), self.clone());
        }
        let mut quot = vec![N::zero(); rem.len() - dd];

        for k in (0..quot.len()).rev() {
            let factor = rem[k + dd].clone() / lead.clone();
            if factor.is_zero() {
                continue;
            }
            for (i, c) in divisor.coeffs.iter().enumerate() {
                rem[k + i] = rem[k + i].clone() - factor.clone() * c.clone();
            }
            quot[k] = factor;
        }
        rem.truncate(dd);
        (Self::new(quot), Self::new(rem))
    }

    /// Remainder of Euclidean division.
    pub fn rem(&self, divisor: &Self) -> Self {
        self.div_rem(divisor).1
    }

    /// Scale to leading coefficient 1; zero stays zero.
    pub fn make_monic(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let lc = self.leading_coeff();
        self.scale(&(N::one() / lc))
    }

    /// Monic greatest common divisor; `gcd(0, 0) = 0`.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = a.rem(&b);
            a = b;
            b = r;
        }
        a.make_monic()
    }

    /// Monic polynomial with the same roots, each of multiplicity one.
    pub fn square_free_part(&self) -> Self {
        if self.degree() <= 1 {
            return self.make_monic();
        }
        let g = self.gcd(&self.derivative());
        self.div_rem(&g).0.make_monic()
    }

    /// Cauchy's bound `1 + max |a_i / a_n|`: every real root `r` satisfies
    /// `|r| < bound`.
    pub fn cauchy_bound(&self) -> N {
        if self.is_constant() {
            return N::one();
        }
        let lc = self.leading_coeff().abs();
        let max_ratio = self.coeffs[..self.degree()]
            .iter()
            .map(|c| c.abs() / lc.clone())
            .max()
            .unwrap_or_else(N::zero);
        N::one() + max_ratio
    }
}

impl<N: ExactNumber> Default for Polynomial<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<N: ExactNumber> fmt::Display for Polynomial<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (k, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            let magnitude = c.abs();
            if first {
                if c.is_negative() {
                    write!(f, "-")?;
                }
            } else if c.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;

            let unit = magnitude.is_one();
            match k {
                0 => write!(f, "{}", magnitude)?,
                1 if unit => write!(f, "x")?,
                1 => write!(f, "{}*x", magnitude)?,
                _ if unit => write!(f, "x^{}", k)?,
                _ => write!(f, "{}*x^{}", magnitude, k)?,
            }
        }
        Ok(())
    }
}

impl<N: ExactNumber> Add for &Polynomial<N> {
    type Output = Polynomial<N>;

    fn add(self, rhs: &Polynomial<N>) -> Polynomial<N> {
        Polynomial::add(self, rhs)
    }
}

impl<N: ExactNumber> Sub for &Polynomial<N> {
    type Output = Polynomial<N>;

    fn sub(self, rhs: &Polynomial<N>) -> Polynomial<N> {
        Polynomial::sub(self, rhs)
    }
}

impl<N: ExactNumber> Mul for &Polynomial<N> {
    type Output = Polynomial<N>;

    fn mul(self, rhs: &Polynomial<N>) -> Polynomial<N> {
        Polynomial::mul(self, rhs)
    }
}

impl<N: ExactNumber> Neg for &Polynomial<N> {
    type Output = Polynomial<N>;

    fn neg(self) -> Polynomial<N> {
        Polynomial::neg(self)
    }
}
