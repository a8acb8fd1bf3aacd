//! Interval bound types.

use serde::{Deserialize, Serialize};

/// Classification of an interval endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundType {
    /// The endpoint belongs to the interval.
    Weak,
    /// The endpoint is excluded.
    Strict,
    /// No bound on this side; the stored value is ignored.
    Infty,
}

impl BoundType {
    /// The weakest type obtainable when combining elements of two bounds:
    /// `Infty` dominates `Strict`, which dominates `Weak`.
    #[inline]
    pub fn weakest(a: BoundType, b: BoundType) -> BoundType {
        match (a, b) {
            (BoundType::Infty, _) | (_, BoundType::Infty) => BoundType::Infty,
            (BoundType::Strict, _) | (_, BoundType::Strict) => BoundType::Strict,
            _ => BoundType::Weak,
        }
    }

    /// The most inclusive finite type of two: `Weak` if either is `Weak`.
    ///
    /// Used when two coinciding endpoints are merged into one.
    #[inline]
    pub fn loosest_finite(a: BoundType, b: BoundType) -> BoundType {
        if a == BoundType::Weak || b == BoundType::Weak {
            BoundType::Weak
        } else {
            BoundType::Strict
        }
    }

    /// Returns true for [`BoundType::Infty`].
    #[inline]
    pub fn is_infinite(self) -> bool {
        self == BoundType::Infty
    }

    /// Returns true for [`BoundType::Strict`].
    #[inline]
    pub fn is_strict(self) -> bool {
        self == BoundType::Strict
    }

    /// Returns true for [`BoundType::Weak`].
    #[inline]
    pub fn is_weak(self) -> bool {
        self == BoundType::Weak
    }
}
