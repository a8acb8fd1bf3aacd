//! Exact Interval Arithmetic.
//!
//! Bound-typed intervals over exact numbers. This is the substrate the
//! algebraic-number layer refines and evaluates on; it has no dependency on
//! that layer.

pub mod bound;
pub mod exact;

pub use bound::BoundType;
pub use exact::{ExactInterval, IntervalSplit};

use thiserror::Error;

/// Errors raised by interval construction and arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    /// Finite bounds with `left > right`.
    #[error("interval bounds cross: {left} > {right}")]
    CrossedBounds {
        /// Printed left bound.
        left: String,
        /// Printed right bound.
        right: String,
    },
    /// `div` was given a divisor containing zero.
    #[error("division by an interval containing zero")]
    DivisionByIntervalContainingZero,
}
