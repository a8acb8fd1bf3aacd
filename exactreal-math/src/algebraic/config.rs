//! Refinement configuration.

use crate::numbers::ExactNumber;
use serde::{Deserialize, Serialize};

/// Limits for the refinement loops of interval-represented numbers.
///
/// Passed explicitly to every operation that may refine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefinementConfig {
    /// Maximum bisection steps per request.
    pub max_refinements: usize,
    /// Target width `2^-precision_bits` for precision refinement.
    pub precision_bits: u32,
}

impl Default for RefinementConfig {
    fn default() -> Self {
        Self {
            max_refinements: 1000,
            precision_bits: 20,
        }
    }
}

impl RefinementConfig {
    /// Set the refinement cap.
    pub fn with_max_refinements(mut self, max_refinements: usize) -> Self {
        self.max_refinements = max_refinements;
        self
    }

    /// Set the target precision in bits.
    pub fn with_precision_bits(mut self, precision_bits: u32) -> Self {
        self.precision_bits = precision_bits;
        self
    }

    /// The target width `2^-precision_bits`.
    pub fn target_width<N: ExactNumber>(&self) -> N {
        N::one() / num_traits::pow(N::two(), self.precision_bits as usize)
    }
}

/// How a refinement request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refinement {
    /// The stopping predicate holds for the current interval.
    Resolved,
    /// The interval collapsed to the exact value.
    Collapsed,
}
