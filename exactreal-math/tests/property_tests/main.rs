//! Property-based tests for exactreal-math
//!
//! This suite contains property tests for:
//! - Interval arithmetic laws and enclosure guarantees
//! - Root counting, refinement and comparison of algebraic numbers

mod algebraic_properties;
mod interval_properties;
