//! # Workflows Module
//!
//! High-level entry points that drive the engine over many candidates at once.
//!
//! - **Candidate Evaluation** ([`evaluate`]) - Scores a batch of candidate symmetry
//!   operations against one structure, in parallel when the `parallel` feature is on,
//!   and selects the best acceptable fit.

pub mod evaluate;
