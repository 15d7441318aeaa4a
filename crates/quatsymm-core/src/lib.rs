//! # QuatSymm Core Library
//!
//! Scoring of candidate point-group symmetry operations on multi-subunit protein
//! structures. Given the Cα/Cβ traces of every subunit, the library measures how well a
//! rigid-body transformation together with a subunit permutation superposes the structure
//! onto itself.
//!
//! ## Architectural Philosophy
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Subunit`, `Permutation`,
//!   `Transformation`), the uniform-grid `SpatialIndex` and rigid-body geometry helpers.
//!
//! - **[`engine`]: The Logic Core.** `SuperpositionScorer`, which prebuilds one spatial
//!   index per subunit and computes the positional Cα RMSD (with chain-reversal detection)
//!   and the GTS-min score for any candidate.
//!
//! - **[`workflows`]: The Public API.** Batch evaluation of many candidates against one
//!   structure, as driven by an outer symmetry search.
//!
//! Searching for candidates, choosing which symmetry group to test and reading structure
//! files are left to the caller.

pub mod core;
pub mod engine;
pub mod workflows;
