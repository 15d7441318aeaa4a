//! # Core Module
//!
//! Stateless building blocks of the scoring library: the data models describing subunits
//! and candidate symmetry operations, the spatial index used for nearest-neighbor lookups,
//! and small rigid-body geometry helpers.
//!
//! ## Architecture
//!
//! - **Structure Representation** ([`models`]) - Subunits, permutations and transformations
//! - **Neighbor Search** ([`spatial`]) - Uniform-grid index with precomputed neighborhoods
//! - **Geometry** ([`utils`]) - Point transformation, chain direction and RMSD helpers

pub mod models;
pub mod spatial;
pub mod utils;
