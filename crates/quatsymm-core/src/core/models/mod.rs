//! # Core Models Module
//!
//! Plain data types describing the structure under study and the candidate symmetry
//! operation being scored.
//!
//! ## Key Components
//!
//! - [`subunit`] - Per-subunit Cα/Cβ traces and sequence-cluster labels
//! - [`permutation`] - Candidate subunit-to-subunit mapping
//! - [`transformation`] - Rigid-body operation in homogeneous form
//!
//! ## Usage
//!
//! ```ignore
//! use quatsymm::core::models::{permutation::Permutation, subunit::{Subunit, SubunitSet}};
//!
//! let subunits: SubunitSet = vec![
//!     Subunit::new(ca_a, cb_a, 0),
//!     Subunit::new(ca_b, cb_b, 0),
//! ]
//! .into();
//! let swap = Permutation::cyclic(subunits.len(), 1);
//! ```

pub mod permutation;
pub mod subunit;
pub mod transformation;
