//! # Engine Module
//!
//! The scoring engine: given the subunits of one structure, it evaluates how well a
//! candidate rigid-body operation and subunit permutation describe a point-group
//! symmetry of that structure.
//!
//! ## Architecture
//!
//! - **Scoring** ([`scorer`]) - `SuperpositionScorer`, built once per structure
//! - **Results** ([`score`]) - Explicit RMSD record and combined per-candidate scores
//! - **Configuration** ([`config`]) - Thresholds and domain constants, with validation
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Precondition violations reported by the engine
//!
//! ## Key Capabilities
//!
//! - **Positional Cα/Cβ RMSD** with detection of chain-reversed false positives
//! - **GTS-min scoring** using per-subunit spatial indices instead of all-pairs search
//! - **Thread-safe scoring** of many candidates against one immutable scorer

pub mod config;
pub mod error;
pub mod progress;
pub mod score;
pub mod scorer;
