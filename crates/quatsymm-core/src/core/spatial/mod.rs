//! Threshold-limited neighbor lookup over static point sets.
//!
//! The scorer queries the same backbone traces once per transformed point for every
//! candidate symmetry operation, so each trace is binned once into a uniform grid whose
//! cell edge equals the query threshold. A lookup then touches the 27 cells around the
//! query position instead of the full trace.

pub mod index;

pub use index::{InvalidThresholdError, SpatialIndex, SpatialIndexBuilder};
