use super::config::ConfigError;
use crate::core::spatial::InvalidThresholdError;
use thiserror::Error;

/// Which trace of a subunit a length check refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    CAlpha,
    CBeta,
}

impl std::fmt::Display for TraceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceKind::CAlpha => write!(f, "CA"),
            TraceKind::CBeta => write!(f, "CB"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Cannot score an empty subunit set")]
    EmptySubunitSet,

    #[error("Subunit {subunit} has an empty CA trace")]
    EmptyTrace { subunit: usize },

    #[error("Permutation has {actual} entries but the structure has {expected} subunits")]
    PermutationLength { expected: usize, actual: usize },

    #[error("Permutation entry {position} maps to subunit {index}, but only {len} subunits exist")]
    PermutationIndexOutOfRange {
        position: usize,
        index: usize,
        len: usize,
    },

    #[error(
        "{trace} trace of subunit {mapped} has {actual} points but subunit {subunit} it is mapped onto has {expected}"
    )]
    TraceLengthMismatch {
        trace: TraceKind,
        subunit: usize,
        mapped: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Subunit index {index} is out of range for {len} subunits")]
    SubunitIndexOutOfRange { index: usize, len: usize },

    #[error("Invalid spatial index threshold: {0}")]
    InvalidThreshold(f64),

    #[error("Invalid scorer configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}

impl From<InvalidThresholdError> for ScoringError {
    fn from(err: InvalidThresholdError) -> Self {
        ScoringError::InvalidThreshold(err.0)
    }
}
