use super::config::{GTS_SHELL_CUTOFFS_SQ, ScorerConfig};
use super::error::{ScoringError, TraceKind};
use super::score::{RmsdScore, SuperpositionScores};
use crate::core::models::permutation::Permutation;
use crate::core::models::subunit::{Subunit, SubunitSet};
use crate::core::models::transformation::Transformation;
use crate::core::spatial::{SpatialIndex, SpatialIndexBuilder};
use crate::core::utils::geometry::{sum_squared_deviation, terminal_direction, terminal_indices};
use nalgebra::Point3;
use tracing::{debug, trace};

/// Number of GTS shells a point at squared distance `min_dist_sq` falls into.
///
/// Shells are nested, so a point counted for a tight cutoff is always counted for every
/// looser one as well.
pub fn gts_shell_count(min_dist_sq: f64) -> usize {
    GTS_SHELL_CUTOFFS_SQ
        .iter()
        .take_while(|&&cutoff_sq| min_dist_sq <= cutoff_sq)
        .count()
}

/// Scores candidate symmetry operations against a fixed set of subunits.
///
/// One [`SpatialIndex`] per subunit is built over its Cα trace at construction and never
/// modified afterwards, so a single scorer can be shared by any number of threads
/// evaluating different candidates.
#[derive(Debug, Clone)]
pub struct SuperpositionScorer {
    subunits: SubunitSet,
    indices: Vec<SpatialIndex>,
    config: ScorerConfig,
}

impl SuperpositionScorer {
    pub fn new(subunits: SubunitSet) -> Result<Self, ScoringError> {
        Self::with_config(subunits, ScorerConfig::default())
    }

    pub fn with_config(subunits: SubunitSet, config: ScorerConfig) -> Result<Self, ScoringError> {
        config.validate()?;
        if subunits.is_empty() {
            return Err(ScoringError::EmptySubunitSet);
        }
        if let Some(subunit) = subunits.iter().position(|s| s.calpha_trace.is_empty()) {
            return Err(ScoringError::EmptyTrace { subunit });
        }

        let indices = subunits
            .iter()
            .map(|subunit| -> Result<SpatialIndex, ScoringError> {
                let mut builder = SpatialIndexBuilder::with_capacity(
                    config.index_threshold,
                    subunit.calpha_count(),
                )?;
                for (i, point) in subunit.calpha_trace.iter().enumerate() {
                    builder.add_point(*point, i);
                }
                Ok(builder.build())
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            subunits = subunits.len(),
            calpha_points = subunits.total_calpha_count(),
            cbeta_points = subunits.total_cbeta_count(),
            threshold = config.index_threshold,
            "Built spatial indices for superposition scoring."
        );

        Ok(Self {
            subunits,
            indices,
            config,
        })
    }

    pub fn subunits(&self) -> &SubunitSet {
        &self.subunits
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    pub fn index(&self, subunit: usize) -> Option<&SpatialIndex> {
        self.indices.get(subunit)
    }

    /// Whether every position is mapped onto a subunit of the same sequence cluster.
    ///
    /// Permutations of the wrong length or with out-of-range entries are never equivalent.
    pub fn has_equivalent_subunits(&self, permutation: &Permutation) -> bool {
        permutation.len() == self.subunits.len()
            && permutation.iter().all(|(i, j)| {
                match (self.subunits.get(i), self.subunits.get(j)) {
                    (Some(a), Some(b)) => a.sequence_cluster_id == b.sequence_cluster_id,
                    _ => false,
                }
            })
    }

    /// Positional Cα RMSD between every subunit and its transformed mate.
    ///
    /// Returns [`RmsdScore::invalid`] when the permutation pairs subunits of different
    /// sequence clusters. The result is flagged as reversed when any subunit's chain
    /// direction turns by more than the configured alignment, or when the Cβ RMSD exceeds
    /// the Cα RMSD by more than the configured excess.
    pub fn calc_calpha_rmsd(
        &self,
        transformation: &Transformation,
        permutation: &Permutation,
    ) -> Result<RmsdScore, ScoringError> {
        self.validate_permutation(permutation)?;
        if !self.has_equivalent_subunits(permutation) {
            trace!(%permutation, "Permutation maps between sequence clusters.");
            return Ok(RmsdScore::invalid());
        }

        let mut ca_len = 0usize;
        let mut cb_len = 0usize;
        let mut ca_distance_sq = 0.0;
        let mut cb_distance_sq = 0.0;
        let mut reversed_subunits = 0usize;

        for (i, j) in permutation.iter() {
            let (orig, mapped) = self.pair(i, j)?;

            let transformed = transformation.apply_all(&mapped.calpha_trace);
            ca_distance_sq += sum_squared_deviation(&orig.calpha_trace, &transformed);
            ca_len += orig.calpha_count();

            let transformed_cb = transformation.apply_all(&mapped.cbeta_trace);
            cb_distance_sq += sum_squared_deviation(&orig.cbeta_trace, &transformed_cb);
            cb_len += orig.cbeta_count();

            if self.is_direction_reversed(&orig.calpha_trace, &transformed) {
                reversed_subunits += 1;
            }
        }

        let ca_rmsd = (ca_distance_sq / ca_len as f64).sqrt();
        let cb_rmsd = if cb_len > 0 {
            (cb_distance_sq / cb_len as f64).sqrt()
        } else {
            0.0
        };

        let mut reversed = reversed_subunits > 0;
        if cb_rmsd > ca_rmsd + self.config.max_cb_rmsd_excess {
            debug!(
                ca_rmsd,
                cb_rmsd, "Reverse alignment: CB RMSD exceeds CA RMSD."
            );
            reversed = true;
        }
        if reversed_subunits > 0 {
            trace!(
                reversed_subunits,
                total = self.subunits.len(),
                "Reverse alignment: terminal directions disagree."
            );
        }

        Ok(RmsdScore::new(ca_rmsd, cb_rmsd, reversed))
    }

    /// GTS-min percentage of the transformed Cα traces.
    ///
    /// Each transformed point is matched to the nearest Cα of the subunit it is mapped
    /// onto, not to the Cα at the same trace position, which keeps the score tolerant of
    /// register shifts. Every point contributes one count per shell (8, 4, 2 and 1 Å) its
    /// nearest neighbor falls into; the score is the fraction of the four possible counts
    /// per point, in percent.
    pub fn calc_gts_min_score(
        &self,
        transformation: &Transformation,
        permutation: &Permutation,
    ) -> Result<f64, ScoringError> {
        self.validate_permutation(permutation)?;

        let mut len = 0usize;
        let mut contacts = 0usize;
        for (i, j) in permutation.iter() {
            let mapped = &self.subunits.as_slice()[j];
            let transformed = transformation.apply_all(&mapped.calpha_trace);
            len += transformed.len();
            contacts += self.count_gts_min_contacts(i, &transformed);
        }

        Ok(100.0 * contacts as f64 / (GTS_SHELL_CUTOFFS_SQ.len() * len) as f64)
    }

    /// Sum of GTS shell counts of `points` against the Cα trace of subunit `subunit`.
    pub fn calc_gts_min_contacts(
        &self,
        subunit: usize,
        points: &[Point3<f64>],
    ) -> Result<usize, ScoringError> {
        if subunit >= self.subunits.len() {
            return Err(ScoringError::SubunitIndexOutOfRange {
                index: subunit,
                len: self.subunits.len(),
            });
        }
        Ok(self.count_gts_min_contacts(subunit, points))
    }

    /// Both metrics for one candidate.
    pub fn score(
        &self,
        transformation: &Transformation,
        permutation: &Permutation,
    ) -> Result<SuperpositionScores, ScoringError> {
        Ok(SuperpositionScores {
            rmsd: self.calc_calpha_rmsd(transformation, permutation)?,
            gts_min: self.calc_gts_min_score(transformation, permutation)?,
        })
    }

    fn count_gts_min_contacts(&self, subunit: usize, points: &[Point3<f64>]) -> usize {
        let index = &self.indices[subunit];
        let original = &self.subunits.as_slice()[subunit].calpha_trace;

        points
            .iter()
            .map(|p| {
                let min_dist_sq = index
                    .query(p)
                    .iter()
                    .map(|&k| (original[k] - p).norm_squared())
                    .fold(f64::INFINITY, f64::min);
                gts_shell_count(min_dist_sq)
            })
            .sum()
    }

    fn is_direction_reversed(&self, orig: &[Point3<f64>], transformed: &[Point3<f64>]) -> bool {
        let Some((first, last)) = terminal_indices(orig.len(), self.config.terminal_offset) else {
            return false;
        };
        let original_dir = terminal_direction(&orig[first], &orig[last]);
        let transformed_dir = terminal_direction(&transformed[first], &transformed[last]);
        match (original_dir, transformed_dir) {
            (Some(a), Some(b)) => a.dot(&b.into_inner()) < self.config.min_terminal_alignment,
            _ => false,
        }
    }

    /// The subunit at position `i` and the subunit mapped onto it, with matching traces.
    fn pair(&self, i: usize, j: usize) -> Result<(&Subunit, &Subunit), ScoringError> {
        let subunits = self.subunits.as_slice();
        let (orig, mapped) = (&subunits[i], &subunits[j]);

        if orig.calpha_count() != mapped.calpha_count() {
            return Err(ScoringError::TraceLengthMismatch {
                trace: TraceKind::CAlpha,
                subunit: i,
                mapped: j,
                expected: orig.calpha_count(),
                actual: mapped.calpha_count(),
            });
        }
        if orig.cbeta_count() != mapped.cbeta_count() {
            return Err(ScoringError::TraceLengthMismatch {
                trace: TraceKind::CBeta,
                subunit: i,
                mapped: j,
                expected: orig.cbeta_count(),
                actual: mapped.cbeta_count(),
            });
        }
        Ok((orig, mapped))
    }

    fn validate_permutation(&self, permutation: &Permutation) -> Result<(), ScoringError> {
        let len = self.subunits.len();
        if permutation.len() != len {
            return Err(ScoringError::PermutationLength {
                expected: len,
                actual: permutation.len(),
            });
        }
        if let Some((position, index)) = permutation.iter().find(|&(_, j)| j >= len) {
            return Err(ScoringError::PermutationIndexOutOfRange {
                position,
                index,
                len,
            });
        }
        Ok(())
    }
}
