use std::cmp::Ordering;

/// Outcome of a positional Cα superposition for one candidate.
///
/// `valid` is false when the permutation pairs subunits from different sequence clusters;
/// in that case no distance was computed. `reversed` marks a superposition in which at
/// least one subunit runs the wrong way along the chain, or in which the side chains fit
/// much worse than the backbone. Such matches can have a deceptively low `distance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RmsdScore {
    /// Cα RMSD in Angstroms.
    pub distance: f64,
    /// Cβ RMSD in Angstroms, zero when no Cβ coordinates are available.
    pub cb_distance: f64,
    pub reversed: bool,
    pub valid: bool,
}

impl RmsdScore {
    /// Legacy value of the non-equivalent case in the signed encoding.
    pub const INVALID_SENTINEL: f64 = -1.0;

    pub fn invalid() -> Self {
        Self {
            distance: 0.0,
            cb_distance: 0.0,
            reversed: false,
            valid: false,
        }
    }

    pub fn new(distance: f64, cb_distance: f64, reversed: bool) -> Self {
        Self {
            distance,
            cb_distance,
            reversed,
            valid: true,
        }
    }

    /// The score as a single number: `-1.0` for invalid permutations, the negated
    /// distance for reversed matches, the distance otherwise.
    pub fn signed(&self) -> f64 {
        if !self.valid {
            Self::INVALID_SENTINEL
        } else if self.reversed {
            -self.distance
        } else {
            self.distance
        }
    }

    /// Whether this is a genuine, forward-running fit.
    pub fn is_acceptable(&self) -> bool {
        self.valid && !self.reversed
    }
}

/// Both fit metrics of one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperpositionScores {
    pub rmsd: RmsdScore,
    /// GTS-min percentage in `[0, 100]`.
    pub gts_min: f64,
}

impl SuperpositionScores {
    /// Orders acceptable fits first, then by ascending RMSD, then by descending GTS-min.
    pub fn rank(&self, other: &Self) -> Ordering {
        other
            .rmsd
            .is_acceptable()
            .cmp(&self.rmsd.is_acceptable())
            .then_with(|| {
                self.rmsd
                    .distance
                    .partial_cmp(&other.rmsd.distance)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| {
                other
                    .gts_min
                    .partial_cmp(&self.gts_min)
                    .unwrap_or(Ordering::Equal)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_score_encodes_as_sentinel() {
        let score = RmsdScore::invalid();
        assert!(!score.valid);
        assert!(!score.is_acceptable());
        assert_eq!(score.signed(), -1.0);
    }

    #[test]
    fn reversed_score_encodes_as_negated_distance() {
        let score = RmsdScore::new(2.5, 4.0, true);
        assert!(score.valid);
        assert!(!score.is_acceptable());
        assert_eq!(score.signed(), -2.5);
    }

    #[test]
    fn forward_score_encodes_as_distance() {
        let score = RmsdScore::new(0.75, 0.8, false);
        assert!(score.is_acceptable());
        assert_eq!(score.signed(), 0.75);
    }

    #[test]
    fn rank_prefers_acceptable_then_low_rmsd_then_high_gts() {
        let good = SuperpositionScores {
            rmsd: RmsdScore::new(1.0, 1.0, false),
            gts_min: 90.0,
        };
        let better_gts = SuperpositionScores {
            rmsd: RmsdScore::new(1.0, 1.0, false),
            gts_min: 95.0,
        };
        let reversed = SuperpositionScores {
            rmsd: RmsdScore::new(0.1, 3.0, true),
            gts_min: 99.0,
        };
        let worse = SuperpositionScores {
            rmsd: RmsdScore::new(3.0, 3.0, false),
            gts_min: 99.0,
        };

        assert_eq!(good.rank(&reversed), Ordering::Less);
        assert_eq!(good.rank(&worse), Ordering::Less);
        assert_eq!(better_gts.rank(&good), Ordering::Less);
        assert_eq!(good.rank(&good), Ordering::Equal);
    }
}
