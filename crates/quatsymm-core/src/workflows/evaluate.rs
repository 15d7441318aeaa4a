use crate::core::models::permutation::Permutation;
use crate::core::models::transformation::Transformation;
use crate::engine::error::ScoringError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::score::SuperpositionScores;
use crate::engine::scorer::SuperpositionScorer;
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A candidate symmetry operation proposed by an outer search.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub transformation: Transformation,
    pub permutation: Permutation,
}

impl Candidate {
    pub fn new(transformation: Transformation, permutation: Permutation) -> Self {
        Self {
            transformation,
            permutation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateEvaluation {
    /// Position of the candidate in the evaluated batch.
    pub index: usize,
    pub scores: SuperpositionScores,
}

/// Scores every candidate against `scorer`, returning evaluations in input order.
///
/// The first candidate violating a structural precondition aborts the batch.
#[instrument(skip_all, name = "candidate_evaluation_workflow")]
pub fn run(
    scorer: &SuperpositionScorer,
    candidates: &[Candidate],
    reporter: &ProgressReporter,
) -> Result<Vec<CandidateEvaluation>, ScoringError> {
    info!(
        candidates = candidates.len(),
        subunits = scorer.subunits().len(),
        "Scoring candidate symmetry operations."
    );

    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    reporter.report(Progress::BatchStart {
        total_candidates: candidates.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = candidates.iter().enumerate();

    #[cfg(feature = "parallel")]
    let iterator = candidates.par_iter().enumerate();

    let evaluations = iterator
        .map(|(index, candidate)| -> Result<CandidateEvaluation, ScoringError> {
            let scores = scorer.score(&candidate.transformation, &candidate.permutation)?;
            reporter.report(Progress::CandidateScored {
                index,
                acceptable: scores.rmsd.is_acceptable(),
            });
            Ok(CandidateEvaluation { index, scores })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let acceptable = evaluations
        .iter()
        .filter(|e| e.scores.rmsd.is_acceptable())
        .count();
    info!(
        scored = evaluations.len(),
        acceptable, "Candidate evaluation complete."
    );
    reporter.report(Progress::BatchFinish { acceptable });

    Ok(evaluations)
}

/// The acceptable evaluation with the lowest Cα RMSD, ties going to the higher GTS-min.
pub fn best(evaluations: &[CandidateEvaluation]) -> Option<&CandidateEvaluation> {
    evaluations
        .iter()
        .filter(|e| e.scores.rmsd.is_acceptable())
        .min_by(|a, b| a.scores.rank(&b.scores))
}
