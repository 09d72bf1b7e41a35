use crate::core::mix::capacity::CapacityAggregator;
use crate::core::mix::error::ObjectiveError;
use crate::core::mix::objective::Objective;
use crate::core::problem::assignment::Assignment;
use crate::core::problem::params::ProblemParameters;
use crate::engine::cache::CompositionCache;
use crate::engine::progress::{Progress, ProgressReporter};
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub type ScoreResult = Result<f64, ObjectiveError>;

/// Scores every assignment independently.
#[instrument(skip_all, name = "batch_evaluation_task", fields(candidates = assignments.len()))]
pub fn run(
    params: &ProblemParameters,
    assignments: &[Assignment],
    reporter: &ProgressReporter,
) -> Vec<ScoreResult> {
    let objective = Objective::new(params);
    reporter.report(Progress::BatchStart {
        candidates: assignments.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = assignments.iter();

    #[cfg(feature = "parallel")]
    let iterator = assignments.par_iter();

    let results: Vec<ScoreResult> = iterator
        .map(|assignment| {
            let result = objective.evaluate(assignment);
            reporter.report(Progress::CandidateScored);
            result
        })
        .collect();

    let failed = count_failures(&results);
    reporter.report(Progress::BatchFinish { failed });
    debug!(failed, "Batch evaluation complete.");
    results
}

/// Scores every assignment, evaluating each distinct unit composition at most once.
///
/// Compositions already present in `cache` are not re-evaluated; new successful scores are
/// added to it. Progress counts distinct compositions, not candidates.
#[instrument(skip_all, name = "cached_batch_evaluation_task", fields(candidates = assignments.len()))]
pub fn run_cached(
    params: &ProblemParameters,
    assignments: &[Assignment],
    cache: &mut CompositionCache,
    reporter: &ProgressReporter,
) -> Vec<ScoreResult> {
    let objective = Objective::new(params);

    let compositions: Vec<Result<Vec<usize>, ObjectiveError>> = assignments
        .iter()
        .map(|assignment| CapacityAggregator::composition(assignment, params))
        .collect();

    let mut distinct: HashSet<&[usize]> = HashSet::new();
    let mut pending: Vec<&[usize]> = Vec::new();
    let mut batch_scores: HashMap<&[usize], ScoreResult> = HashMap::new();
    for counts in compositions.iter().flatten() {
        let key = counts.as_slice();
        if !distinct.insert(key) {
            continue;
        }
        match cache.get(key) {
            Some(score) => {
                batch_scores.insert(key, Ok(score));
            }
            None => pending.push(key),
        }
    }

    let cache_hits = distinct.len() - pending.len();
    reporter.report(Progress::BatchStart {
        candidates: pending.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = pending.iter();

    #[cfg(feature = "parallel")]
    let iterator = pending.par_iter();

    let fresh: Vec<(&[usize], ScoreResult)> = iterator
        .map(|&counts| {
            let result = objective.evaluate_counts(counts);
            reporter.report(Progress::CandidateScored);
            (counts, result)
        })
        .collect();

    for (counts, result) in fresh {
        if let Ok(score) = result {
            cache.insert(counts.to_vec(), score);
        }
        batch_scores.insert(counts, result);
    }

    // Every Ok composition is in `distinct`, so it was either a cache hit or scored above.
    let results: Vec<ScoreResult> = compositions
        .iter()
        .map(|composition| match composition {
            Err(e) => Err(e.clone()),
            Ok(counts) => batch_scores[counts.as_slice()].clone(),
        })
        .collect();

    let failed = count_failures(&results);
    reporter.report(Progress::BatchFinish { failed });
    debug!(
        failed,
        distinct_compositions = distinct.len(),
        cache_hits,
        "Cached batch evaluation complete."
    );
    results
}

fn count_failures(results: &[ScoreResult]) -> usize {
    results.iter().filter(|result| result.is_err()).count()
}
