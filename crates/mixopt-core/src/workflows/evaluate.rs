use crate::core::mix::error::ObjectiveError;
use crate::core::problem::assignment::Assignment;
use crate::core::problem::params::{ProblemParameters, SearchSettings};
use crate::engine::cache::CompositionCache;
use crate::engine::config::{BatchConfig, EvaluationConfig};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::{Solution, SolutionSet};
use crate::engine::tasks::batch_evaluation;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct EvaluationResult {
    /// Best candidates, lowest score first.
    pub solutions: Vec<Solution>,
    /// Batch position and error of every candidate that could not be scored.
    pub failures: Vec<(usize, ObjectiveError)>,
    pub evaluated: usize,
    /// Settings the parameter file carries for the search procedure.
    pub search: SearchSettings,
}

impl EvaluationResult {
    pub fn best(&self) -> Option<&Solution> {
        self.solutions.first()
    }
}

#[instrument(skip_all, name = "evaluation_workflow")]
pub fn run(
    assignments: &[Assignment],
    config: &EvaluationConfig,
    reporter: &ProgressReporter,
) -> Result<EvaluationResult, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Loading Parameters",
    });
    info!(
        path = %config.parameters_path.display(),
        "Loading problem parameters."
    );
    let params = ProblemParameters::load(&config.parameters_path)?;
    reporter.report(Progress::PhaseFinish);

    run_with_parameters(&params, assignments, &config.batch, reporter)
}

#[instrument(skip_all, name = "evaluation_with_parameters")]
pub fn run_with_parameters(
    params: &ProblemParameters,
    assignments: &[Assignment],
    config: &BatchConfig,
    reporter: &ProgressReporter,
) -> Result<EvaluationResult, EngineError> {
    if config.use_composition_cache {
        let mut cache = CompositionCache::new();
        return run_with_cache(params, assignments, config, &mut cache, reporter);
    }

    start_scoring(params, assignments, reporter);
    let scores = batch_evaluation::run(params, assignments, reporter);
    reporter.report(Progress::PhaseFinish);

    Ok(finish(params, assignments, scores, config, reporter))
}

/// Like [`run_with_parameters`], but scores through a cache owned by the caller.
///
/// A search procedure that keeps the cache between batches never rescores a unit composition it
/// has already seen under the same parameters. `config.use_composition_cache` is ignored here.
#[instrument(skip_all, name = "evaluation_with_cache")]
pub fn run_with_cache(
    params: &ProblemParameters,
    assignments: &[Assignment],
    config: &BatchConfig,
    cache: &mut CompositionCache,
    reporter: &ProgressReporter,
) -> Result<EvaluationResult, EngineError> {
    start_scoring(params, assignments, reporter);
    let scores = batch_evaluation::run_cached(params, assignments, cache, reporter);
    reporter.report(Progress::PhaseFinish);

    Ok(finish(params, assignments, scores, config, reporter))
}

fn start_scoring(
    params: &ProblemParameters,
    assignments: &[Assignment],
    reporter: &ProgressReporter,
) {
    reporter.report(Progress::PhaseStart { name: "Scoring" });
    info!(
        candidates = assignments.len(),
        units = params.unit_count(),
        types = params.type_count(),
        "Scoring candidate assignments."
    );
}

fn finish(
    params: &ProblemParameters,
    assignments: &[Assignment],
    scores: Vec<batch_evaluation::ScoreResult>,
    config: &BatchConfig,
    reporter: &ProgressReporter,
) -> EvaluationResult {
    let result = collect_results(params, assignments, scores, config.num_solutions);

    if !result.failures.is_empty() {
        warn!(
            failed = result.failures.len(),
            "Some candidate assignments could not be scored."
        );
        reporter.report(Progress::Message(format!(
            "{} of {} candidate(s) could not be scored.",
            result.failures.len(),
            result.evaluated
        )));
    }
    if let Some(best) = result.best() {
        info!(
            best_score = best.score,
            best_index = best.index,
            "Evaluation complete. Returning {} solution(s).",
            result.solutions.len()
        );
    }
    result
}

fn collect_results(
    params: &ProblemParameters,
    assignments: &[Assignment],
    scores: Vec<batch_evaluation::ScoreResult>,
    num_solutions: usize,
) -> EvaluationResult {
    let mut best = SolutionSet::new(num_solutions);
    let mut failures = Vec::new();

    for (index, (assignment, score)) in assignments.iter().zip(scores).enumerate() {
        match score {
            Ok(score) => best.offer(Solution {
                score,
                index,
                assignment: assignment.clone(),
            }),
            Err(e) => failures.push((index, e)),
        }
    }

    EvaluationResult {
        solutions: best.into_sorted_vec(),
        failures,
        evaluated: assignments.len(),
        search: params.search().clone(),
    }
}
