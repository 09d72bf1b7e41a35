use super::capacity::CapacityAggregator;
use super::error::ObjectiveError;
use super::estimate::{EnergyMixEstimator, MixEstimate};
use super::scoring::{ObjectiveScorer, ScoreBreakdown};
use crate::core::problem::params::ProblemParameters;

/// Every intermediate of one objective evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub unit_counts: Vec<usize>,
    pub capacity: Vec<f64>,
    pub estimate: MixEstimate,
    pub breakdown: ScoreBreakdown,
}

impl Evaluation {
    #[inline]
    pub fn score(&self) -> f64 {
        self.breakdown.total()
    }
}

/// Fitness function over plant type assignments for one set of problem parameters.
///
/// Holds only a shared reference, so any number of objectives (and threads) can evaluate
/// against the same parameters at once.
#[derive(Debug, Clone, Copy)]
pub struct Objective<'a> {
    params: &'a ProblemParameters,
}

impl<'a> Objective<'a> {
    pub fn new(params: &'a ProblemParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &'a ProblemParameters {
        self.params
    }

    pub fn evaluate(&self, assignment: &[usize]) -> Result<f64, ObjectiveError> {
        let capacity = CapacityAggregator::aggregate(assignment, self.params)?;
        let mix = EnergyMixEstimator::estimate(&capacity, self.params)?;
        ObjectiveScorer::score(&mix, self.params.target_mix_per_type())
    }

    /// Score from per-type unit counts alone.
    ///
    /// The objective only depends on how many units carry each type, so this gives the same
    /// value as [`evaluate`](Self::evaluate) on any assignment with these counts. Counts whose
    /// total overflows `usize` are reported with `actual: usize::MAX`.
    pub fn evaluate_counts(&self, unit_counts: &[usize]) -> Result<f64, ObjectiveError> {
        let expected = self.params.unit_count();
        let assigned = unit_counts
            .iter()
            .try_fold(0usize, |total, &count| total.checked_add(count))
            .ok_or(ObjectiveError::AssignmentLength {
                expected,
                actual: usize::MAX,
            })?;
        if assigned != expected {
            return Err(ObjectiveError::AssignmentLength {
                expected,
                actual: assigned,
            });
        }
        let capacity = CapacityAggregator::capacity_from_counts(unit_counts, self.params)?;
        let mix = EnergyMixEstimator::estimate(&capacity, self.params)?;
        ObjectiveScorer::score(&mix, self.params.target_mix_per_type())
    }

    pub fn evaluate_detailed(&self, assignment: &[usize]) -> Result<Evaluation, ObjectiveError> {
        let unit_counts = CapacityAggregator::composition(assignment, self.params)?;
        let capacity = CapacityAggregator::capacity_from_counts(&unit_counts, self.params)?;
        let estimate = EnergyMixEstimator::estimate_detailed(&capacity, self.params)?;
        let breakdown =
            ObjectiveScorer::breakdown(&estimate.mix, self.params.target_mix_per_type())?;

        Ok(Evaluation {
            unit_counts,
            capacity,
            estimate,
            breakdown,
        })
    }
}

/// Objective value of `assignment` under `params`.
pub fn objective(assignment: &[usize], params: &ProblemParameters) -> Result<f64, ObjectiveError> {
    Objective::new(params).evaluate(assignment)
}
