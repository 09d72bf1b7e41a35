use super::error::ObjectiveError;
use crate::core::problem::params::ParameterError;

/// Squared deviation from the target mix, per plant type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreBreakdown {
    pub squared_deviations: Vec<f64>,
}

impl ScoreBreakdown {
    #[inline]
    pub fn total(&self) -> f64 {
        self.squared_deviations.iter().sum()
    }

    /// Plant type contributing the largest deviation, if any.
    pub fn worst_type(&self) -> Option<(usize, f64)> {
        self.squared_deviations
            .iter()
            .copied()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
    }
}

pub struct ObjectiveScorer;

impl ObjectiveScorer {
    /// Sum of squared differences between target and estimated mix. Lower is better; zero is an
    /// exact match.
    pub fn score(mix_per_type: &[f64], target_mix_per_type: &[f64]) -> Result<f64, ObjectiveError> {
        check_same_length(mix_per_type, target_mix_per_type)?;
        Ok(mix_per_type
            .iter()
            .zip(target_mix_per_type)
            .map(|(&estimated, &target)| (target - estimated).powi(2))
            .sum())
    }

    pub fn breakdown(
        mix_per_type: &[f64],
        target_mix_per_type: &[f64],
    ) -> Result<ScoreBreakdown, ObjectiveError> {
        check_same_length(mix_per_type, target_mix_per_type)?;
        let squared_deviations = mix_per_type
            .iter()
            .zip(target_mix_per_type)
            .map(|(&estimated, &target)| (target - estimated).powi(2))
            .collect();
        Ok(ScoreBreakdown { squared_deviations })
    }
}

fn check_same_length(mix: &[f64], target: &[f64]) -> Result<(), ObjectiveError> {
    if mix.len() != target.len() {
        return Err(ParameterError::LengthMismatch {
            field: "mix_per_type",
            expected: target.len(),
            actual: mix.len(),
        }
        .into());
    }
    Ok(())
}
