use super::error::ObjectiveError;
use crate::core::problem::params::{ParameterError, ProblemParameters};

pub struct CapacityAggregator;

impl CapacityAggregator {
    /// Number of units assigned to each plant type.
    ///
    /// Fails on the first unit whose type index falls outside `[0, type_count)`.
    pub fn count_units(
        assignment: &[usize],
        type_count: usize,
    ) -> Result<Vec<usize>, ObjectiveError> {
        let mut counts = vec![0usize; type_count];
        for (unit, &type_index) in assignment.iter().enumerate() {
            let count =
                counts
                    .get_mut(type_index)
                    .ok_or(ObjectiveError::InvalidAssignment {
                        unit,
                        type_index,
                        type_count,
                    })?;
            *count += 1;
        }
        Ok(counts)
    }

    pub fn capacity_from_counts(
        counts: &[usize],
        params: &ProblemParameters,
    ) -> Result<Vec<f64>, ObjectiveError> {
        if counts.len() != params.type_count() {
            return Err(ParameterError::LengthMismatch {
                field: "unit_counts",
                expected: params.type_count(),
                actual: counts.len(),
            }
            .into());
        }

        Ok(counts
            .iter()
            .zip(params.avg_capacity_per_type())
            .map(|(&count, &avg_capacity)| avg_capacity * count as f64)
            .collect())
    }

    /// Unit counts of a full assignment, checked against the problem's unit count.
    pub fn composition(
        assignment: &[usize],
        params: &ProblemParameters,
    ) -> Result<Vec<usize>, ObjectiveError> {
        if assignment.len() != params.unit_count() {
            return Err(ObjectiveError::AssignmentLength {
                expected: params.unit_count(),
                actual: assignment.len(),
            });
        }
        Self::count_units(assignment, params.type_count())
    }

    /// Aggregate capacity per plant type for a full assignment.
    pub fn aggregate(
        assignment: &[usize],
        params: &ProblemParameters,
    ) -> Result<Vec<f64>, ObjectiveError> {
        let counts = Self::composition(assignment, params)?;
        Self::capacity_from_counts(&counts, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_with_averages(unit_count: usize, averages: Vec<f64>) -> ProblemParameters {
        let type_count = averages.len();
        ProblemParameters::builder()
            .unit_count(unit_count)
            .type_count(type_count)
            .average_load(100.0)
            .avg_capacity_per_type(averages)
            .capacity_factor_per_type(vec![1.0; type_count])
            .target_mix_per_type(vec![0.0; type_count])
            .build()
            .unwrap()
    }

    #[test]
    fn count_units_tallies_each_type() {
        let counts = CapacityAggregator::count_units(&[0, 3, 3, 1, 3], 5).unwrap();
        assert_eq!(counts, vec![1, 1, 0, 3, 0]);
    }

    #[test]
    fn count_units_fails_for_out_of_range_type() {
        let result = CapacityAggregator::count_units(&[0, 1, 4, 2], 4);
        assert_eq!(
            result,
            Err(ObjectiveError::InvalidAssignment {
                unit: 2,
                type_index: 4,
                type_count: 4
            })
        );
    }

    #[test]
    fn aggregate_one_unit_per_type() {
        let params = params_with_averages(4, vec![10.0; 4]);
        let capacity = CapacityAggregator::aggregate(&[0, 1, 2, 3], &params).unwrap();
        assert_eq!(capacity, vec![10.0, 10.0, 10.0, 10.0]);
    }

    #[test]
    fn aggregate_scales_average_by_unit_count() {
        let params = params_with_averages(5, vec![100.0, 20.0, 5.0, 40.0]);
        let capacity = CapacityAggregator::aggregate(&[1, 1, 3, 1, 3], &params).unwrap();
        assert_eq!(capacity, vec![0.0, 60.0, 0.0, 80.0]);
    }

    #[test]
    fn aggregate_has_one_non_negative_entry_per_type() {
        let params = params_with_averages(6, vec![3.5, 0.0, 12.0, 7.25, 1.0]);
        let capacity = CapacityAggregator::aggregate(&[4, 4, 0, 2, 2, 2], &params).unwrap();
        assert_eq!(capacity.len(), params.type_count());
        assert!(capacity.iter().all(|&c| c >= 0.0));
    }

    #[test]
    fn aggregate_fails_for_out_of_range_type() {
        let params = params_with_averages(4, vec![10.0; 4]);
        let result = CapacityAggregator::aggregate(&[0, 1, 2, 4], &params);
        assert!(matches!(
            result,
            Err(ObjectiveError::InvalidAssignment { type_index: 4, .. })
        ));
    }

    #[test]
    fn aggregate_fails_for_wrong_number_of_units() {
        let params = params_with_averages(4, vec![10.0; 4]);
        let result = CapacityAggregator::aggregate(&[0, 1, 2], &params);
        assert_eq!(
            result,
            Err(ObjectiveError::AssignmentLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn capacity_from_counts_rejects_wrong_type_count() {
        let params = params_with_averages(4, vec![10.0; 4]);
        let result = CapacityAggregator::capacity_from_counts(&[1, 1, 2], &params);
        assert!(matches!(
            result,
            Err(ObjectiveError::Malformed(ParameterError::LengthMismatch {
                expected: 4,
                actual: 3,
                ..
            }))
        ));
    }
}
