use super::error::ObjectiveError;
use crate::core::problem::params::{ParameterError, ProblemParameters};
use tracing::trace;

/// Plant type that absorbs overflow and, when no balancing capacity exists, the remainder.
/// Fixed by the layout of the parameter data.
pub const BASELINE_TYPE_INDEX: usize = 0;
/// Plant type whose share is whatever remains to reach a full mix. Fixed by the layout of the
/// parameter data.
pub const BALANCING_TYPE_INDEX: usize = 3;

pub const FULL_MIX_PERCENT: f64 = 100.0;

/// Which branch of the clamp rule was applied to the raw mix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MixAdjustment {
    /// Positive shares exceeded 100%: the excess was taken from the baseline type and the
    /// balancing type was zeroed.
    Overflow { excess: f64 },
    /// The balancing type was set to the remainder.
    BalancingRemainder { remainder: f64 },
    /// The remainder was added to the baseline type.
    BaselineRemainder { remainder: f64 },
    /// Neither balancing type has capacity; the mix may sum to less than 100%.
    Unadjusted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MixEstimate {
    pub mix: Vec<f64>,
    /// Sum of the strictly positive raw shares, before the clamp rule.
    pub positive_total: f64,
    pub adjustment: MixAdjustment,
}

impl MixEstimate {
    pub fn total(&self) -> f64 {
        self.mix.iter().sum()
    }
}

pub struct EnergyMixEstimator;

impl EnergyMixEstimator {
    pub fn estimate(
        capacity_per_type: &[f64],
        params: &ProblemParameters,
    ) -> Result<Vec<f64>, ObjectiveError> {
        Self::estimate_detailed(capacity_per_type, params).map(|estimate| estimate.mix)
    }

    /// Percentage share of each plant type, from its derated capacity relative to the average
    /// load, followed by the clamp rule.
    ///
    /// The overflow branch takes priority: once positive shares exceed 100%, the balancing type
    /// is zeroed even if its own share was positive and smaller than the excess.
    pub fn estimate_detailed(
        capacity_per_type: &[f64],
        params: &ProblemParameters,
    ) -> Result<MixEstimate, ObjectiveError> {
        let average_load = params.average_load();
        if average_load.is_nan() || average_load <= 0.0 {
            return Err(ObjectiveError::Domain { average_load });
        }
        if capacity_per_type.len() != params.type_count() {
            return Err(ParameterError::LengthMismatch {
                field: "capacity_per_type",
                expected: params.type_count(),
                actual: capacity_per_type.len(),
            }
            .into());
        }

        let mut mix: Vec<f64> = capacity_per_type
            .iter()
            .zip(params.capacity_factor_per_type())
            .map(|(&capacity, &factor)| factor * capacity / average_load)
            .collect();

        let positive_total: f64 = mix.iter().copied().filter(|&share| share > 0.0).sum();

        let adjustment = if positive_total > FULL_MIX_PERCENT {
            let excess = positive_total - FULL_MIX_PERCENT;
            mix[BASELINE_TYPE_INDEX] -= excess;
            mix[BALANCING_TYPE_INDEX] = 0.0;
            MixAdjustment::Overflow { excess }
        } else if capacity_per_type[BALANCING_TYPE_INDEX] > 0.0 {
            let remainder = FULL_MIX_PERCENT - positive_total;
            mix[BALANCING_TYPE_INDEX] = remainder;
            MixAdjustment::BalancingRemainder { remainder }
        } else if capacity_per_type[BASELINE_TYPE_INDEX] > 0.0 {
            let remainder = FULL_MIX_PERCENT - positive_total;
            mix[BASELINE_TYPE_INDEX] += remainder;
            MixAdjustment::BaselineRemainder { remainder }
        } else {
            MixAdjustment::Unadjusted
        };

        trace!(positive_total, ?adjustment, "Estimated energy mix.");

        Ok(MixEstimate {
            mix,
            positive_total,
            adjustment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn assert_mix_eq(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < TOLERANCE, "{:?} != {:?}", actual, expected);
        }
    }

    fn params(average_load: f64, factors: Vec<f64>) -> ProblemParameters {
        let type_count = factors.len();
        ProblemParameters::builder()
            .unit_count(type_count)
            .type_count(type_count)
            .average_load(average_load)
            .avg_capacity_per_type(vec![10.0; type_count])
            .capacity_factor_per_type(factors)
            .target_mix_per_type(vec![0.0; type_count])
            .build()
            .unwrap()
    }

    #[test]
    fn balancing_type_takes_remainder_when_under_full_mix() {
        let params = params(100.0, vec![1.0; 4]);
        let estimate =
            EnergyMixEstimator::estimate_detailed(&[10.0, 10.0, 10.0, 10.0], &params).unwrap();

        assert!((estimate.positive_total - 0.4).abs() < TOLERANCE);
        assert_mix_eq(&estimate.mix, &[0.1, 0.1, 0.1, 99.6]);
    }

    #[test]
    fn balancing_remainder_scenario_with_percent_scale_capacities() {
        let params = params(100.0, vec![1.0; 4]);
        let capacity = [1000.0, 1000.0, 1000.0, 1000.0];
        let estimate = EnergyMixEstimator::estimate_detailed(&capacity, &params).unwrap();

        assert_mix_eq(&estimate.mix, &[10.0, 10.0, 10.0, 60.0]);
        assert_eq!(
            estimate.adjustment,
            MixAdjustment::BalancingRemainder { remainder: 60.0 }
        );
        assert!((estimate.total() - FULL_MIX_PERCENT).abs() < TOLERANCE);
    }

    #[test]
    fn overflow_reduces_baseline_and_zeroes_balancing_type() {
        let params = params(1.0, vec![1.0; 4]);
        let estimate =
            EnergyMixEstimator::estimate_detailed(&[60.0, 10.0, 10.0, 40.0], &params).unwrap();

        assert_eq!(estimate.positive_total, 120.0);
        assert_eq!(estimate.adjustment, MixAdjustment::Overflow { excess: 20.0 });
        assert_mix_eq(&estimate.mix, &[40.0, 10.0, 10.0, 0.0]);
    }

    #[test]
    fn overflow_takes_priority_over_balancing_remainder() {
        let params = params(1.0, vec![1.0; 4]);
        let estimate =
            EnergyMixEstimator::estimate_detailed(&[50.0, 45.0, 0.0, 10.0], &params).unwrap();

        assert_eq!(estimate.adjustment, MixAdjustment::Overflow { excess: 5.0 });
        assert_mix_eq(&estimate.mix, &[45.0, 45.0, 0.0, 0.0]);
    }

    #[test]
    fn baseline_takes_remainder_without_balancing_capacity() {
        let params = params(1.0, vec![1.0; 4]);
        let estimate =
            EnergyMixEstimator::estimate_detailed(&[20.0, 30.0, 0.0, 0.0], &params).unwrap();

        assert_eq!(
            estimate.adjustment,
            MixAdjustment::BaselineRemainder { remainder: 50.0 }
        );
        assert_mix_eq(&estimate.mix, &[70.0, 30.0, 0.0, 0.0]);
    }

    #[test]
    fn mix_stays_under_full_without_baseline_or_balancing_capacity() {
        let params = params(1.0, vec![1.0; 4]);
        let estimate =
            EnergyMixEstimator::estimate_detailed(&[0.0, 25.0, 25.0, 0.0], &params).unwrap();

        assert_eq!(estimate.adjustment, MixAdjustment::Unadjusted);
        assert_mix_eq(&estimate.mix, &[0.0, 25.0, 25.0, 0.0]);
        assert!((estimate.total() - 50.0).abs() < TOLERANCE);
    }

    #[test]
    fn negative_shares_are_kept_but_excluded_from_total() {
        let params = params(1.0, vec![1.0, 1.0, -1.0, 1.0]);
        let estimate =
            EnergyMixEstimator::estimate_detailed(&[10.0, 10.0, 10.0, 10.0], &params).unwrap();

        assert_eq!(estimate.positive_total, 30.0);
        assert_mix_eq(&estimate.mix, &[10.0, 10.0, -10.0, 70.0]);
    }

    #[test]
    fn capacity_factor_derates_share() {
        let params = params(2.0, vec![0.5, 0.25, 1.0, 1.0, 0.1]);
        let mix = EnergyMixEstimator::estimate(&[0.0, 80.0, 0.0, 0.0, 100.0], &params).unwrap();
        assert_mix_eq(&mix, &[0.0, 10.0, 0.0, 0.0, 5.0]);
    }

    #[test]
    fn zero_average_load_is_a_domain_error() {
        let params = params(0.0, vec![1.0; 4]);
        let result = EnergyMixEstimator::estimate(&[10.0; 4], &params);
        assert_eq!(result, Err(ObjectiveError::Domain { average_load: 0.0 }));
    }

    #[test]
    fn negative_or_nan_average_load_is_a_domain_error() {
        let negative = params(-5.0, vec![1.0; 4]);
        assert!(matches!(
            EnergyMixEstimator::estimate(&[10.0; 4], &negative),
            Err(ObjectiveError::Domain { .. })
        ));

        let nan = params(f64::NAN, vec![1.0; 4]);
        assert!(matches!(
            EnergyMixEstimator::estimate(&[10.0; 4], &nan),
            Err(ObjectiveError::Domain { .. })
        ));
    }

    #[test]
    fn estimate_rejects_capacity_of_wrong_length() {
        let params = params(1.0, vec![1.0; 4]);
        let result = EnergyMixEstimator::estimate(&[10.0; 5], &params);
        assert!(matches!(
            result,
            Err(ObjectiveError::Malformed(ParameterError::LengthMismatch {
                field: "capacity_per_type",
                ..
            }))
        ));
    }
}
