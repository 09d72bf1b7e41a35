use crate::core::mix::estimate::BALANCING_TYPE_INDEX;
use thiserror::Error;

/// Smallest number of plant types the mix estimator can work with. The balancing type has the
/// highest fixed index, so it must be addressable.
pub const MIN_TYPE_COUNT: usize = BALANCING_TYPE_INDEX + 1;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParameterError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Parameter '{field}' has {actual} entries, expected one per plant type ({expected})")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("At least {required} plant types are required, got {actual}")]
    TooFewTypes { required: usize, actual: usize },

    #[error("Unit count must be positive")]
    ZeroUnits,
}

/// Settings for the external search procedure. Carried along with the problem but never read by
/// the objective.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchSettings {
    pub algorithm: String,
    pub iteration_count: usize,
}

/// Immutable description of an assignment problem.
///
/// Every per-type sequence has exactly [`type_count`](Self::type_count) entries; this is checked
/// once by [`ProblemParametersBuilder::build`] so the evaluation pipeline can index them freely.
/// The average load is deliberately *not* checked here: a non-positive load is reported by the
/// mix estimator as a domain error at evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemParameters {
    unit_count: usize,
    type_count: usize,
    average_load: f64,
    plant_types: Vec<String>,
    avg_capacity_per_type: Vec<f64>,
    capacity_factor_per_type: Vec<f64>,
    target_mix_per_type: Vec<f64>,
    search: SearchSettings,
}

impl ProblemParameters {
    pub fn builder() -> ProblemParametersBuilder {
        ProblemParametersBuilder::new()
    }

    #[inline]
    pub fn unit_count(&self) -> usize {
        self.unit_count
    }

    #[inline]
    pub fn type_count(&self) -> usize {
        self.type_count
    }

    #[inline]
    pub fn average_load(&self) -> f64 {
        self.average_load
    }

    /// Names of the plant types, in type index order. Empty when the parameters were built
    /// without names.
    pub fn plant_types(&self) -> &[String] {
        &self.plant_types
    }

    pub fn plant_type_name(&self, type_index: usize) -> Option<&str> {
        self.plant_types.get(type_index).map(String::as_str)
    }

    #[inline]
    pub fn avg_capacity_per_type(&self) -> &[f64] {
        &self.avg_capacity_per_type
    }

    #[inline]
    pub fn capacity_factor_per_type(&self) -> &[f64] {
        &self.capacity_factor_per_type
    }

    #[inline]
    pub fn target_mix_per_type(&self) -> &[f64] {
        &self.target_mix_per_type
    }

    pub fn search(&self) -> &SearchSettings {
        &self.search
    }
}

#[derive(Default)]
pub struct ProblemParametersBuilder {
    unit_count: Option<usize>,
    type_count: Option<usize>,
    average_load: Option<f64>,
    plant_types: Option<Vec<String>>,
    avg_capacity_per_type: Option<Vec<f64>>,
    capacity_factor_per_type: Option<Vec<f64>>,
    target_mix_per_type: Option<Vec<f64>>,
    search: Option<SearchSettings>,
}

impl ProblemParametersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unit_count(mut self, count: usize) -> Self {
        self.unit_count = Some(count);
        self
    }
    pub fn type_count(mut self, count: usize) -> Self {
        self.type_count = Some(count);
        self
    }
    pub fn average_load(mut self, load: f64) -> Self {
        self.average_load = Some(load);
        self
    }
    pub fn plant_types(mut self, names: Vec<String>) -> Self {
        self.plant_types = Some(names);
        self
    }
    pub fn avg_capacity_per_type(mut self, values: Vec<f64>) -> Self {
        self.avg_capacity_per_type = Some(values);
        self
    }
    pub fn capacity_factor_per_type(mut self, values: Vec<f64>) -> Self {
        self.capacity_factor_per_type = Some(values);
        self
    }
    pub fn target_mix_per_type(mut self, values: Vec<f64>) -> Self {
        self.target_mix_per_type = Some(values);
        self
    }
    pub fn search(mut self, settings: SearchSettings) -> Self {
        self.search = Some(settings);
        self
    }

    pub fn build(self) -> Result<ProblemParameters, ParameterError> {
        let unit_count = self
            .unit_count
            .ok_or(ParameterError::MissingParameter("unit_count"))?;
        let type_count = self
            .type_count
            .ok_or(ParameterError::MissingParameter("type_count"))?;
        let average_load = self
            .average_load
            .ok_or(ParameterError::MissingParameter("average_load"))?;
        let avg_capacity_per_type = self
            .avg_capacity_per_type
            .ok_or(ParameterError::MissingParameter("avg_capacity_per_type"))?;
        let capacity_factor_per_type = self
            .capacity_factor_per_type
            .ok_or(ParameterError::MissingParameter("capacity_factor_per_type"))?;
        let target_mix_per_type = self
            .target_mix_per_type
            .ok_or(ParameterError::MissingParameter("target_mix_per_type"))?;
        let plant_types = self.plant_types.unwrap_or_default();

        if unit_count == 0 {
            return Err(ParameterError::ZeroUnits);
        }
        if type_count < MIN_TYPE_COUNT {
            return Err(ParameterError::TooFewTypes {
                required: MIN_TYPE_COUNT,
                actual: type_count,
            });
        }

        check_length("avg_capacity_per_type", &avg_capacity_per_type, type_count)?;
        check_length(
            "capacity_factor_per_type",
            &capacity_factor_per_type,
            type_count,
        )?;
        check_length("target_mix_per_type", &target_mix_per_type, type_count)?;
        if !plant_types.is_empty() {
            check_length("plant_types", &plant_types, type_count)?;
        }

        Ok(ProblemParameters {
            unit_count,
            type_count,
            average_load,
            plant_types,
            avg_capacity_per_type,
            capacity_factor_per_type,
            target_mix_per_type,
            search: self.search.unwrap_or_default(),
        })
    }
}

fn check_length<T>(
    field: &'static str,
    values: &[T],
    expected: usize,
) -> Result<(), ParameterError> {
    if values.len() != expected {
        return Err(ParameterError::LengthMismatch {
            field,
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}
