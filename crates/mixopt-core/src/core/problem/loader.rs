use super::params::{ParameterError, ProblemParameters, SearchSettings};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// On-disk parameter record. Key names follow the solver's parameter files.
#[derive(Debug, Deserialize, Clone)]
struct ParameterRecord {
    algorithm: String,
    nb_iterations: usize,
    #[serde(rename = "N")]
    unit_count: usize,
    #[serde(rename = "NB_TYPES")]
    type_count: usize,
    average_load: f64,
    power_plant_types: Vec<String>,
    avg_pmaxs: Vec<f64>,
    capacity_factor: Vec<f64>,
    target_energy_mix: Vec<f64>,
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parsing error for '{path}': {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("Malformed parameters in '{path}': {source}")]
    Malformed {
        path: String,
        source: ParameterError,
    },
}

const INLINE_SOURCE: &str = "<inline>";

impl ProblemParameters {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content, &path.to_string_lossy())
    }

    pub fn from_json_str(content: &str) -> Result<Self, ParamLoadError> {
        Self::parse(content, INLINE_SOURCE)
    }

    fn parse(content: &str, source_name: &str) -> Result<Self, ParamLoadError> {
        let record: ParameterRecord =
            serde_json::from_str(content).map_err(|e| ParamLoadError::Json {
                path: source_name.to_string(),
                source: e,
            })?;

        let params = record
            .into_parameters()
            .map_err(|e| ParamLoadError::Malformed {
                path: source_name.to_string(),
                source: e,
            })?;

        debug!(
            source = source_name,
            units = params.unit_count(),
            types = params.type_count(),
            "Loaded problem parameters."
        );
        Ok(params)
    }
}

impl ParameterRecord {
    fn into_parameters(self) -> Result<ProblemParameters, ParameterError> {
        ProblemParameters::builder()
            .unit_count(self.unit_count)
            .type_count(self.type_count)
            .average_load(self.average_load)
            .plant_types(self.power_plant_types)
            .avg_capacity_per_type(self.avg_pmaxs)
            .capacity_factor_per_type(self.capacity_factor)
            .target_mix_per_type(self.target_energy_mix)
            .search(SearchSettings {
                algorithm: self.algorithm,
                iteration_count: self.nb_iterations,
            })
            .build()
    }
}
