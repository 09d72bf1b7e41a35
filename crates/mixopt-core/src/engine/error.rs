use thiserror::Error;

use super::config::ConfigError;
use crate::core::problem::loader::ParamLoadError;

/// Failures that stop a workflow before any candidate is scored. Per-candidate objective errors
/// are collected in the evaluation result instead.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load problem parameters: {source}")]
    Parameters {
        #[from]
        source: ParamLoadError,
    },
}
