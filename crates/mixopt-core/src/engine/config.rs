use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Parameter '{0}' must be at least 1")]
    NotPositive(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchConfig {
    /// How many of the best-scoring candidates to return.
    pub num_solutions: usize,
    /// Score each distinct unit composition only once per batch.
    pub use_composition_cache: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationConfig {
    pub parameters_path: PathBuf,
    pub batch: BatchConfig,
}

#[derive(Default)]
pub struct EvaluationConfigBuilder {
    parameters_path: Option<PathBuf>,
    num_solutions: Option<usize>,
    use_composition_cache: Option<bool>,
}

impl EvaluationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parameters_path(mut self, path: PathBuf) -> Self {
        self.parameters_path = Some(path);
        self
    }
    pub fn num_solutions(mut self, n: usize) -> Self {
        self.num_solutions = Some(n);
        self
    }
    pub fn use_composition_cache(mut self, enabled: bool) -> Self {
        self.use_composition_cache = Some(enabled);
        self
    }

    pub fn build(self) -> Result<EvaluationConfig, ConfigError> {
        let num_solutions = self
            .num_solutions
            .ok_or(ConfigError::MissingParameter("num_solutions"))?;
        if num_solutions == 0 {
            return Err(ConfigError::NotPositive("num_solutions"));
        }

        Ok(EvaluationConfig {
            parameters_path: self
                .parameters_path
                .ok_or(ConfigError::MissingParameter("parameters_path"))?,
            batch: BatchConfig {
                num_solutions,
                use_composition_cache: self.use_composition_cache.unwrap_or(true),
            },
        })
    }
}
