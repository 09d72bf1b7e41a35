use crate::core::problem::params::ParameterError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ObjectiveError {
    #[error("Unit {unit} is assigned plant type {type_index}, but only {type_count} types exist")]
    InvalidAssignment {
        unit: usize,
        type_index: usize,
        type_count: usize,
    },

    #[error("Assignment covers {actual} units, expected {expected}")]
    AssignmentLength { expected: usize, actual: usize },

    #[error("Average load must be positive to normalize the energy mix, got {average_load}")]
    Domain { average_load: f64 },

    #[error(transparent)]
    Malformed(#[from] ParameterError),
}
