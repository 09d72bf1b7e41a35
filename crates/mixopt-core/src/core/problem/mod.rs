//! # Problem Module
//!
//! Definition of the assignment problem being evaluated.
//!
//! - [`params`] - The immutable [`params::ProblemParameters`] value object and its builder
//! - [`loader`] - Loading parameters from the JSON parameter record
//! - [`assignment`] - The per-unit plant type choice proposed by a search procedure

pub mod assignment;
pub mod loader;
pub mod params;
