//! # Energy Mix Module
//!
//! The objective pipeline that turns a plant type assignment into a fitness value:
//!
//! ```text
//! assignment ──► capacity ──► estimate ──► scoring ──► f64
//! ```
//!
//! ## Key Components
//!
//! - [`capacity`] - Per-type unit counts and aggregate capacity
//! - [`estimate`] - A-priori energy mix with the baseline/balancing clamp rule
//! - [`scoring`] - Sum of squared deviations from the target mix
//! - [`objective`] - Composition of the three stages, plain and detailed
//!
//! ## Usage
//!
//! ```ignore
//! use mixopt::core::mix::objective::Objective;
//!
//! let objective = Objective::new(&params);
//! let score = objective.evaluate(&assignment)?;
//! ```
//!
//! All stages fail fast with an [`error::ObjectiveError`]; no partial results are returned.

pub mod capacity;
pub mod error;
pub mod estimate;
pub mod objective;
pub mod scoring;
