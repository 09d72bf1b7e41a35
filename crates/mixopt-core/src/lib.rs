//! # MIXOPT Core Library
//!
//! Fitness evaluation for power plant type assignments. Given a choice of plant type for every
//! generation unit, the library estimates the resulting energy mix and scores it against a target
//! mix with a sum of squared deviations. It is meant to sit underneath an external search
//! procedure (simulated annealing, genetic algorithms, ...) that proposes candidate assignments
//! and needs their objective values.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Immutable problem parameters, the assignment type, and the pure
//!   evaluation pipeline (`capacity` → `estimate` → `scoring`).
//!
//! - **[`engine`]: Batch Evaluation.** Configuration, composition caching, progress reporting,
//!   best-solution tracking and the (optionally parallel) batch evaluation task.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together: load parameters from
//!   disk, evaluate a batch of candidates, return ranked solutions and failed evaluations.

pub mod core;
pub mod engine;
pub mod workflows;
