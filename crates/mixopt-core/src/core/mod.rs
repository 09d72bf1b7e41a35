//! # Core Module
//!
//! Stateless building blocks of the fitness evaluation.
//!
//! - **Problem Definition** ([`problem`]) - Validated problem parameters, their JSON loader, and
//!   the per-unit type assignment evaluated by the objective.
//! - **Energy Mix Evaluation** ([`mix`]) - Capacity aggregation, a-priori energy mix estimation
//!   with the balancing clamp rule, and squared-error scoring against the target mix.
//!
//! Everything in this module is a pure function of its inputs. [`problem::params::ProblemParameters`]
//! is read-only after construction and can be shared by reference between any number of
//! concurrent evaluations.

pub mod mix;
pub mod problem;
