//! # Workflows Module
//!
//! Top-level entry points for scoring candidate assignments.
//!
//! - **Evaluation Workflow** ([`evaluate`]) - Load problem parameters, score a batch of
//!   candidates, and return the best solutions together with the failed evaluations.
//!
//! Workflows never search for new candidates themselves; generating assignments is left to the
//! calling optimizer.

pub mod evaluate;
