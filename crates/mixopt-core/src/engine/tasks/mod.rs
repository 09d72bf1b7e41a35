//! Computational tasks run by the evaluation workflows.
//!
//! Each task scores a batch of candidate assignments against one set of problem parameters.
//! Results are returned per candidate, in input order, so a failed evaluation never hides the
//! scores of the others.

pub mod batch_evaluation;
