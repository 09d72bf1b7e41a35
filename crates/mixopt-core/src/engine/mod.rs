//! # Engine Module
//!
//! Batch evaluation of candidate assignments on top of the pure objective in
//! [`crate::core::mix`].
//!
//! ## Overview
//!
//! A search procedure typically scores thousands of candidates against one fixed set of
//! parameters. The engine provides the pieces to do that efficiently and observably:
//!
//! - **Configuration** ([`config`]) - Where parameters come from and how many solutions to keep
//! - **Composition Cache** ([`cache`]) - Scores memoized by per-type unit counts
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Solution Tracking** ([`state`]) - Scored candidates and best-k selection
//! - **Error Handling** ([`error`]) - Engine-level error type
//!
//! Evaluations are independent of each other. With the `parallel` feature enabled, batches are
//! spread over the rayon thread pool.

pub mod cache;
pub mod config;
pub mod error;
pub mod progress;
pub mod state;
pub(crate) mod tasks;
