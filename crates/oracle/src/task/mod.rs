//! Oracle task and handle.
//!
//! This module provides the task-based architecture for the oracle:
//!
//! - [`OracleTask`] processes resolve requests from a channel
//! - [`OracleHandle`] sends requests, singly or fanned out

mod handle;
pub use handle::OracleHandle;

mod runner;
pub use runner::OracleTask;
