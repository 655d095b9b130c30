//! Event log oracle for the reclaim verification pipeline.
//!
//! The oracle resolves a log coordinate `(block, tx_index, log_index)` to the
//! decoded fields of an ERC-20 `Transfer` event. This crate defines the
//! backend interface and the task plumbing that serves resolve requests:
//!
//! - [`EventLogOracle`] trait defines the backend interface
//! - [`OracleTask`] processes resolve requests from a channel
//! - [`OracleHandle`] provides an ergonomic API for sending requests
//!
//! Requests are independent point lookups, so the task executes them
//! concurrently; callers that need many lookups can dispatch them all up
//! front via [`OracleHandle::dispatch`] and join the responses in their own
//! order.
//!
//! # Example
//!
//! ```ignore
//! use tokio_util::sync::CancellationToken;
//! use reclaim_oracle::{OracleTask, mem::MemLogOracle};
//!
//! let cancel = CancellationToken::new();
//! let handle = OracleTask::spawn(MemLogOracle::new(), cancel);
//!
//! let record = handle.resolve(coordinate).await?;
//! ```

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod decode;
pub use decode::decode_transfer;

mod error;
pub use error::{OracleError, OracleResult};

mod request;
pub use request::{ResolveRequest, Responder};

mod traits;
pub use traits::EventLogOracle;

/// Task module containing the oracle task runner and handle.
pub mod task;
pub use task::{OracleHandle, OracleTask};

/// Conformance tests for event log oracle backends.
#[cfg(any(test, feature = "test-utils"))]
pub mod conformance;

#[cfg(any(test, feature = "in-memory"))]
pub mod mem;
