//! Ergonomic handle for interacting with the oracle task.
//!
//! The [`OracleHandle`] provides a convenient API for sending resolve
//! requests to the oracle task without constructing request types manually.

use crate::{OracleError, OracleResult, ResolveRequest};
use reclaim_types::{EventLogRecord, LogCoordinate};
use tokio::sync::{mpsc, oneshot};

/// Handle for interacting with the oracle task.
///
/// This handle can be cloned and shared across tasks. Requests sent through
/// it execute concurrently inside the oracle task; [`dispatch`] exposes the
/// split send/join halves so a caller can fan out many lookups and join the
/// responses in an order of its own choosing.
///
/// [`dispatch`]: OracleHandle::dispatch
#[derive(Clone, Debug)]
pub struct OracleHandle {
    sender: mpsc::Sender<ResolveRequest>,
}

impl OracleHandle {
    /// Create a new handle with the given sender.
    pub(crate) const fn new(sender: mpsc::Sender<ResolveRequest>) -> Self {
        Self { sender }
    }

    /// Send a resolve request and return the response channel without
    /// awaiting it.
    ///
    /// The request begins executing as soon as the task receives it, so
    /// dispatching a series of coordinates before joining any of their
    /// receivers runs the lookups concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::SendFailed`] if the request channel is full or
    /// the task has terminated.
    pub async fn dispatch(
        &self,
        coordinate: LogCoordinate,
    ) -> OracleResult<oneshot::Receiver<OracleResult<EventLogRecord>>> {
        let (resp, rx) = oneshot::channel();
        self.sender
            .send(ResolveRequest { coordinate, resp })
            .await
            .map_err(|_| OracleError::SendFailed)?;
        Ok(rx)
    }

    /// Resolve a single log coordinate, awaiting the response.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::Cancelled`] if the task shuts down before
    /// responding, in addition to any resolution error from the backend.
    pub async fn resolve(&self, coordinate: LogCoordinate) -> OracleResult<EventLogRecord> {
        let rx = self.dispatch(coordinate).await?;
        rx.await.map_err(|_| OracleError::Cancelled)?
    }
}
