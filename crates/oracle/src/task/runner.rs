//! Oracle task runner.
//!
//! The [`OracleTask`] processes resolve requests from a channel and
//! dispatches them to the oracle backend. Requests are independent point
//! lookups, so they are spawned as concurrent handlers (bounded in-flight)
//! rather than processed inline.

use crate::{EventLogOracle, OracleHandle, ResolveRequest};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::{sync::CancellationToken, task::TaskTracker};
use tracing::{debug, instrument};

/// Channel size for oracle resolve requests.
const REQUEST_CHANNEL_SIZE: usize = 256;

/// Maximum concurrent resolve handlers.
const MAX_CONCURRENT_RESOLVERS: usize = 64;

/// Shared state for the oracle task, holding the backend.
///
/// Wrapped in an `Arc` so that spawned resolve handlers can access the
/// backend without moving ownership.
struct OracleTaskInner<B> {
    backend: B,
}

impl<B: EventLogOracle> OracleTaskInner<B> {
    /// Handle a single resolve request.
    async fn handle_resolve(&self, req: ResolveRequest) {
        let ResolveRequest { coordinate, resp } = req;
        let _ = resp.send(self.backend.resolve(coordinate).await);
    }
}

/// The oracle task that processes resolve requests.
///
/// This task receives requests over a bounded channel and dispatches them
/// to the oracle backend. It supports graceful shutdown via a cancellation
/// token.
///
/// # Processing Model
///
/// Requests are spawned as concurrent handlers (up to 64 in flight). The
/// ordering of responses is decoupled from the ordering of requests; each
/// request answers on its own response channel.
pub struct OracleTask<B: EventLogOracle> {
    inner: Arc<OracleTaskInner<B>>,
    receiver: mpsc::Receiver<ResolveRequest>,
    cancel_token: CancellationToken,
    /// Task tracker for concurrent resolve handlers.
    task_tracker: TaskTracker,
}

impl<B: EventLogOracle> std::fmt::Debug for OracleTask<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OracleTask").finish_non_exhaustive()
    }
}

impl<B: EventLogOracle> OracleTask<B> {
    /// Create a new oracle task and return its handle.
    pub fn new(backend: B, cancel_token: CancellationToken) -> (Self, OracleHandle) {
        let (sender, receiver) = mpsc::channel(REQUEST_CHANNEL_SIZE);
        let task = Self {
            inner: Arc::new(OracleTaskInner { backend }),
            receiver,
            cancel_token,
            task_tracker: TaskTracker::new(),
        };
        (task, OracleHandle::new(sender))
    }

    /// Spawn the task and return the handle.
    ///
    /// The task will run until the cancellation token is triggered or the
    /// request channel is closed.
    pub fn spawn(backend: B, cancel_token: CancellationToken) -> OracleHandle {
        let (task, handle) = Self::new(backend, cancel_token);
        tokio::spawn(task.run());
        handle
    }

    /// Run the task, processing requests until shutdown.
    #[instrument(skip(self), name = "oracle_task")]
    pub async fn run(mut self) {
        debug!("Oracle task started");

        loop {
            tokio::select! {
                biased;

                _ = self.cancel_token.cancelled() => {
                    debug!("Oracle task received cancellation signal");
                    break;
                }

                maybe_req = self.receiver.recv() => {
                    let Some(req) = maybe_req else {
                        debug!("Oracle request channel closed");
                        break;
                    };

                    // Apply backpressure: wait if we've hit the concurrent
                    // handler limit
                    while self.task_tracker.len() >= MAX_CONCURRENT_RESOLVERS {
                        tokio::select! {
                            _ = self.cancel_token.cancelled() => {
                                debug!("Cancellation while waiting for resolve slot");
                                break;
                            }
                            _ = self.task_tracker.wait() => {}
                        }
                    }

                    let inner = Arc::clone(&self.inner);
                    self.task_tracker.spawn(async move {
                        inner.handle_resolve(req).await;
                    });
                }
            }
        }

        // Graceful shutdown: wait for in-progress resolve handlers to complete
        debug!("Waiting for in-progress resolve handlers to complete");
        self.task_tracker.close();
        self.task_tracker.wait().await;
        debug!("Oracle task shut down gracefully");
    }
}
