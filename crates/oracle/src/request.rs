//! Request type for the oracle task.

use crate::OracleError;
use reclaim_types::{EventLogRecord, LogCoordinate};
use tokio::sync::oneshot;

/// Response sender type alias that propagates Result types.
pub type Responder<T, E = OracleError> = oneshot::Sender<Result<T, E>>;

/// A resolve request sent over the oracle task channel.
///
/// Each request carries its own response channel, so requests executing
/// concurrently respond independently and in any order.
#[derive(Debug)]
pub struct ResolveRequest {
    /// The log coordinate to resolve.
    pub coordinate: LogCoordinate,
    /// The response channel.
    pub resp: Responder<EventLogRecord>,
}
