//! The outbound-call boundary.
//!
//! The engine only needs a way to hand an approved call to the destination
//! collaborator; what the collaborator does with it is out of scope. A
//! dispatch failure aborts the whole triggering operation, so the vote
//! that would have crossed the threshold is never committed.

use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::info;

use quorum_types::Address;

/// Error raised by a collaborator when a dispatched call fails.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The collaborator rejected or failed the call.
    #[error("call rejected: {0}")]
    Rejected(String),

    /// No collaborator is reachable at the destination.
    #[error("no collaborator at destination {0}")]
    UnknownDestination(Address),
}

/// Delivers approved outbound calls to their destination collaborators.
pub trait Dispatcher {
    fn dispatch(
        &mut self,
        destination: &Address,
        value: u128,
        data: &[u8],
    ) -> Result<(), DispatchError>;
}

/// One delivered call, as seen by the [`RecordingDispatcher`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchedCall {
    pub destination: Address,
    pub value: u128,
    pub data: Vec<u8>,
}

/// An in-memory dispatcher for testing and development.
///
/// Records every delivered call; can be told to fail the next dispatches
/// to exercise the engine's rollback path. Clones share the same journal.
#[derive(Clone, Default)]
pub struct RecordingDispatcher {
    calls: Arc<Mutex<Vec<DispatchedCall>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls delivered so far.
    pub fn calls(&self) -> Vec<DispatchedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Make every subsequent dispatch fail with `reason` until cleared.
    pub fn fail_with(&self, reason: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(reason.into());
    }

    /// Resume successful dispatching.
    pub fn clear_failure(&self) {
        *self.failure.lock().unwrap() = None;
    }
}

impl Dispatcher for RecordingDispatcher {
    fn dispatch(
        &mut self,
        destination: &Address,
        value: u128,
        data: &[u8],
    ) -> Result<(), DispatchError> {
        if let Some(reason) = self.failure.lock().unwrap().clone() {
            return Err(DispatchError::Rejected(reason));
        }
        info!(destination = %destination, value, bytes = data.len(), "call dispatched");
        self.calls.lock().unwrap().push(DispatchedCall {
            destination: *destination,
            value,
            data: data.to_vec(),
        });
        Ok(())
    }
}
