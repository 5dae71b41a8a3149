use thiserror::Error;

use crate::handler::HandlerKey;

/// Errors raised by registry mutation. Surfaced immediately at the call
/// site; a failed operation never changes the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObserverError {
    /// A handler is already registered under this key
    #[error("Observer already in the list")]
    AlreadyRegistered(HandlerKey),
    /// No handler is registered under this key
    #[error("Could not find observer in list of observers")]
    NotFound(HandlerKey),
}

impl ObserverError {
    /// The key the failed operation was called with
    pub fn key(&self) -> &HandlerKey {
        match self {
            ObserverError::AlreadyRegistered(key) => key,
            ObserverError::NotFound(key) => key,
        }
    }
}

/// A single handler failure captured during a broadcast pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("observer {key} panicked during broadcast: {message}")]
pub struct HandlerPanic {
    pub key: HandlerKey,
    pub message: String,
}

/// Outcome of a broadcast in which one or more handlers panicked.
///
/// The pass itself always completes: every handler in the snapshot was
/// invoked exactly once before this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} of {notified} observers panicked during broadcast", .panics.len())]
pub struct BroadcastError {
    /// Number of handlers invoked in the pass
    pub notified: usize,
    /// One entry per panicking handler, in invocation order
    pub panics: Vec<HandlerPanic>,
}
