use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, RwLock};

use tracing::{trace, warn};

use crate::error::{BroadcastError, HandlerPanic, ObserverError};
use crate::handler::{Handler, HandlerKey, IntoHandler};

/// An insertion-ordered, duplicate-free registry of keyed handlers with
/// synchronous broadcast.
///
/// Cloning the registry clones the handle, not the entries; all clones see
/// the same handler list. Each owner constructs its own registry - there is
/// no process-wide instance.
pub struct ObserverList<T>(Arc<RwLock<Vec<Entry<T>>>>);

struct Entry<T> {
    key: HandlerKey,
    handler: Handler<T>,
}

impl<T> Clone for Entry<T> {
    fn clone(&self) -> Self { Self { key: self.key.clone(), handler: self.handler.clone() } }
}

impl<T> Clone for ObserverList<T> {
    fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T> Default for ObserverList<T> {
    fn default() -> Self { Self::new() }
}

impl<T> std::fmt::Debug for ObserverList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverList").field("keys", &self.keys()).finish()
    }
}

impl<T> ObserverList<T> {
    /// Creates an empty registry
    pub fn new() -> Self { Self(Arc::new(RwLock::new(Vec::new()))) }

    /// Register a handler under a caller-supplied key, appending it after
    /// every previously registered handler.
    ///
    /// Fails with [`ObserverError::AlreadyRegistered`] if the key is taken;
    /// the registry is left unchanged in that case.
    ///
    /// Only callable values can be registered; anything else is rejected
    /// at compile time:
    ///
    /// ```compile_fail
    /// use glissade_observer::ObserverList;
    ///
    /// let list: ObserverList<i32> = ObserverList::new();
    /// list.register("greeting", "Hello!").unwrap();
    /// ```
    pub fn register<K, H>(&self, key: K, handler: H) -> Result<(), ObserverError>
    where
        K: Into<HandlerKey>,
        H: IntoHandler<T>,
    {
        let key = key.into();
        let mut entries = self.0.write().expect("entries lock is poisoned");
        if entries.iter().any(|entry| entry.key == key) {
            return Err(ObserverError::AlreadyRegistered(key));
        }
        trace!(%key, "registering observer");
        entries.push(Entry { key, handler: handler.into_handler() });
        Ok(())
    }

    /// Remove the first handler registered under `key`, preserving the
    /// relative order of the remaining entries. Returns the removed handler
    /// so a caller can re-register it elsewhere.
    ///
    /// Fails with [`ObserverError::NotFound`] if no entry matches; the
    /// registry is left unchanged in that case.
    pub fn deregister(&self, key: &HandlerKey) -> Result<Handler<T>, ObserverError> {
        let mut entries = self.0.write().expect("entries lock is poisoned");
        let position =
            entries.iter().position(|entry| entry.key == *key).ok_or_else(|| ObserverError::NotFound(key.clone()))?;
        trace!(%key, "deregistering observer");
        Ok(entries.remove(position).handler)
    }

    /// Broadcast a payload to every registered handler, in registration
    /// order, passing it by reference. Handler return values are discarded.
    ///
    /// The handler sequence is snapshotted before the first invocation, so
    /// handlers registered or removed during the pass take no part in it
    /// and reentrant registry calls cannot deadlock.
    ///
    /// Best effort: a panicking handler does not stop the pass. Panics are
    /// collected and returned as a [`BroadcastError`] once every handler
    /// has run.
    pub fn notify(&self, payload: &T) -> Result<(), BroadcastError> {
        let snapshot: Vec<Entry<T>> = self.0.read().expect("entries lock is poisoned").clone();

        let notified = snapshot.len();
        let mut panics = Vec::new();
        for entry in snapshot {
            if let Err(cause) = catch_unwind(AssertUnwindSafe(|| entry.handler.invoke(payload))) {
                let message = panic_message(cause);
                warn!(key = %entry.key, %message, "observer panicked during broadcast");
                panics.push(HandlerPanic { key: entry.key, message });
            }
        }

        if panics.is_empty() { Ok(()) } else { Err(BroadcastError { notified, panics }) }
    }

    /// True if a handler is registered under `key`
    pub fn contains(&self, key: &HandlerKey) -> bool {
        self.0.read().expect("entries lock is poisoned").iter().any(|entry| entry.key == *key)
    }

    /// Registered keys, in registration order
    pub fn keys(&self) -> Vec<HandlerKey> {
        self.0.read().expect("entries lock is poisoned").iter().map(|entry| entry.key.clone()).collect()
    }

    pub fn len(&self) -> usize { self.0.read().expect("entries lock is poisoned").len() }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

fn panic_message(cause: Box<dyn std::any::Any + Send>) -> String {
    match cause.downcast::<String>() {
        Ok(message) => *message,
        Err(cause) => match cause.downcast::<&'static str>() {
            Ok(message) => (*message).to_string(),
            Err(_) => "non-string panic payload".to_string(),
        },
    }
}
