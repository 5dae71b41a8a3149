use std::fmt;
use std::sync::Arc;

/// Caller-supplied stable identity for a registered handler.
///
/// Keys decide duplicate detection on registration and target lookup on
/// deregistration. Cloning is cheap; the underlying string is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerKey(Arc<str>);

impl HandlerKey {
    pub fn new(key: impl AsRef<str>) -> Self { Self(Arc::from(key.as_ref())) }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for HandlerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

impl From<&str> for HandlerKey {
    fn from(key: &str) -> Self { Self(Arc::from(key)) }
}

impl From<String> for HandlerKey {
    fn from(key: String) -> Self { Self(Arc::from(key.as_str())) }
}

/// A handler that can be called when a payload is broadcast.
/// Supports both payload handlers (receive a borrow of the value) and
/// notify-only handlers (change signal without the value).
pub enum Handler<T> {
    /// Receives a borrow of the broadcast payload
    Payload(Arc<dyn Fn(&T) + Send + Sync + 'static>),
    /// Only receives the change notification, ignores the payload
    NotifyOnly(Arc<dyn Fn() + Send + Sync + 'static>),
}

impl<T> Handler<T> {
    pub(crate) fn invoke(&self, payload: &T) {
        match self {
            Handler::Payload(callback) => callback(payload),
            Handler::NotifyOnly(callback) => callback(),
        }
    }
}

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        match self {
            Handler::Payload(callback) => Handler::Payload(callback.clone()),
            Handler::NotifyOnly(callback) => Handler::NotifyOnly(callback.clone()),
        }
    }
}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Payload(_) => f.write_str("Handler::Payload"),
            Handler::NotifyOnly(_) => f.write_str("Handler::NotifyOnly"),
        }
    }
}

/// Trait for types that can be converted into registered handlers.
pub trait IntoHandler<T> {
    /// Convert this value into a handler invocable on each broadcast.
    fn into_handler(self) -> Handler<T>;
}

// Implementation for function types
impl<F, T> IntoHandler<T> for F
where F: Fn(&T) + Send + Sync + 'static
{
    fn into_handler(self) -> Handler<T> { Handler::Payload(Arc::new(self)) }
}

// Implementation for Handler itself
impl<T> IntoHandler<T> for Handler<T> {
    fn into_handler(self) -> Handler<T> { self }
}

// Implementation for Arc<dyn Fn(&T)> - wrap in Payload variant
impl<T> IntoHandler<T> for Arc<dyn Fn(&T) + Send + Sync + 'static> {
    fn into_handler(self) -> Handler<T> { Handler::Payload(self) }
}

// Implementation for Arc<dyn Fn()> - wrap in NotifyOnly for any T
// This allows notification-only handlers to observe any payload type
impl<T> IntoHandler<T> for Arc<dyn Fn() + Send + Sync + 'static> {
    fn into_handler(self) -> Handler<T> { Handler::NotifyOnly(self) }
}

impl<T> IntoHandler<T> for std::sync::mpsc::Sender<T>
where T: Clone + Send + 'static
{
    fn into_handler(self) -> Handler<T> {
        Handler::Payload(Arc::new(move |value: &T| {
            let _ = self.send(value.clone()); // Ignore send errors
        }))
    }
}

#[cfg(feature = "tokio")]
impl<T> IntoHandler<T> for tokio::sync::mpsc::UnboundedSender<T>
where T: Clone + Send + 'static
{
    fn into_handler(self) -> Handler<T> {
        Handler::Payload(Arc::new(move |value: &T| {
            let _ = self.send(value.clone()); // Ignore send errors
        }))
    }
}
