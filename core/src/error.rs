use glissade_observer::{BroadcastError, ObserverError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    /// Bounds must be finite with `min <= max`
    #[error("slider bounds are invalid: min {min}, max {max}")]
    InvalidBounds { min: f64, max: f64 },
    /// Values entering the model must be finite
    #[error("slider value is not finite: {0}")]
    NonFiniteValue(f64),
    /// The mutation was stored, but one or more observers panicked while
    /// being notified of it
    #[error(transparent)]
    Broadcast(#[from] BroadcastError),
    /// Subscription management failure surfaced by the change registry
    #[error(transparent)]
    Observer(#[from] ObserverError),
}
