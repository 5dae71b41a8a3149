use std::sync::{Arc, RwLock};

use glissade_observer::ObserverList;
use tracing::debug;

use crate::error::ModelError;
use crate::state::SliderState;

/// Authoritative slider state plus the change registry it publishes to.
///
/// Each model owns its registry - there is no shared global. Observers are
/// notified after every mutation with a snapshot of the new state.
pub struct SliderModel {
    state: Arc<RwLock<SliderState>>,
    changes: ObserverList<SliderState>,
}

impl SliderModel {
    /// Create a model with the given bounds, clamping `initial` into them.
    pub fn new(min: f64, max: f64, initial: f64) -> Result<Self, ModelError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ModelError::InvalidBounds { min, max });
        }
        if !initial.is_finite() {
            return Err(ModelError::NonFiniteValue(initial));
        }
        let state = SliderState { value: initial.clamp(min, max), min, max };
        Ok(Self { state: Arc::new(RwLock::new(state)), changes: ObserverList::new() })
    }

    /// Store a new value, clamped into bounds, then broadcast the new state
    /// to every registered observer.
    ///
    /// When the broadcast reports panicking observers the mutation still
    /// holds; callers that continue can read the stored state back with
    /// [`SliderModel::state`].
    pub fn set_value(&self, value: f64) -> Result<SliderState, ModelError> {
        if !value.is_finite() {
            return Err(ModelError::NonFiniteValue(value));
        }
        let state = {
            let mut current = self.state.write().expect("state lock is poisoned");
            current.value = current.clamped(value);
            current.clone()
        };
        debug!(value = state.value, "slider value changed");
        self.changes.notify(&state)?;
        Ok(state)
    }

    /// Move the value by `delta`, clamped into bounds
    pub fn nudge(&self, delta: f64) -> Result<SliderState, ModelError> {
        let value = self.state.read().expect("state lock is poisoned").value;
        self.set_value(value + delta)
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SliderState { self.state.read().expect("state lock is poisoned").clone() }

    /// The registry this model broadcasts state changes to. Views register
    /// their render handlers here and deregister them at teardown.
    pub fn on_change(&self) -> &ObserverList<SliderState> { &self.changes }
}
