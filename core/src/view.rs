use std::sync::Arc;

use glissade_observer::{HandlerKey, ObserverError};

use crate::model::SliderModel;
use crate::state::SliderState;

/// Rendering seam for views. Implementations draw a slider however they
/// like; this crate never touches a drawing technology.
pub trait RenderTarget: Send + Sync {
    fn render(&self, state: &SliderState);
}

// Closure render targets, mostly for wiring and tests
impl<F> RenderTarget for F
where F: Fn(&SliderState) + Send + Sync
{
    fn render(&self, state: &SliderState) { self(state) }
}

/// Binds a render target to a model's change registry under a stable key,
/// so the same view can be detached again at teardown.
pub struct SliderView {
    key: HandlerKey,
    target: Arc<dyn RenderTarget>,
}

impl SliderView {
    pub fn new<R: RenderTarget + 'static>(key: impl Into<HandlerKey>, target: Arc<R>) -> Self {
        Self { key: key.into(), target }
    }

    /// Subscribe this view's render handler to the model, then render the
    /// current state once so a late-attaching view is not blank until the
    /// next mutation.
    pub fn attach(&self, model: &SliderModel) -> Result<(), ObserverError> {
        let target = self.target.clone();
        model.on_change().register(self.key.clone(), move |state: &SliderState| target.render(state))?;
        self.target.render(&model.state());
        Ok(())
    }

    /// Remove this view's render handler so a discarded view does not keep
    /// receiving broadcasts.
    pub fn detach(&self, model: &SliderModel) -> Result<(), ObserverError> {
        model.on_change().deregister(&self.key).map(|_| ())
    }

    pub fn key(&self) -> &HandlerKey { &self.key }
}
