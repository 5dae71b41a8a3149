use crate::error::ModelError;
use crate::model::SliderModel;
use crate::state::SliderState;
use crate::view::SliderView;

/// Wires a model and a view together. Pure delegation; the presenter adds
/// no behavior of its own.
pub struct SliderPresenter {
    model: SliderModel,
    view: SliderView,
}

impl SliderPresenter {
    /// Attach the view to the model and take ownership of both.
    pub fn new(model: SliderModel, view: SliderView) -> Result<Self, ModelError> {
        view.attach(&model)?;
        Ok(Self { model, view })
    }

    pub fn set_value(&self, value: f64) -> Result<SliderState, ModelError> { self.model.set_value(value) }

    pub fn nudge(&self, delta: f64) -> Result<SliderState, ModelError> { self.model.nudge(delta) }

    pub fn state(&self) -> SliderState { self.model.state() }

    pub fn model(&self) -> &SliderModel { &self.model }

    /// Detach the view and hand the model back.
    pub fn release(self) -> Result<SliderModel, ModelError> {
        self.view.detach(&self.model)?;
        Ok(self.model)
    }
}
