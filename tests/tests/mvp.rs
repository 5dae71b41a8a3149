use anyhow::Result;
use common::RecordingTarget;
use glissade::{SliderModel, SliderPresenter, SliderState, SliderView};
use std::sync::Arc;

/// Two attached views each see one render per mutation, in attach order.
#[test]
fn model_broadcasts_to_attached_views_in_order() -> Result<()> {
    common::init_tracing();

    let model = SliderModel::new(0.0, 100.0, 10.0)?;
    let first = Arc::new(RecordingTarget::default());
    let second = Arc::new(RecordingTarget::default());

    SliderView::new("first", first.clone()).attach(&model)?;
    SliderView::new("second", second.clone()).attach(&model)?;

    model.set_value(40.0)?;
    model.set_value(70.0)?;

    // attach renders the then-current state, then one render per mutation
    assert_eq!(first.values(), vec![10.0, 40.0, 70.0]);
    assert_eq!(second.values(), vec![10.0, 40.0, 70.0]);
    Ok(())
}

/// A detached view stops receiving broadcasts; the other view is unaffected.
#[test]
fn teardown_stops_delivery() -> Result<()> {
    let model = SliderModel::new(0.0, 100.0, 10.0)?;
    let keeper = Arc::new(RecordingTarget::default());
    let leaver = Arc::new(RecordingTarget::default());

    let keeper_view = SliderView::new("keeper", keeper.clone());
    let leaver_view = SliderView::new("leaver", leaver.clone());
    keeper_view.attach(&model)?;
    leaver_view.attach(&model)?;

    model.set_value(20.0)?;
    leaver_view.detach(&model)?;
    model.set_value(30.0)?;

    assert_eq!(keeper.values(), vec![10.0, 20.0, 30.0]);
    assert_eq!(leaver.values(), vec![10.0, 20.0]);
    Ok(())
}

/// The presenter forwards mutations and teardown without adding behavior.
#[test]
fn presenter_delegates_and_releases() -> Result<()> {
    let target = Arc::new(RecordingTarget::default());
    let presenter =
        SliderPresenter::new(SliderModel::new(0.0, 10.0, 0.0)?, SliderView::new("view", target.clone()))?;

    presenter.set_value(6.0)?;
    presenter.nudge(-2.0)?;
    assert_eq!(presenter.state(), SliderState { value: 4.0, min: 0.0, max: 10.0 });
    assert_eq!(target.values(), vec![0.0, 6.0, 4.0]);

    let model = presenter.release()?;
    model.set_value(9.0)?;
    assert_eq!(target.values(), vec![0.0, 6.0, 4.0]);
    Ok(())
}

/// Each model owns its registry: observers of one never hear the other.
#[test]
fn registries_are_per_model() -> Result<()> {
    let left = SliderModel::new(0.0, 1.0, 0.0)?;
    let right = SliderModel::new(0.0, 1.0, 0.0)?;

    let left_target = Arc::new(RecordingTarget::default());
    SliderView::new("view", left_target.clone()).attach(&left)?;

    // same key on a different model is not a duplicate
    let right_target = Arc::new(RecordingTarget::default());
    SliderView::new("view", right_target.clone()).attach(&right)?;

    right.set_value(1.0)?;
    assert_eq!(left_target.values(), vec![0.0]);
    assert_eq!(right_target.values(), vec![0.0, 1.0]);
    Ok(())
}

/// Render targets see states a handle can be positioned from.
#[test]
fn broadcast_states_carry_positioning_ratio() -> Result<()> {
    let model = SliderModel::new(-50.0, 50.0, 0.0)?;
    let target = Arc::new(RecordingTarget::default());
    SliderView::new("view", target.clone()).attach(&model)?;

    model.set_value(25.0)?;

    let states = target.take();
    assert_eq!(states.len(), 2);
    assert_eq!(states[0].ratio(), 0.5);
    assert_eq!(states[1].ratio(), 0.75);
    Ok(())
}
