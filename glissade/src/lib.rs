//! # Glissade
//!
//! The core of a range-slider widget, split Model-View-Presenter, built
//! around a keyed observer registry with ordered synchronous broadcast.
//!
//! ## Core concepts
//!
//! - **ObserverList**: an insertion-ordered, duplicate-free registry of
//!   keyed handlers; broadcast invokes every handler in registration order
//! - **SliderModel**: the authoritative state; broadcasts a state snapshot
//!   after every mutation
//! - **SliderView**: binds a `RenderTarget` to the model's registry at
//!   setup and unbinds it at teardown
//! - **SliderPresenter**: wires model and view together, delegation only
//!
//! ## Quick start
//!
//! ```rust
//! use glissade::{SliderModel, SliderPresenter, SliderState, SliderView};
//! use std::sync::{Arc, Mutex};
//!
//! let rendered = Arc::new(Mutex::new(Vec::new()));
//! let view = {
//!     let rendered = rendered.clone();
//!     SliderView::new("demo", Arc::new(move |state: &SliderState| rendered.lock().unwrap().push(state.value)))
//! };
//! let model = SliderModel::new(0.0, 100.0, 25.0).unwrap();
//! let presenter = SliderPresenter::new(model, view).unwrap();
//!
//! presenter.set_value(60.0).unwrap();
//! assert_eq!(*rendered.lock().unwrap(), vec![25.0, 60.0]);
//! ```
//!
//! The registry is usable on its own wherever ordered, keyed publish/
//! subscribe is needed; see [`ObserverList`].

pub use glissade_core::*;
pub use glissade_observer::*;
