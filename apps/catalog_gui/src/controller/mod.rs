//! Controller layer: UI events, catalog state transitions, and command orchestration.

pub mod events;
pub mod form;
pub mod orchestration;
pub mod state;
