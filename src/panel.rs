//! Suggestions panel
//!
//! The panel below the input grows and shrinks with a short timed tween.
//! Heights are plain `f32` units; the renderer rounds them to terminal rows.

mod animation;
mod controller;

pub use animation::PanelAnimation;
pub use controller::{PANEL_ANIMATION_DURATION, PanelController, PanelState};
