//! Trigger tracking
//!
//! Decides when the input enters and leaves "mention" mode by looking at the
//! last character of the text after every change.

mod tracker_state;

pub use tracker_state::{TrackingState, Transition, TriggerLocation, TriggerTracker};
