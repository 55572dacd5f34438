//! Mention-aware text input
//!
//! `MentionsInput` wraps a multi-line `TextArea`, runs the trigger tracker on
//! every change, reports keywords to the host and renders the suggestions
//! panel the host fills.

mod handlers;
mod input_events;
mod input_render;
mod input_state;

pub use handlers::{Handlers, RowContext, SuggestionActions};
pub use input_state::MentionsInput;

#[cfg(test)]
mod input_render_tests;
