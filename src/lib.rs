//! Multi-line terminal text input with mention tracking.
//!
//! Typing the trigger character (e.g. `@`) starts tracking; every further
//! keystroke reports the keyword typed so far to the host, which answers with
//! a suggestion list shown in a panel that animates open below the input.

pub mod config;
pub mod error;
pub mod input;
pub mod keyword;
pub mod mention;
pub mod panel;
pub mod tracker;
pub mod widgets;

#[cfg(test)]
mod test_utils;

pub use config::MentionsOptions;
pub use error::MentionsError;
pub use input::{Handlers, MentionsInput, RowContext, SuggestionActions};
pub use tracker::TriggerLocation;
