//! Mention markup
//!
//! A finished mention is stored in the text as `[<label>:<value>]`, where the
//! label starts with the trigger (e.g. `[@alice:u42]`). Only the label is
//! shown to the user.

mod markup;

pub use markup::{MentionParser, Segment, format_mention};
