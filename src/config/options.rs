use crate::error::MentionsError;
use crate::tracker::TriggerLocation;

pub const DEFAULT_TEXT_INPUT_MIN_HEIGHT: u16 = 30;
pub const DEFAULT_TEXT_INPUT_MAX_HEIGHT: u16 = 80;
pub const DEFAULT_LOADING_TEXT: &str = "Loading...";
pub const DEFAULT_PLACEHOLDER: &str = "Write a post...";

/// Options of a `MentionsInput`
#[derive(Debug, Clone, PartialEq)]
pub struct MentionsOptions {
    /// Character that starts a mention
    pub trigger: char,
    pub trigger_location: TriggerLocation,
    /// Lay suggestions out on one line; disables row-count based panel height
    pub horizontal: bool,
    /// Caps the rows counted toward the panel height; required when not horizontal
    pub max_visible_row_count: Option<usize>,
    pub suggestion_row_height: u16,
    pub text_input_min_height: u16,
    pub text_input_max_height: u16,
    /// Shown in the panel while there are no suggestions
    pub loading_text: String,
    pub placeholder: String,
}

impl MentionsOptions {
    pub fn new(trigger: char, trigger_location: TriggerLocation, suggestion_row_height: u16) -> Self {
        Self {
            trigger,
            trigger_location,
            horizontal: true,
            max_visible_row_count: None,
            suggestion_row_height,
            text_input_min_height: DEFAULT_TEXT_INPUT_MIN_HEIGHT,
            text_input_max_height: DEFAULT_TEXT_INPUT_MAX_HEIGHT,
            loading_text: DEFAULT_LOADING_TEXT.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn max_visible_row_count(mut self, count: usize) -> Self {
        self.max_visible_row_count = Some(count);
        self
    }

    pub fn text_input_heights(mut self, min: u16, max: u16) -> Self {
        self.text_input_min_height = min;
        self.text_input_max_height = max;
        self
    }

    pub fn loading_text(mut self, text: impl Into<String>) -> Self {
        self.loading_text = text.into();
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Setup-time check. Callers report the error as a warning and keep going.
    pub fn validate(&self) -> Result<(), MentionsError> {
        if !self.horizontal && self.max_visible_row_count.is_none_or(|count| count == 0) {
            return Err(MentionsError::MissingMaxVisibleRowCount);
        }
        Ok(())
    }
}

/// Parse a one-character trigger from text
pub fn parse_trigger(value: &str) -> Result<char, MentionsError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(trigger), None) => Ok(trigger),
        _ => Err(MentionsError::InvalidTrigger(value.to_string())),
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod options_tests;
