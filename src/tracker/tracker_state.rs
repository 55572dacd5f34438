use serde::Deserialize;

/// Where a trigger character is allowed to start a mention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerLocation {
    /// Only after whitespace or at the start of the text
    #[default]
    NewWordOnly,
    /// Anywhere, including in the middle of a word
    Anywhere,
}

/// Whether the input is currently composing a mention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingState {
    #[default]
    Idle,
    Tracking,
}

/// Outcome of feeding a text change to the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A trigger was typed at a valid location; the panel should open
    Started,
    /// Tracking ended (space while tracking, or empty text); the panel should close
    Stopped,
    Unchanged,
}

pub struct TriggerTracker {
    trigger: char,
    location: TriggerLocation,
    state: TrackingState,
    /// Last character of the previous text value, `None` when that text was empty
    previous_char: Option<char>,
}

impl TriggerTracker {
    pub fn new(trigger: char, location: TriggerLocation) -> Self {
        Self {
            trigger,
            location,
            state: TrackingState::Idle,
            previous_char: Some(' '),
        }
    }

    pub fn trigger(&self) -> char {
        self.trigger
    }

    pub fn location(&self) -> TriggerLocation {
        self.location
    }

    pub fn state(&self) -> TrackingState {
        self.state
    }

    pub fn is_tracking(&self) -> bool {
        self.state == TrackingState::Tracking
    }

    pub fn previous_char(&self) -> Option<char> {
        self.previous_char
    }

    /// Feed the full text after a change.
    ///
    /// Only the last character of the text is inspected, not the character
    /// at the cursor.
    pub fn on_change_text(&mut self, text: &str) -> Transition {
        let last_char = text.chars().next_back();

        let transition = if last_char == Some(self.trigger) && self.at_word_boundary() {
            self.state = TrackingState::Tracking;
            Transition::Started
        } else if (last_char == Some(' ') && self.is_tracking()) || text.is_empty() {
            self.state = TrackingState::Idle;
            Transition::Stopped
        } else {
            Transition::Unchanged
        };

        self.previous_char = last_char;
        transition
    }

    /// Leave tracking without touching the recorded previous character
    pub fn stop(&mut self) {
        self.state = TrackingState::Idle;
    }

    /// Back to the state the tracker was created in
    pub fn reset(&mut self) {
        self.state = TrackingState::Idle;
        self.previous_char = Some(' ');
    }

    fn at_word_boundary(&self) -> bool {
        match self.location {
            TriggerLocation::Anywhere => true,
            TriggerLocation::NewWordOnly => self.previous_char.is_none_or(char::is_whitespace),
        }
    }
}

#[cfg(test)]
#[path = "tracker_state_tests.rs"]
mod tracker_state_tests;
