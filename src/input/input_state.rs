use std::time::Instant;

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::{CursorMove, TextArea};

use super::handlers::{Handlers, SuggestionActions};
use crate::config::MentionsOptions;
use crate::keyword::KeywordExtractor;
use crate::mention::MentionParser;
use crate::panel::{PanelController, PanelState};
use crate::tracker::{TrackingState, Transition, TriggerTracker};

/// Top and bottom border of the text field
const BORDER_ROWS: u16 = 2;

fn create_textarea(placeholder: &str) -> TextArea<'static> {
    let mut textarea = TextArea::default();

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text(placeholder);

    textarea
}

pub struct MentionsInput<T> {
    pub(super) textarea: TextArea<'static>,
    pub(super) tracker: TriggerTracker,
    extractor: KeywordExtractor,
    parser: MentionParser,
    pub(super) panel: PanelController,
    pub(super) suggestions: Vec<T>,
    pub(super) selected: usize,
    pub(super) options: MentionsOptions,
    pub(super) handlers: Handlers<T>,
}

impl<T> MentionsInput<T> {
    pub fn new(options: MentionsOptions, handlers: Handlers<T>) -> Self {
        if let Err(e) = options.validate() {
            log::warn!("Mentions input misconfigured: {}", e);
        }

        Self {
            textarea: create_textarea(&options.placeholder),
            tracker: TriggerTracker::new(options.trigger, options.trigger_location),
            extractor: KeywordExtractor::new(options.trigger, options.trigger_location),
            parser: MentionParser::new(options.trigger),
            panel: PanelController::new(
                f32::from(options.suggestion_row_height),
                options.horizontal,
                options.max_visible_row_count,
            ),
            suggestions: Vec::new(),
            selected: 0,
            options,
            handlers,
        }
    }

    pub fn options(&self) -> &MentionsOptions {
        &self.options
    }

    /// Full text, lines joined with `\n`
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Text with mention markup collapsed to labels
    pub fn display_text(&self) -> String {
        self.parser.display_text(&self.text())
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.textarea.cursor()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracker.is_tracking()
    }

    pub fn tracking_state(&self) -> TrackingState {
        self.tracker.state()
    }

    pub fn panel_state(&self) -> PanelState {
        self.panel.state()
    }

    /// Height the panel is animating toward
    pub fn panel_target(&self) -> f32 {
        self.panel.target()
    }

    pub fn panel_height(&self, now: Instant) -> f32 {
        self.panel.height_at(now)
    }

    /// Whether the host should keep redrawing for the panel tween
    pub fn is_animating(&self, now: Instant) -> bool {
        self.panel.is_animating(now)
    }

    pub fn suggestions(&self) -> &[T] {
        &self.suggestions
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_suggestion(&self) -> Option<&T> {
        self.suggestions.get(self.selected)
    }

    /// Run after every edit of the text field
    pub fn handle_text_change(&mut self) {
        let text = self.text();
        (self.handlers.on_change_text)(&text);

        match self.tracker.on_change_text(&text) {
            Transition::Started => {
                log::debug!("Mention tracking started");
                self.panel.open(None);
            }
            Transition::Stopped => {
                log::debug!("Mention tracking stopped");
                self.panel.close();
            }
            Transition::Unchanged => {}
        }

        if self.tracker.is_tracking()
            && let Some(keyword) = self.extractor.extract(&text)
        {
            log::debug!("Requesting suggestions for {:?}", keyword);
            (self.handlers.trigger_callback)(keyword);
        }
    }

    /// Externally controlled text value. An empty value resets the input.
    pub fn set_text(&mut self, text: &str) {
        if text.is_empty() {
            self.replace_content(text);
            self.reset();
            return;
        }

        if text != self.text() {
            self.replace_content(text);
        }
        self.fit_panel_to_suggestions();
    }

    /// New suggestion list from the host.
    ///
    /// The selection follows the previously selected item by key when it is
    /// still present.
    pub fn set_suggestions(&mut self, suggestions: Vec<T>) {
        let selected_key = self
            .selected_suggestion()
            .map(|item| (self.handlers.key_extractor)(item));

        self.suggestions = suggestions;

        let selected = selected_key.and_then(|key| {
            self.suggestions
                .iter()
                .position(|item| (self.handlers.key_extractor)(item) == key)
        });
        self.selected = selected.unwrap_or(0);

        self.fit_panel_to_suggestions();
    }

    pub fn select_next(&mut self) {
        if !self.suggestions.is_empty() {
            self.selected = (self.selected + 1) % self.suggestions.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.suggestions.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.suggestions.len() - 1);
        }
    }

    /// Hand the selected suggestion to the host's selection callback and
    /// apply what it asked for. Returns false when there is nothing selected.
    pub fn accept_selected(&mut self) -> bool {
        let Some(item) = self.suggestions.get(self.selected) else {
            return false;
        };

        let mut actions = SuggestionActions::default();
        (self.handlers.on_suggestion_selected)(item, &mut actions);

        if let Some(replacement) = actions.replacement {
            self.replace_keyword(&replacement);
        }
        if actions.dismissed {
            self.dismiss();
        }
        true
    }

    /// Stop tracking and close the panel
    pub fn dismiss(&mut self) {
        self.tracker.stop();
        self.panel.close();
    }

    /// Rows for the text field, growing with its content within the configured bounds
    pub fn input_height(&self) -> u16 {
        let content_rows = u16::try_from(self.textarea.lines().len()).unwrap_or(u16::MAX);

        content_rows
            .saturating_add(BORDER_ROWS)
            .max(self.options.text_input_min_height)
            .min(self.options.text_input_max_height)
    }

    fn reset(&mut self) {
        self.tracker.reset();
        self.panel.close();
        self.selected = 0;
    }

    /// Size the open panel by suggestion count (vertical layout only)
    fn fit_panel_to_suggestions(&mut self) {
        if !self.tracker.is_tracking() || self.suggestions.is_empty() {
            return;
        }
        if let Some(height) = self.panel.height_for_rows(self.suggestions.len()) {
            self.panel.open(Some(height));
        }
    }

    fn replace_content(&mut self, text: &str) {
        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.insert_str(text);
    }

    /// Swap the keyword being typed for `replacement` plus a space and leave
    /// the cursor right after it.
    fn replace_keyword(&mut self, replacement: &str) {
        let text = self.text();
        let Some(range) = self.extractor.last_match(&text) else {
            return;
        };

        let head = format!("{}{} ", &text[..range.start], replacement);
        let tail = &text[range.end..];

        self.replace_content(&head);
        let (row, col) = self.textarea.cursor();
        self.textarea.insert_str(tail);
        self.textarea.move_cursor(CursorMove::Jump(
            u16::try_from(row).unwrap_or(u16::MAX),
            u16::try_from(col).unwrap_or(u16::MAX),
        ));

        self.handle_text_change();
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
