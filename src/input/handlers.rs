use ratatui::text::Line;

use crate::mention::format_mention;

type TextCallback = Box<dyn FnMut(&str)>;
type KeyExtractor<T> = Box<dyn Fn(&T) -> String>;
type RowRenderer<T> = Box<dyn Fn(&T, RowContext) -> Line<'static>>;
type SelectCallback<T> = Box<dyn FnMut(&T, &mut SuggestionActions)>;

/// Where a suggestion row is being drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowContext {
    pub index: usize,
    pub selected: bool,
}

/// Host callbacks of a `MentionsInput`
pub struct Handlers<T> {
    pub(super) on_change_text: TextCallback,
    pub(super) trigger_callback: TextCallback,
    pub(super) key_extractor: KeyExtractor<T>,
    pub(super) render_suggestions_row: RowRenderer<T>,
    pub(super) on_suggestion_selected: SelectCallback<T>,
}

impl<T> Handlers<T> {
    /// `on_change_text` receives every new text value, `trigger_callback`
    /// the keyword to fetch suggestions for.
    pub fn new(
        on_change_text: impl FnMut(&str) + 'static,
        trigger_callback: impl FnMut(&str) + 'static,
        key_extractor: impl Fn(&T) -> String + 'static,
        render_suggestions_row: impl Fn(&T, RowContext) -> Line<'static> + 'static,
    ) -> Self {
        Self {
            on_change_text: Box::new(on_change_text),
            trigger_callback: Box::new(trigger_callback),
            key_extractor: Box::new(key_extractor),
            render_suggestions_row: Box::new(render_suggestions_row),
            on_suggestion_selected: Box::new(|_: &T, actions: &mut SuggestionActions| actions.dismiss()),
        }
    }

    /// Called when the user accepts a suggestion. Without one, accepting just
    /// dismisses the panel.
    pub fn on_suggestion_selected(
        mut self,
        callback: impl FnMut(&T, &mut SuggestionActions) + 'static,
    ) -> Self {
        self.on_suggestion_selected = Box::new(callback);
        self
    }
}

/// What the host asked for while handling an accepted suggestion
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SuggestionActions {
    pub(super) dismissed: bool,
    pub(super) replacement: Option<String>,
}

impl SuggestionActions {
    /// Stop tracking and close the panel
    pub fn dismiss(&mut self) {
        self.dismissed = true;
    }

    /// Replace the keyword being typed with `text` followed by a space
    pub fn replace_keyword(&mut self, text: impl Into<String>) {
        self.replacement = Some(text.into());
    }

    /// Replace the keyword being typed with `[<label>:<value>]`
    pub fn insert_mention(&mut self, label: &str, value: &str) {
        self.replace_keyword(format_mention(label, value));
    }
}
