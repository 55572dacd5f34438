use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::input_state::MentionsInput;

impl<T> MentionsInput<T> {
    /// Route a key press: panel navigation while tracking, the text field otherwise
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.is_tracking() && self.handle_panel_key(key) {
            return;
        }

        let content_changed = self.textarea.input(key);
        if content_changed {
            self.handle_text_change();
        }
    }

    /// Returns true if the key was consumed by the panel
    fn handle_panel_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.dismiss();
                true
            }
            KeyCode::Down if !self.suggestions.is_empty() => {
                self.select_next();
                true
            }
            KeyCode::Up if !self.suggestions.is_empty() => {
                self.select_previous();
                true
            }
            KeyCode::Tab | KeyCode::Enter => self.accept_selected(),
            _ => false,
        }
    }
}
