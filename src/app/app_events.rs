use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app_state::App;

impl App {
    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        self.input.handle_key(key);
        self.process_input_events();
    }

    /// Returns true if the key was handled here instead of by the input
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return true;
        }

        // Keys below belong to the suggestions panel while a mention is tracked
        if self.input.is_tracking() {
            return false;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
                self.input.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::empty()));
                self.process_input_events();
                true
            }
            KeyCode::Enter => {
                self.send_message();
                true
            }
            _ => false,
        }
    }
}
