#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::rc::Rc;

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::text::Line;

    use crate::config::MentionsOptions;
    use crate::input::{Handlers, MentionsInput, SuggestionActions};
    use crate::tracker::TriggerLocation;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Person {
        pub id: &'static str,
        pub name: &'static str,
    }

    pub fn people(entries: &[(&'static str, &'static str)]) -> Vec<Person> {
        entries
            .iter()
            .map(|&(id, name)| Person { id, name })
            .collect()
    }

    /// Records what the input reported to its host
    #[derive(Default, Clone)]
    pub struct Recorder {
        changes: Rc<RefCell<Vec<String>>>,
        keywords: Rc<RefCell<Vec<String>>>,
    }

    impl Recorder {
        pub fn changes(&self) -> Vec<String> {
            self.changes.borrow().clone()
        }

        pub fn keywords(&self) -> Vec<String> {
            self.keywords.borrow().clone()
        }

        pub fn last_keyword(&self) -> Option<String> {
            self.keywords.borrow().last().cloned()
        }
    }

    /// Vertical panel, three visible rows, one row per suggestion
    pub fn vertical_options() -> MentionsOptions {
        MentionsOptions::new('@', TriggerLocation::NewWordOnly, 1)
            .horizontal(false)
            .max_visible_row_count(3)
            .text_input_heights(3, 6)
    }

    pub fn horizontal_options() -> MentionsOptions {
        MentionsOptions::new('@', TriggerLocation::NewWordOnly, 1).text_input_heights(3, 6)
    }

    fn recording_handlers(recorder: &Recorder) -> Handlers<Person> {
        let changes = Rc::clone(&recorder.changes);
        let keywords = Rc::clone(&recorder.keywords);

        Handlers::new(
            move |text: &str| changes.borrow_mut().push(text.to_string()),
            move |keyword: &str| keywords.borrow_mut().push(keyword.to_string()),
            |person: &Person| person.id.to_string(),
            |person: &Person, _| Line::from(format!("{} ({})", person.name, person.id)),
        )
    }

    /// Input whose selection callback inserts `[@<name>:<id>]`
    pub fn test_input(options: MentionsOptions) -> (MentionsInput<Person>, Recorder) {
        let recorder = Recorder::default();
        let handlers = recording_handlers(&recorder).on_suggestion_selected(
            |person: &Person, actions: &mut SuggestionActions| {
                actions.insert_mention(&format!("@{}", person.name), person.id);
                actions.dismiss();
            },
        );

        (MentionsInput::new(options, handlers), recorder)
    }

    /// Input using the default selection callback
    pub fn test_input_default_select(options: MentionsOptions) -> (MentionsInput<Person>, Recorder) {
        let recorder = Recorder::default();
        let handlers = recording_handlers(&recorder);
        (MentionsInput::new(options, handlers), recorder)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Type `text` one key press at a time
    pub fn type_str<T>(input: &mut MentionsInput<T>, text: &str) {
        for ch in text.chars() {
            input.handle_key(key(KeyCode::Char(ch)));
        }
    }
}
