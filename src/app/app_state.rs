use std::sync::mpsc::{self, Receiver, Sender};

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::users::{User, UserDirectory};
use mentions::mention::MentionParser;
use mentions::{Handlers, MentionsInput, MentionsOptions, RowContext, SuggestionActions};

/// What the input reported through its callbacks since the last drain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    TextChanged(String),
    Keyword(String),
}

/// Demo application state: a message log above a mentions input
pub struct App {
    pub input: MentionsInput<User>,
    pub directory: UserDirectory,
    pub messages: Vec<String>,
    pub parser: MentionParser,
    /// Characters in the draft as displayed, mentions collapsed to labels
    pub draft_chars: usize,
    events: Receiver<InputEvent>,
    trigger: char,
    pub should_quit: bool,
}

fn render_user_row(user: &User, context: RowContext) -> Line<'static> {
    let marker = if context.selected { "► " } else { "  " };
    Line::from(vec![
        Span::raw(marker),
        Span::styled(
            format!("@{}", user.handle),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", user.name), Style::default().fg(Color::Gray)),
    ])
}

fn input_handlers(events: Sender<InputEvent>, trigger: char) -> Handlers<User> {
    let keyword_events = events.clone();

    Handlers::new(
        move |text: &str| {
            let _ = events.send(InputEvent::TextChanged(text.to_string()));
        },
        move |keyword: &str| {
            let _ = keyword_events.send(InputEvent::Keyword(keyword.to_string()));
        },
        |user: &User| user.id.clone(),
        render_user_row,
    )
    .on_suggestion_selected(move |user: &User, actions: &mut SuggestionActions| {
        actions.insert_mention(&format!("{}{}", trigger, user.handle), &user.id);
        actions.dismiss();
    })
}

impl App {
    pub fn new(options: MentionsOptions, directory: UserDirectory) -> Self {
        let (sender, events) = mpsc::channel();
        let trigger = options.trigger;

        Self {
            input: MentionsInput::new(options, input_handlers(sender, trigger)),
            directory,
            messages: Vec::new(),
            parser: MentionParser::new(trigger),
            draft_chars: 0,
            events,
            trigger,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply what the input reported: look up suggestions for new keywords
    pub fn process_input_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                InputEvent::TextChanged(text) => {
                    self.draft_chars = self.parser.display_text(&text).chars().count();
                }
                InputEvent::Keyword(keyword) => {
                    let suggestions = self.directory.search(&keyword, self.trigger);
                    log::debug!("{} suggestions for {:?}", suggestions.len(), keyword);
                    self.input.set_suggestions(suggestions);
                }
            }
        }
    }

    /// Move the draft into the message log and clear the input
    pub fn send_message(&mut self) {
        let text = self.input.text();
        if text.trim().is_empty() {
            return;
        }

        self.messages.push(text);
        self.input.set_text("");
        self.draft_chars = 0;
    }
}
