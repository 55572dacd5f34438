use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app_state::App;

const MESSAGE_STYLE: Style = Style::new().fg(Color::White);
const MENTION_STYLE: Style = Style::new().fg(Color::Cyan);
const STATUS_STYLE: Style = Style::new().fg(Color::DarkGray);

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame, now: Instant) {
        let layout = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(self.input.desired_height(now)),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_messages(frame, layout[0]);
        self.input.render(frame, layout[1], now);
        self.render_status(frame, layout[2]);
    }

    fn render_messages(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Messages ")
            .border_style(Style::default().fg(Color::DarkGray));

        // Newest messages stay in view
        let visible = area.height.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .messages
            .iter()
            .flat_map(|message| message.split('\n'))
            .map(|line| ListItem::new(self.parser.styled_line(line, MESSAGE_STYLE, MENTION_STYLE)))
            .collect();
        let skip = items.len().saturating_sub(visible);

        let list = List::new(items.into_iter().skip(skip)).block(block);
        frame.render_widget(list, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let hints = if self.input.is_tracking() {
            "↑/↓ choose · Tab/Enter insert · Esc dismiss"
        } else {
            "Enter send · Alt+Enter newline · Esc quit"
        };

        let status = Line::from(vec![
            Span::raw(hints),
            Span::raw(format!(" · {} chars", self.draft_chars)),
        ]);
        frame.render_widget(Paragraph::new(status).style(STATUS_STYLE), area);
    }
}
