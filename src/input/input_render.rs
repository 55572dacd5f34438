//! Rendering of the text field, the tracking caret and the suggestions panel

use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::handlers::RowContext;
use super::input_state::MentionsInput;
use crate::widgets::popup;

const CARET: &str = "▲";
const CARET_OFFSET_X: u16 = 2;
const ROW_SEPARATOR: &str = "  │  ";

const PANEL_BG: Color = Color::Rgb(40, 40, 40);
const PANEL_STYLE: Style = Style::new().fg(Color::White).bg(PANEL_BG);
const LOADING_STYLE: Style = Style::new().fg(Color::DarkGray).bg(PANEL_BG);
const CARET_STYLE: Style = Style::new().fg(PANEL_BG);
const SELECTED_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

impl<T> MentionsInput<T> {
    /// Rows the panel occupies at `now`
    pub fn panel_rows(&self, now: Instant) -> u16 {
        self.panel_height(now).round().max(0.0) as u16
    }

    /// Rows needed for the text field, the caret and the panel at `now`
    pub fn desired_height(&self, now: Instant) -> u16 {
        let caret_rows = u16::from(self.is_tracking());
        self.input_height()
            .saturating_add(caret_rows)
            .saturating_add(self.panel_rows(now))
    }

    /// Draw the widget into `area`, text field at the top and panel below it.
    ///
    /// Returns the area the panel was drawn in, if any.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, now: Instant) -> Option<Rect> {
        let input_area = Rect {
            height: self.input_height().min(area.height),
            ..area
        };

        let border_color = if self.is_tracking() {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(&self.textarea, input_area);

        let mut anchor = input_area;
        if self.is_tracking()
            && let Some(caret) = popup::cell_below_anchor(input_area, area, CARET_OFFSET_X)
        {
            frame.render_widget(Paragraph::new(CARET).style(CARET_STYLE), caret);
            anchor.height += 1;
        }

        let panel_area = popup::strip_below_anchor(anchor, area, self.panel_rows(now));
        if panel_area.height == 0 {
            return None;
        }

        popup::clear_area(frame, panel_area);
        self.render_panel(frame, panel_area);
        Some(panel_area)
    }

    fn render_panel(&self, frame: &mut Frame, area: Rect) {
        if self.suggestions.is_empty() {
            let loading = Paragraph::new(self.options.loading_text.as_str()).style(LOADING_STYLE);
            frame.render_widget(loading, area);
            return;
        }

        let rows: Vec<Line<'static>> = self
            .suggestions
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let context = RowContext {
                    index,
                    selected: index == self.selected,
                };
                (self.handlers.render_suggestions_row)(item, context)
            })
            .collect();

        if self.options.horizontal {
            let line = horizontal_line(rows, self.selected, area.width as usize);
            frame.render_widget(Paragraph::new(line).style(PANEL_STYLE), area);
        } else {
            let list = List::new(rows.into_iter().map(ListItem::new))
                .style(PANEL_STYLE)
                .highlight_style(SELECTED_STYLE);
            let mut state = ListState::default().with_selected(Some(self.selected));
            frame.render_stateful_widget(list, area, &mut state);
        }
    }
}

fn line_width(line: &Line) -> usize {
    line.spans.iter().map(|span| span.content.width()).sum()
}

/// Lay rows side by side, dropping leading rows until the selected one fits in `width`
fn horizontal_line(rows: Vec<Line<'static>>, selected: usize, width: usize) -> Line<'static> {
    let separator_width = ROW_SEPARATOR.width();
    let widths: Vec<usize> = rows.iter().map(line_width).collect();

    let span_width = |first: usize| -> usize {
        let count = selected + 1 - first;
        widths[first..=selected].iter().sum::<usize>() + separator_width * (count - 1)
    };

    let mut first = 0;
    while first < selected && span_width(first) > width {
        first += 1;
    }

    let mut spans: Vec<Span<'static>> = Vec::new();
    for (index, row) in rows.into_iter().enumerate().skip(first) {
        if index > first {
            spans.push(Span::raw(ROW_SEPARATOR));
        }
        if index == selected {
            spans.extend(row.spans.into_iter().map(|span| span.patch_style(SELECTED_STYLE)));
        } else {
            spans.extend(row.spans);
        }
    }

    Line::from(spans)
}

#[cfg(test)]
#[path = "horizontal_line_tests.rs"]
mod horizontal_line_tests;
