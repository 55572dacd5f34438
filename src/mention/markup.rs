use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use regex_lite::Regex;

/// Piece of text split around mention markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'t> {
    Text(&'t str),
    Mention { label: &'t str, value: &'t str },
}

pub struct MentionParser {
    pattern: Regex,
}

impl MentionParser {
    pub fn new(trigger: char) -> Self {
        let trigger = regex_lite::escape(&trigger.to_string());
        Self {
            pattern: Regex::new(&format!(r"\[({trigger}[^:]+):([^\]]+)\]"))
                .expect("mention pattern is built from an escaped trigger"),
        }
    }

    pub fn parse<'t>(&self, text: &'t str) -> Vec<Segment<'t>> {
        let mut segments = Vec::new();
        let mut last_end = 0;

        for caps in self.pattern.captures_iter(text) {
            let (Some(whole), Some(label), Some(value)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };

            if whole.start() > last_end {
                segments.push(Segment::Text(&text[last_end..whole.start()]));
            }
            segments.push(Segment::Mention {
                label: label.as_str(),
                value: value.as_str(),
            });
            last_end = whole.end();
        }

        if last_end < text.len() {
            segments.push(Segment::Text(&text[last_end..]));
        }

        segments
    }

    /// Text as the user sees it, with each mention collapsed to its label
    pub fn display_text(&self, text: &str) -> String {
        self.parse(text)
            .into_iter()
            .map(|segment| match segment {
                Segment::Text(s) => s,
                Segment::Mention { label, .. } => label,
            })
            .collect()
    }

    /// Render one line of text with mention labels highlighted
    pub fn styled_line(&self, text: &str, base: Style, mention: Style) -> Line<'static> {
        let spans: Vec<Span<'static>> = self
            .parse(text)
            .into_iter()
            .map(|segment| match segment {
                Segment::Text(s) => Span::styled(s.to_string(), base),
                Segment::Mention { label, .. } => Span::styled(
                    label.to_string(),
                    base.patch(mention).add_modifier(Modifier::BOLD),
                ),
            })
            .collect();

        Line::from(spans)
    }
}

pub fn format_mention(label: &str, value: &str) -> String {
    format!("[{}:{}]", label, value)
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod markup_tests;
