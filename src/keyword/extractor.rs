use std::ops::Range;

use regex_lite::Regex;

use crate::tracker::TriggerLocation;

/// Characters allowed in a keyword after the trigger
const KEYWORD_CHARS: &str = "[a-z0-9_-]";

pub struct KeywordExtractor {
    pattern: Regex,
}

impl KeywordExtractor {
    pub fn new(trigger: char, location: TriggerLocation) -> Self {
        Self {
            pattern: Regex::new(&keyword_pattern(trigger, location))
                .expect("keyword pattern is built from an escaped trigger"),
        }
    }

    /// Return the last keyword in `text`, if any.
    ///
    /// The whole text is rescanned and the last match wins, so with several
    /// mentions the one nearest the end is chosen even if the cursor sits on
    /// an earlier one.
    pub fn extract<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.last_match(text).map(|range| &text[range])
    }

    /// Byte range of the keyword `extract` would return
    pub fn last_match(&self, text: &str) -> Option<Range<usize>> {
        self.pattern.find_iter(text).last().map(|m| m.range())
    }
}

/// `(?i)\B@[a-z0-9_-]+|\B@` for new-word-only, without the `\B` anchors for anywhere.
///
/// `\B` before a non-word trigger means the preceding character is not a
/// word character (or there is none).
fn keyword_pattern(trigger: char, location: TriggerLocation) -> String {
    let boundary = match location {
        TriggerLocation::NewWordOnly => r"\B",
        TriggerLocation::Anywhere => "",
    };
    let trigger = regex_lite::escape(&trigger.to_string());

    format!("(?i){boundary}{trigger}{KEYWORD_CHARS}+|{boundary}{trigger}")
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod extractor_tests;
