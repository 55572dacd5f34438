use std::fmt;
use std::fs;
use std::path::Path;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::Deserialize;

use mentions::MentionsError;

/// Most suggestions handed to the input per keyword
pub const MAX_SUGGESTIONS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: String,
    pub handle: String,
    #[serde(default)]
    pub name: String,
}

impl User {
    fn new(id: &str, handle: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            handle: handle.to_string(),
            name: name.to_string(),
        }
    }
}

pub struct UserDirectory {
    users: Vec<User>,
    matcher: SkimMatcherV2,
}

impl fmt::Debug for UserDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserDirectory")
            .field("users", &self.users.len())
            .finish_non_exhaustive()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new(vec![
            User::new("u1", "alice", "Alice Liddell"),
            User::new("u2", "alina", "Alina Petrova"),
            User::new("u3", "albert", "Albert Hofmann"),
            User::new("u4", "bob", "Bob Kahn"),
            User::new("u5", "carol", "Carol Shaw"),
            User::new("u6", "dennis", "Dennis Ritchie"),
            User::new("u7", "grace", "Grace Hopper"),
            User::new("u8", "ken", "Ken Thompson"),
            User::new("u9", "linus", "Linus Torvalds"),
            User::new("u10", "margaret", "Margaret Hamilton"),
        ])
    }
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users,
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Parse a JSON array of `{"id", "handle", "name"}` objects
    pub fn from_json(content: &str) -> Result<Self, MentionsError> {
        let users: Vec<User> = serde_json::from_str(content)
            .map_err(|e| MentionsError::Config(format!("users file: {}", e)))?;
        Ok(Self::new(users))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, MentionsError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Users matching `keyword` (with or without its leading trigger), best first
    pub fn search(&self, keyword: &str, trigger: char) -> Vec<User> {
        let query = keyword.strip_prefix(trigger).unwrap_or(keyword);
        if query.is_empty() {
            return self.users.iter().take(MAX_SUGGESTIONS).cloned().collect();
        }

        let mut scored: Vec<(&User, i64)> = self
            .users
            .iter()
            .filter_map(|user| {
                let handle_score = self.matcher.fuzzy_match(&user.handle, query);
                let name_score = self.matcher.fuzzy_match(&user.name, query);
                handle_score.max(name_score).map(|score| (user, score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(user, _)| user.clone())
            .collect()
    }
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod users_tests;
