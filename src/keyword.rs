//! Keyword extraction
//!
//! Finds the mention keyword (`<trigger><word chars>*`) the user is typing so
//! the host can look up suggestions for it.

mod extractor;

pub use extractor::KeywordExtractor;
