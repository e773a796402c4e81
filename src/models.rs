//! Data models for the annotation log and its aggregated form.
//!
//! - [`Event`]: one parsed line of the annotation log
//! - [`Article`]: a table-of-contents entry with its authors
//! - [`UnparsedLine`]: a diagnostic for a line matching no grammar
//! - [`Index`]: everything the renderers need, in first-seen order

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A typed line of the annotation log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// `title:<page>:<title>`
    Title { page: u32, title: String },
    /// `author:<page>:<first>:<last>`
    Author {
        page: u32,
        first: String,
        last: String,
    },
    /// Matches neither grammar.
    Unparsed,
}

/// An article as it appears in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Article {
    pub title: String,
    pub page: u32,
    /// `"First Last"` names in declaration order.
    pub authors: Vec<String>,
}

impl Article {
    pub fn new(page: u32, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            page,
            authors: Vec::new(),
        }
    }
}

/// A line that matched neither the title nor the author grammar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UnparsedLine {
    /// 1-based line number.
    pub line: usize,
    pub content: String,
}

/// The aggregated annotation log.
///
/// `authors` maps the `"Last, First"` display name to its pages in the order
/// they were encountered. The map's own ordering is only used to keep
/// serialized output stable; the author index sorts by
/// [`sort_key`](crate::names::sort_key).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Index {
    pub articles: Vec<Article>,
    pub authors: BTreeMap<String, Vec<u32>>,
    pub unparsed: Vec<UnparsedLine>,
}

/// Build the `"Last, First"` name used to key the author index.
pub fn display_name(first: &str, last: &str) -> String {
    format!("{last}, {first}")
}

/// Build the `"First Last"` name printed in the table of contents.
pub fn prose_name(first: &str, last: &str) -> String {
    format!("{first} {last}")
}
