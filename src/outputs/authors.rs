//! Author-index markup.
//!
//! Rows are ordered by [`sort_key`](crate::names::sort_key) but print the
//! original `"Last, First"` display name. Each page links back to the
//! `page.<N>` anchor that hyperref places on every page:
//!
//! ```text
//! Doe, Jane\dotfill \hyperlink{page.1}{1}, \hyperlink{page.5}{5}\par
//! ```

use super::RenderOptions;
use crate::names::sort_authors;
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt::Write;
use tracing::{debug, instrument};

/// Render one page reference.
pub fn page_link(page: u32) -> String {
    format!("\\hyperlink{{page.{page}}}{{{page}}}")
}

/// Render the author index, one row per author.
///
/// Pages stay in first-seen order, duplicates included.
#[instrument(level = "debug", skip_all, fields(authors = authors.len()))]
pub fn render_authors(authors: &BTreeMap<String, Vec<u32>>, opts: &RenderOptions) -> String {
    let mut out = String::new();
    for (key, name) in sort_authors(authors.keys().map(String::as_str)) {
        let pages = authors[name].iter().map(|&p| page_link(p)).join(", ");
        debug!(%name, %key, "Author index row");
        writeln!(out, "{}\\dotfill {}\\par", opts.text(name), pages).unwrap();
    }
    out
}
