//! JSON dump of the aggregated index.
//!
//! Handy for checking what the parser made of a log without reading LaTeX.
//! Authors are listed in index order together with the key they sorted on.

use crate::error::Result;
use crate::models::{Article, Index, UnparsedLine};
use crate::names::sort_authors;
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
struct AuthorRow<'a> {
    name: &'a str,
    sort_key: String,
    pages: &'a [u32],
}

#[derive(Debug, Serialize)]
struct Dump<'a> {
    articles: &'a [Article],
    authors: Vec<AuthorRow<'a>>,
    unparsed: &'a [UnparsedLine],
}

/// Serialize `index` as pretty-printed JSON.
#[instrument(level = "debug", skip_all)]
pub fn render_json(index: &Index) -> Result<String> {
    let authors = sort_authors(index.authors.keys().map(String::as_str))
        .into_iter()
        .map(|(sort_key, name)| AuthorRow {
            name,
            sort_key,
            pages: &index.authors[name],
        })
        .collect();
    let dump = Dump {
        articles: &index.articles,
        authors,
        unparsed: &index.unparsed,
    };
    let mut json = serde_json::to_string_pretty(&dump)?;
    json.push('\n');
    Ok(json)
}
