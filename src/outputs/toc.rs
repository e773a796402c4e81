//! Table-of-contents markup.
//!
//! One `\tocarticle{title}{page}` and one `\tocauthors{...}` record per
//! article, in the order the articles were declared. Authors keep their
//! declaration order and are joined as prose.

use super::RenderOptions;
use crate::join::join_names;
use crate::models::Article;
use std::fmt::Write;
use tracing::{debug, instrument};

#[instrument(level = "debug", skip_all, fields(articles = articles.len()))]
pub fn render_toc(articles: &[Article], opts: &RenderOptions) -> String {
    let mut out = String::new();
    for article in articles {
        let names: Vec<_> = article.authors.iter().map(|a| opts.text(a)).collect();
        let authors = join_names(&names, &opts.conjunctions);
        writeln!(
            out,
            "\\tocarticle{{{}}}{{{}}}\n\\tocauthors{{{}}}",
            opts.text(&article.title),
            article.page,
            authors
        )
        .unwrap();
    }
    debug!(bytes = out.len(), "Rendered table of contents");
    out
}
