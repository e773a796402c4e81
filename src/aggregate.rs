//! Folding parsed events into an [`Index`].
//!
//! The builder is an explicit accumulator: [`build_index`] threads it through
//! the input lines and hands back the finished index. Every list is appended
//! to, so articles, their authors and each author's pages come out in the
//! order they were declared.
//!
//! Input arrives as raw bytes. Each line is decoded on its own, so a stray
//! Latin-1 byte costs only that line's exact spelling, not the whole run.

use crate::error::Result;
use crate::models::{Article, Event, Index, UnparsedLine, display_name, prose_name};
use crate::parser::parse_line;
use std::borrow::Cow;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

/// Accumulates articles, author pages and diagnostics.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    articles: Vec<Article>,
    authors: BTreeMap<String, Vec<u32>>,
    unparsed: Vec<UnparsedLine>,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one parsed line.
    pub fn apply(&mut self, event: Event, line_no: usize, raw: &str) {
        match event {
            Event::Title { page, title } => self.on_title(page, title),
            Event::Author { page, first, last } => self.on_author(page, &first, &last),
            Event::Unparsed => self.on_unparsed(line_no, raw),
        }
    }

    /// Start a new article; later authors attach to it.
    pub fn on_title(&mut self, page: u32, title: impl Into<String>) {
        self.articles.push(Article::new(page, title));
    }

    /// Record an author on `page`.
    ///
    /// Authors declared before any title still get their page in the author
    /// index, they just have no article to be listed under.
    pub fn on_author(&mut self, page: u32, first: &str, last: &str) {
        self.authors
            .entry(display_name(first, last))
            .or_default()
            .push(page);

        match self.articles.last_mut() {
            Some(article) => article.authors.push(prose_name(first, last)),
            None => debug!(page, first, last, "Author precedes any title; not listed in TOC"),
        }
    }

    pub fn on_unparsed(&mut self, line: usize, content: &str) {
        warn!(line, content, "Unparsed line");
        self.unparsed.push(UnparsedLine {
            line,
            content: content.to_string(),
        });
    }

    pub fn finish(self) -> Index {
        Index {
            articles: self.articles,
            authors: self.authors,
            unparsed: self.unparsed,
        }
    }
}

/// Parse and aggregate a whole annotation log.
///
/// Fails only on a malformed page number; unparsable lines are collected in
/// [`Index::unparsed`]. Input need not be valid UTF-8: bad bytes in a line
/// are replaced with U+FFFD and the line is still parsed.
#[instrument(level = "info", skip_all)]
pub fn build_index(input: impl AsRef<[u8]>) -> Result<Index> {
    let input = input.as_ref();
    debug!(bytes = input.len(), "Aggregating annotation log");
    let builder = byte_lines(input).enumerate().try_fold(
        IndexBuilder::new(),
        |mut builder, (i, raw)| -> Result<IndexBuilder> {
            let line_no = i + 1;
            let line = decode_line(raw, line_no);
            let event = parse_line(&line, line_no)?;
            builder.apply(event, line_no, &line);
            Ok(builder)
        },
    )?;

    let index = builder.finish();
    info!(
        articles = index.articles.len(),
        authors = index.authors.len(),
        unparsed = index.unparsed.len(),
        "Aggregated annotation log"
    );
    Ok(index)
}

/// Split on `\n`, dropping a trailing `\r` from each line.
fn byte_lines(input: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = input.strip_suffix(b"\n").unwrap_or(input);
    (!input.is_empty())
        .then(|| body.split(|&b| b == b'\n'))
        .into_iter()
        .flatten()
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

fn decode_line(raw: &[u8], line_no: usize) -> Cow<'_, str> {
    match std::str::from_utf8(raw) {
        Ok(line) => Cow::Borrowed(line),
        Err(e) => {
            warn!(line = line_no, error = %e, "Line is not valid UTF-8; replacing bad bytes");
            String::from_utf8_lossy(raw)
        }
    }
}
