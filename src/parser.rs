//! Line grammar for the annotation log.
//!
//! The typesetting macros write one declaration per line:
//!
//! ```text
//! title:<page>:<title text>
//! author:<page>:<first name>:<last name>
//! ```
//!
//! The first name stops at the first colon after the page; the last name is
//! the rest of the line and may itself contain colons. Rules are tried in
//! order and the first match wins.

use crate::error::{AtocError, Result};
use crate::models::Event;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

#[derive(Debug, Clone, Copy)]
enum LineKind {
    Title,
    Author,
}

static LINE_RULES: Lazy<Vec<(LineKind, Regex)>> = Lazy::new(|| {
    vec![
        (
            LineKind::Title,
            Regex::new(r"^title:(?P<page>\d+):(?P<title>.*)$").expect("valid title regex"),
        ),
        (
            LineKind::Author,
            Regex::new(r"^author:(?P<page>\d+):(?P<first>[^:]*):(?P<last>.*)$")
                .expect("valid author regex"),
        ),
    ]
});

/// Parse one line of the annotation log.
///
/// Lines matching neither rule become [`Event::Unparsed`]; reporting them is
/// the caller's job. A page field of digits that overflows `u32` is fatal.
pub fn parse_line(line: &str, line_no: usize) -> Result<Event> {
    for (kind, rule) in LINE_RULES.iter() {
        let Some(caps) = rule.captures(line) else {
            continue;
        };
        let page = page_number(&caps, line_no)?;
        let event = match kind {
            LineKind::Title => Event::Title {
                page,
                title: caps["title"].to_string(),
            },
            LineKind::Author => Event::Author {
                page,
                first: caps["first"].to_string(),
                last: caps["last"].to_string(),
            },
        };
        return Ok(event);
    }
    Ok(Event::Unparsed)
}

fn page_number(caps: &Captures<'_>, line_no: usize) -> Result<u32> {
    let raw = &caps["page"];
    raw.parse::<u32>().map_err(|source| AtocError::MalformedNumber {
        line: line_no,
        value: raw.to_string(),
        source,
    })
}
