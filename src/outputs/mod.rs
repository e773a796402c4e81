//! Renderers for the aggregated index and the code that writes them out.
//!
//! # Submodules
//!
//! - [`toc`]: table of contents, one entry per article in declaration order
//! - [`authors`]: author index, one row per author sorted by sort key
//! - [`json`]: optional JSON dump of the whole index
//!
//! # Markup
//!
//! ```text
//! \tocarticle{Intro}{1}
//! \tocauthors{Jane Doe and John van der Berg}
//!
//! van der Berg, John\dotfill \hyperlink{page.1}{1}\par
//! Doe, Jane\dotfill \hyperlink{page.1}{1}, \hyperlink{page.5}{5}\par
//! ```
//!
//! Renderers are pure; writing happens only after the whole input has been
//! read and aggregated.

pub mod authors;
pub mod json;
pub mod toc;

use crate::error::{AtocError, Result};
use crate::join::Conjunctions;
use crate::utils::escape_latex;
use std::borrow::Cow;
use std::path::Path;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{info, instrument};

/// Knobs shared by the markup renderers.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub conjunctions: Conjunctions,
    /// Escape LaTeX specials in titles and names.
    pub escape: bool,
}

impl RenderOptions {
    /// Apply the escaping policy to user text.
    pub fn text<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.escape {
            Cow::Owned(escape_latex(s))
        } else {
            Cow::Borrowed(s)
        }
    }
}

/// Write rendered text to `path`, or to `stdout` when there is none.
#[instrument(level = "info", skip_all, fields(%what, path = ?path))]
pub async fn write_output<W>(
    what: &'static str,
    path: Option<&Path>,
    content: &str,
    stdout: &mut W,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    match path {
        Some(path) => {
            tokio::fs::write(path, content)
                .await
                .map_err(|e| AtocError::output(what, path, e))?;
            info!(path = %path.display(), bytes = content.len(), "Wrote {what}");
        }
        None => {
            stdout
                .write_all(content.as_bytes())
                .await
                .map_err(|e| AtocError::output(what, "<stdout>", e))?;
            stdout
                .flush()
                .await
                .map_err(|e| AtocError::output(what, "<stdout>", e))?;
            info!(bytes = content.len(), "Wrote {what} to stdout");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("atoc_index_{}_{name}", std::process::id()))
    }

    #[test]
    fn test_text_passthrough_by_default() {
        let opts = RenderOptions::default();
        assert_eq!(opts.text("\\emph{Hi} & bye"), "\\emph{Hi} & bye");
    }

    #[test]
    fn test_text_escaped_when_asked() {
        let opts = RenderOptions {
            escape: true,
            ..Default::default()
        };
        assert_eq!(opts.text("R&D"), "R\\&D");
    }

    #[tokio::test]
    async fn test_write_output_to_file() {
        let path = temp_path("toc.tex");
        let mut stdout: Vec<u8> = Vec::new();
        write_output("table of contents", Some(&path), "\\tocarticle{A}{1}\n", &mut stdout)
            .await
            .unwrap();
        assert!(stdout.is_empty());
        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(written, "\\tocarticle{A}{1}\n");
        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_write_output_without_path_goes_to_stdout_in_call_order() {
        let mut stdout: Vec<u8> = Vec::new();
        write_output("table of contents", None, "toc\n", &mut stdout)
            .await
            .unwrap();
        write_output("author index", None, "authors\n", &mut stdout)
            .await
            .unwrap();
        assert_eq!(stdout, b"toc\nauthors\n");
    }

    #[tokio::test]
    async fn test_write_output_missing_dir_fails() {
        let path = temp_path("no_such_dir").join("authors.tex");
        let err = write_output("author index", Some(&path), "x", &mut Vec::<u8>::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AtocError::Output { what: "author index", .. }));
    }
}
