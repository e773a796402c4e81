//! Command-line interface definitions for atoc_index.
//!
//! Every option can be given as a flag; the conjunctions and the escaping
//! switch can also come from the environment so a build script can set them
//! once.

use crate::join::Conjunctions;
use crate::outputs::RenderOptions;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Read the log from stdin, both outputs to stdout
/// atoc_index < book.atoc
///
/// # Separate files for the TOC and the author index
/// atoc_index book.atoc --toc toc.tex --authors authors.tex
///
/// # Typographic ampersand instead of "and"
/// ATOC_AND=' \& ' ATOC_AND2=' \& ' atoc_index book.atoc
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Annotation log to read; stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Where to write the table of contents (stdout when omitted)
    #[arg(long)]
    pub toc: Option<PathBuf>,

    /// Where to write the author index (stdout when omitted)
    #[arg(long)]
    pub authors: Option<PathBuf>,

    /// Also dump the aggregated index as JSON to this path
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Separator before the last of three or more authors
    #[arg(long = "and", env = "ATOC_AND", default_value = ", and ")]
    pub and: String,

    /// Separator between exactly two authors
    #[arg(long = "and2", env = "ATOC_AND2", default_value = " and ")]
    pub and2: String,

    /// Escape LaTeX special characters in titles and names
    #[arg(long, env = "ATOC_ESCAPE")]
    pub escape: bool,
}

impl Cli {
    /// The input path, with `-` meaning stdin.
    pub fn input_path(&self) -> Option<&std::path::Path> {
        self.input
            .as_deref()
            .filter(|p| p.as_os_str() != "-")
    }

    pub fn conjunctions(&self) -> Conjunctions {
        Conjunctions {
            and: self.and.clone(),
            and2: self.and2.clone(),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            conjunctions: self.conjunctions(),
            escape: self.escape,
        }
    }
}
