//! # atoc_index
//!
//! Turns the annotation log written by the typesetting macros (`.atoc`) into
//! a table of contents and an alphabetized author index.
//!
//! ## Usage
//!
//! ```sh
//! atoc_index book.atoc --toc toc.tex --authors authors.tex
//! ```
//!
//! ## Pipeline
//!
//! 1. **Reading**: the whole log is read before anything is written
//! 2. **Aggregation**: lines are parsed and folded into articles and author pages
//! 3. **Rendering**: the TOC keeps declaration order; the author index is sorted
//! 4. **Output**: every target is attempted even if an earlier one failed
//!
//! Lines matching neither grammar are logged on stderr and skipped. A page
//! number that does not fit, or any I/O failure, exits non-zero.

use clap::Parser;
use std::error::Error;
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod aggregate;
mod cli;
mod error;
mod join;
mod models;
mod names;
mod outputs;
mod parser;
mod utils;

use aggregate::build_index;
use cli::Cli;
use error::{AtocError, Result};
use outputs::{authors::render_authors, json::render_json, toc::render_toc, write_output};

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    // stdout may carry the rendered output, so logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let mut stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    if let Err(e) = run(&args, &mut stdin, &mut stdout).await {
        error!(error = %e, "Aborting");
        return Err(e.into());
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(())
}

/// Read, aggregate, render and write everything the arguments ask for.
///
/// `stdin` and `stdout` stand in for the missing input path and output paths.
#[instrument(level = "info", skip_all, fields(input = ?args.input))]
async fn run<R, W>(args: &Cli, stdin: &mut R, stdout: &mut W) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let input = read_input(args.input_path(), &mut *stdin).await?;
    let index = build_index(&input)?;

    let opts = args.render_options();
    let toc = render_toc(&index.articles, &opts);
    let authors = render_authors(&index.authors, &opts);
    let json = args.json.as_ref().map(|_| render_json(&index)).transpose()?;

    // Each target gets its own attempt; the first failure is reported.
    // With both on stdout the TOC comes first.
    let mut results = vec![
        write_output("table of contents", args.toc.as_deref(), &toc, &mut *stdout).await,
        write_output("author index", args.authors.as_deref(), &authors, &mut *stdout).await,
    ];
    if let (Some(path), Some(json)) = (args.json.as_deref(), json.as_deref()) {
        results.push(write_output("JSON dump", Some(path), json, &mut *stdout).await);
    }

    let mut first_err = None;
    for result in results {
        if let Err(e) = result {
            error!(error = %e, "Output failed");
            first_err.get_or_insert(e);
        }
    }
    match first_err {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Read the whole annotation log from `path`, or `stdin` when there is none.
///
/// Bytes are returned undecoded; lines are decoded one at a time later.
#[instrument(level = "info", skip_all, fields(path = ?path))]
async fn read_input<R>(path: Option<&Path>, stdin: &mut R) -> Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let bytes = match path {
        Some(path) => tokio::fs::read(path)
            .await
            .map_err(|e| AtocError::input(path, e))?,
        None => {
            let mut buf = Vec::new();
            stdin
                .read_to_end(&mut buf)
                .await
                .map_err(|e| AtocError::input("<stdin>", e))?;
            buf
        }
    };
    info!(bytes = bytes.len(), "Read annotation log");
    Ok(bytes)
}
