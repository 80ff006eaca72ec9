use crate::classify::{classify, Classification};
use crate::error::AppError;
use clap::Parser;
use std::io::{self, BufRead, Write};

#[derive(Debug, Parser)]
#[command(name = "filetype")]
#[command(author, version, about = "Classify data URIs by MIME category", long_about = None)]
pub struct Cli {
    /// Data URIs to classify. Reads one URI per line from stdin when omitted.
    pub uris: Vec<String>,

    /// Print `{"type": "<label>"}` objects instead of bare labels
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI: classify every URI and print one result per line.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.uris.is_empty() {
        let stdin = io::stdin();
        classify_lines(stdin.lock(), &mut out, cli.json)
    } else {
        for uri in &cli.uris {
            write_result(&mut out, uri, cli.json)?;
        }
        Ok(())
    }
}

/// Classify newline-separated URIs from `input`. Blank lines are skipped.
///
/// Lines that are not valid UTF-8 are decoded lossily and still get a label,
/// so one bad line never aborts the batch.
pub fn classify_lines<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    json: bool,
) -> Result<(), AppError> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);
        let uri = line.strip_suffix('\n').unwrap_or(&line);
        let uri = uri.strip_suffix('\r').unwrap_or(uri);
        if uri.is_empty() {
            continue;
        }
        write_result(out, uri, json)?;
    }
}

fn write_result<W: Write>(out: &mut W, uri: &str, json: bool) -> Result<(), AppError> {
    let kind = classify(uri);
    if json {
        writeln!(out, "{}", serde_json::json!(Classification::from(kind)))?;
    } else {
        writeln!(out, "{kind}")?;
    }
    Ok(())
}
