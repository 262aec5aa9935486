// src/app.rs
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use atty::Stream;
use chrono::Local;
use clap::Parser;

use crate::analyze;
use crate::args::{Args, Command, OutputFormat};
use crate::document::Document;
use crate::output;
use crate::parsers::SelectionArg;
use crate::status::StatusLine;

pub fn run() -> Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Greet => {
            println!("Hello from doc_stats! 🎉");
            Ok(())
        }
        Command::Time => {
            let now = Local::now();
            println!(
                "Current time: {}, date: {}",
                now.format("%H:%M:%S"),
                now.format("%d.%m.%Y")
            );
            Ok(())
        }
        Command::Analyze { path, select, format } => run_analyze(path, select, format),
        Command::Quick { path, hold } => run_quick(path, hold),
    }
}

/// Load the document under analysis. `None` means the precondition
/// "no active document" was missed: a warning was printed and there is
/// nothing to analyze. `stdin_is_tty` is passed in so the branch stays
/// testable without a real terminal.
fn load_document(path: Option<&PathBuf>, stdin_is_tty: bool) -> Result<Option<Document>> {
    match path {
        Some(p) => {
            let doc = Document::from_path(p).context("failed to load document")?;
            Ok(Some(doc))
        }
        None if stdin_is_tty => {
            eprintln!("[doc_stats] no document to analyze (pass a path or pipe text)");
            Ok(None)
        }
        None => {
            let doc = Document::from_stdin().context("failed to read stdin")?;
            Ok(Some(doc))
        }
    }
}

fn run_analyze(
    path: Option<PathBuf>,
    select: Option<SelectionArg>,
    format: OutputFormat,
) -> Result<()> {
    let Some(doc) = load_document(path.as_ref(), atty::is(Stream::Stdin))? else {
        return Ok(());
    };

    let stats = analyze::analyze_with_selection(&doc.text, select.map(|s| s.0));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::emit(&stats, &doc, format, &mut out).context("failed to emit output")?;
    Ok(())
}

fn run_quick(path: Option<PathBuf>, hold: u64) -> Result<()> {
    let Some(doc) = load_document(path.as_ref(), atty::is(Stream::Stdin))? else {
        return Ok(());
    };

    let stats = analyze::analyze(&doc.text);
    let status = StatusLine::show(&format!(
        "📊 {} lines, {} words",
        stats.total_lines, stats.words
    ));
    status.hold(Duration::from_secs(hold));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn no_path_on_a_terminal_is_a_precondition_miss() {
        // Warning only, no document, no error.
        let loaded = load_document(None, true).expect("precondition miss is not an error");
        assert!(loaded.is_none());
    }

    #[test]
    fn explicit_path_ignores_terminal_state() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"a b c").unwrap();
        let loaded = load_document(Some(&file.path().to_path_buf()), true).unwrap();
        assert_eq!(loaded.expect("document loads").text, "a b c");
    }
}
