// src/main.rs
use std::process::ExitCode;

fn main() -> ExitCode {
    match doc_stats::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
