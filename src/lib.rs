// src/lib.rs
pub mod analyze;
pub mod app;
pub mod args;
pub mod document;
pub mod error;
pub mod output;
pub mod parsers;
pub mod stats;
pub mod status;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
