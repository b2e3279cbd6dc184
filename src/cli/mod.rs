//! Command-line interface for the log scanner
//!
//! # Error Handling Strategy
//!
//! Setup failures (missing folder, bad glob, zero matching files) propagate
//! out of [`run`] and become a non-zero exit in `main`. Once scanning has
//! started, per-file and per-report failures degrade to stderr warnings so a
//! long batch run still delivers whatever it could produce.

pub mod commands;

pub use commands::{Cli, Commands, run};
