//! wddscan - WDD lock contention and Oracle error analysis for WMS debug logs
//!
//! This library scans folders of Oracle WMS debug logs and reports on
//! cross-dock delivery detail (WDD) lock contention. It supports:
//!
//! - Extracting WDD lock attempts (Del Id, wait start, outcome, wait time)
//!   via a per-file line-ordered state machine
//! - Collecting `ORA-` error lines with their timestamp and module context
//! - Locating every occurrence of an identifier and dumping the surrounding
//!   trace span to a file
//! - Rendering results as a colorized console summary, CSV, and a formatted
//!   Excel workbook
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use wddscan::scan_folder;
//!
//! let outcome = scan_folder(Path::new("/logs/wms"), "*.log")?;
//! println!("{} lock attempt(s) found", outcome.lock_attempts.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod extract;
pub mod models;
pub mod report;
pub mod scanner;
pub mod utils;

// Re-export commonly used types
pub use extract::{extract_lock_attempts, extract_oracle_errors, extract_trace_window};
pub use models::{LockAttempt, LockOutcome, LockStats, OracleError, TraceWindow};
pub use scanner::{ScanOutcome, scan_folder};
