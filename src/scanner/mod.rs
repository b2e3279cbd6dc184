//! Folder-level scanning: file discovery plus batch extraction
//!
//! # Error Handling Strategy
//!
//! The scanner separates setup failures from per-file failures:
//!
//! - **Setup failures are fatal**: A missing folder, an invalid glob, or a
//!   glob matching nothing means the run cannot produce what was asked for.
//!   These return errors before any file is touched, so a failed run never
//!   leaves partial output behind.
//!
//! - **Per-file failures degrade**: A file that cannot be read is skipped
//!   with a stderr warning and the scan continues, so one unreadable file
//!   does not discard the results from the rest of the folder.
//!
//! - **Record ordering is part of the contract**: Files are scanned in
//!   sorted order and records concatenated as scanned, which the reports
//!   rely on for deterministic output.

pub mod discovery;
pub mod folder_scan;

pub use discovery::discover_log_files;
pub use folder_scan::{ScanOutcome, file_size_mb, scan_folder};
