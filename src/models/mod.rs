//! Data models for WDD lock analysis and Oracle error extraction.
//!
//! This module defines the record types produced by the extractors:
//!
//! - [`LockAttempt`] - A completed WDD lock attempt (wait marker plus result)
//! - [`LockStats`] - Aggregate counts over a batch of lock attempts
//! - [`OracleError`] - An `ORA-XXXXX` error found on a log line
//! - [`TraceWindow`] - The first-to-last occurrence line span for an identifier
//!
//! [`LockAttempt`] uses serde with per-field renames so that CSV serialization
//! emits the report's exact column schema; timestamps serialize through the
//! log-layout formatter in the `extract::timestamp` module.

pub mod lock;
pub mod oracle;
pub mod trace;

pub use lock::{LockAttempt, LockOutcome, LockStats};
pub use oracle::{OracleError, error_code_counts};
pub use trace::TraceWindow;
