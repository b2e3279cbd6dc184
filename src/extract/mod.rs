//! Line-oriented extractors for WMS XDock Pegging log files
//!
//! # Error Handling Strategy
//!
//! Extraction distinguishes sharply between I/O failures and missing data:
//!
//! - **I/O failures**: A file that cannot be opened or read returns an error
//!   via `anyhow::Result` with path context attached.
//!
//! - **Missing data is not an error**: A line without a timestamp, a lock
//!   lifecycle that never completes, an identifier that never occurs - these
//!   are normal conditions in partial log windows and are represented as
//!   `None`, absent records, or empty windows. They never abort a scan and
//!   never reach stderr (incomplete lifecycles are traced via `debug!` only).
//!
//! - **Encoding problems are absorbed**: All readers decode permissively,
//!   replacing invalid UTF-8 instead of failing, since production logs
//!   routinely contain stray bytes.

pub mod lock;
pub mod oracle;
pub mod timestamp;
pub mod trace;

pub use lock::{LockScanState, extract_lock_attempts};
pub use oracle::extract_oracle_errors;
pub use timestamp::{format_timestamp, parse_timestamp};
pub use trace::extract_trace_window;
