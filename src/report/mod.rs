//! Report rendering for scan results.
//!
//! Four renderers share the extraction models: a colorized console summary,
//! a flat CSV of lock attempts, a formatted three-sheet Excel workbook and
//! per-file trace dumps for identifier searches.
//!
//! # Error Handling Strategy
//!
//! Renderers return `Result` and never exit the process themselves. Callers
//! degrade gracefully: a report that cannot be written is announced as a
//! warning on stderr while the remaining outputs still run, so one locked
//! or unwritable file does not cost the user the whole analysis.

pub mod console;
pub mod csv;
pub mod excel;
pub mod trace_file;

pub use console::{print_oracle_errors, print_summary};
pub use csv::write_lock_csv;
pub use excel::write_workbook;
pub use trace_file::write_trace_file;
