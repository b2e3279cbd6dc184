use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::extract::{extract_lock_attempts, extract_oracle_errors};
use crate::models::{LockAttempt, OracleError};
use crate::scanner::discovery::discover_log_files;
use crate::utils::base_name;

/// Everything one batch scan produced.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Completed lock attempts in file-then-line order.
    pub lock_attempts: Vec<LockAttempt>,
    /// Oracle errors in file-then-line order.
    pub oracle_errors: Vec<OracleError>,
    /// Files scanned successfully.
    pub files_processed: usize,
}

/// Run both extractors over every matching log file in a folder.
///
/// Files are processed sequentially in discovery order (sorted by name),
/// with a progress line per file. Records from all files are concatenated
/// in that order - the cross-file ordering the reports rely on.
///
/// # Arguments
///
/// * `folder` - Folder containing the log files
/// * `pattern` - Filename glob, e.g. `*.log`
///
/// # Returns
///
/// Returns a [`ScanOutcome`] with the combined lock attempts, Oracle errors
/// and the number of files scanned.
///
/// # Errors
///
/// Returns an error for setup failures (missing folder, invalid glob, zero
/// matches). A file that fails mid-scan is skipped with a warning so the
/// remaining files still get processed.
pub fn scan_folder(folder: &Path, pattern: &str) -> Result<ScanOutcome> {
    let log_files = discover_log_files(folder, pattern)?;
    println!("Found {} file(s) to process...", log_files.len());

    let mut outcome = ScanOutcome::default();

    for path in &log_files {
        println!("Processing {} ({:.2} MB)...", base_name(path), file_size_mb(path));

        match scan_file(path) {
            Ok((attempts, errors)) => {
                log::debug!(
                    "{}: {} lock attempt(s), {} oracle error(s)",
                    base_name(path),
                    attempts.len(),
                    errors.len()
                );
                outcome.lock_attempts.extend(attempts);
                outcome.oracle_errors.extend(errors);
                outcome.files_processed += 1;
            }
            Err(e) => {
                eprintln!("Warning: Skipping {}: {}", path.display(), e);
            }
        }
    }

    Ok(outcome)
}

fn scan_file(path: &Path) -> Result<(Vec<LockAttempt>, Vec<OracleError>)> {
    let attempts = extract_lock_attempts(path)?;
    let errors = extract_oracle_errors(path)?;
    Ok((attempts, errors))
}

/// File size in megabytes for progress output; sizes that cannot be read
/// display as zero rather than failing the scan.
pub fn file_size_mb(path: &Path) -> f64 {
    fs::metadata(path).map(|m| m.len() as f64).unwrap_or(0.0) / (1024.0 * 1024.0)
}
