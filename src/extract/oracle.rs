use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::timestamp::parse_timestamp;
use crate::models::OracleError;
use crate::utils::{base_name, lossy_lines};

/// Oracle's "no data found" code. Routine in this system (cursor probes run
/// dry all the time), so it is excluded from every report.
const EXCLUDED_CODE: &str = "01403";

/// Longest stored line text; anything past it is cut with an ellipsis.
const MAX_LINE_CHARS: usize = 200;

static ORA_ERROR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(ORA-(\d{5})[:\s].*)").unwrap());

/// Module/procedure token following the timestamp bracket, e.g.
/// `[...] WMS_XDock_Pegging_Pub: message`.
static CONTEXT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\]\s*(\w+(?:\.\w+)*(?:_\w+)*):").unwrap());

/// Extract Oracle database errors from a single log file.
///
/// Scans line by line for `ORA-` codes (five digits followed by a colon or
/// whitespace, matched case-insensitively). Each matching line yields at
/// most one [`OracleError`] keyed on the first code present; later codes on
/// the same line end up inside the message text. Lines whose first code is
/// the excluded "no data found" code are skipped entirely.
///
/// # Arguments
///
/// * `path` - Path to the log file
///
/// # Returns
///
/// Returns a Vec of [`OracleError`] in line order.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read. Lines without a
/// timestamp or context token still produce records, with the `N/A` /
/// `Unknown` placeholders filled in by the display layer.
pub fn extract_oracle_errors(path: &Path) -> Result<Vec<OracleError>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;
    let file_name = base_name(path);

    let mut errors = Vec::new();
    for (idx, line) in lossy_lines(BufReader::new(file)).enumerate() {
        let line = line
            .with_context(|| format!("Failed to read from log file: {}", path.display()))?;
        if let Some(error) = scan_line(&line, idx + 1, &file_name) {
            errors.push(error);
        }
    }

    Ok(errors)
}

fn scan_line(line: &str, line_number: usize, file: &str) -> Option<OracleError> {
    let captured = ORA_ERROR_REGEX.captures(line)?;
    let digits = &captured[2];
    if digits == EXCLUDED_CODE {
        return None;
    }

    let context = match CONTEXT_REGEX.captures(line) {
        Some(ctx) => ctx[1].to_string(),
        None => "Unknown".to_string(),
    };

    Some(OracleError {
        code: format!("ORA-{}", digits),
        message: captured[1].trim().to_string(),
        timestamp: parse_timestamp(line),
        line_number,
        context,
        file: file.to_string(),
        full_line: truncate_chars(line, MAX_LINE_CHARS),
    })
}

/// Truncate at a character boundary, appending `...` when anything was cut.
fn truncate_chars(line: &str, max_chars: usize) -> String {
    match line.char_indices().nth(max_chars) {
        Some((boundary, _)) => format!("{}...", &line[..boundary]),
        None => line.to_string(),
    }
}
