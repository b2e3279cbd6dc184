use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::TraceWindow;
use crate::utils::lossy_lines;

/// Extract the span of lines between the first and last occurrence of an
/// identifier in a log file.
///
/// The identifier is matched as a literal, case-sensitive substring on each
/// line - no regex, no word boundaries. The whole file is buffered so the
/// span can be cut out once the last occurrence is known; log files are
/// assumed to fit in memory.
///
/// # Arguments
///
/// * `path` - Path to the log file
/// * `search_id` - Identifier to look for (a Del Id, order number, any token)
///
/// # Returns
///
/// Returns the [`TraceWindow`] spanning the first to last matching line,
/// bounds inclusive, or the empty window when the identifier never occurs.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn extract_trace_window(path: &Path, search_id: &str) -> Result<TraceWindow> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let mut all_lines = Vec::new();
    let mut first = None;
    let mut last = None;

    for (idx, line) in lossy_lines(BufReader::new(file)).enumerate() {
        let line = line
            .with_context(|| format!("Failed to read from log file: {}", path.display()))?;
        if line.contains(search_id) {
            if first.is_none() {
                first = Some(idx + 1);
            }
            last = Some(idx + 1);
        }
        all_lines.push(line);
    }

    match (first, last) {
        (Some(first_line), Some(last_line)) => {
            let lines = all_lines.drain(first_line - 1..last_line).collect();
            Ok(TraceWindow { first_line, last_line, lines })
        }
        _ => Ok(TraceWindow::empty()),
    }
}
