use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::TraceWindow;
use crate::utils::{base_name, file_stem};

/// Write one extracted trace window to `<output_dir>/<stem>_id_<id>.log`,
/// prefixed with a short provenance header.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created or the trace
/// file cannot be written.
pub fn write_trace_file(
    output_dir: &Path,
    source: &Path,
    search_id: &str,
    window: &TraceWindow,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let path = output_dir.join(format!("{}_id_{}.log", file_stem(source), search_id));
    let file = File::create(&path)
        .with_context(|| format!("Failed to create trace file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# Extracted traces for ID: {}", search_id)?;
    writeln!(writer, "# Source file: {}", base_name(source))?;
    writeln!(
        writer,
        "# Lines {} to {} ({} lines)",
        window.first_line,
        window.last_line,
        window.line_count()
    )?;
    writeln!(writer, "#{}", "=".repeat(79))?;
    writeln!(writer)?;
    for line in &window.lines {
        writeln!(writer, "{}", line)?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write trace file: {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn sample_window() -> TraceWindow {
        TraceWindow {
            first_line: 5,
            last_line: 7,
            lines: vec![
                "[01-JAN-25 10:00:01] start 12345".to_string(),
                "[01-JAN-25 10:00:02] middle".to_string(),
                "[01-JAN-25 10:00:03] end 12345".to_string(),
            ],
        }
    }

    #[test]
    fn test_trace_file_name_and_header() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let out_dir = dir.path().join("id_traces_12345");
        let source = Path::new("/logs/FTP_Debug.log");

        let path = write_trace_file(&out_dir, source, "12345", &sample_window())
            .expect("trace file should be written");

        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("FTP_Debug_id_12345.log"));
        let content = std::fs::read_to_string(&path).expect("trace file should be readable");
        assert!(content.starts_with("# Extracted traces for ID: 12345\n"));
        assert!(content.contains("# Source file: FTP_Debug.log\n"));
        assert!(content.contains("# Lines 5 to 7 (3 lines)\n"));
        assert!(content.contains(&format!("#{}\n\n", "=".repeat(79))));
    }

    #[test]
    fn test_trace_file_preserves_window_lines() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = write_trace_file(dir.path(), Path::new("a.log"), "42", &sample_window())
            .expect("trace file should be written");

        let content = std::fs::read_to_string(&path).expect("trace file should be readable");
        let body: Vec<&str> = content
            .lines()
            .skip_while(|line| line.starts_with('#'))
            .skip(1)
            .collect();
        assert_eq!(body.len(), 3);
        assert_eq!(body[0], "[01-JAN-25 10:00:01] start 12345");
        assert_eq!(body[2], "[01-JAN-25 10:00:03] end 12345");
    }

    #[test]
    fn test_output_directory_created_on_demand() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let nested = dir.path().join("deep").join("id_traces_9");

        write_trace_file(&nested, Path::new("b.log"), "9", &sample_window())
            .expect("nested directory should be created");
        assert!(nested.is_dir());
    }
}
