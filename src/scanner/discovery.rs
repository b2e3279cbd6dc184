use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use globset::GlobBuilder;
use walkdir::WalkDir;

/// Find the log files a scan should cover: every regular file under
/// `folder` whose path relative to the folder matches `pattern`.
///
/// `*` does not cross directory separators, so the default `*.log` selects
/// top-level files only and `**/*.log` opts into recursion. Results are
/// sorted by name so multi-file reports come out in a stable order.
///
/// # Arguments
///
/// * `folder` - Folder containing the log files
/// * `pattern` - Filename glob, e.g. `*.log` or `wms_*.txt`
///
/// # Returns
///
/// Returns the matching file paths, sorted.
///
/// # Errors
///
/// Returns an error if the folder does not exist, the glob is invalid, or
/// nothing matches. An empty scan would silently produce empty reports, so
/// zero matches is treated as a setup error rather than a result.
pub fn discover_log_files(folder: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        bail!("Folder '{}' not found", folder.display());
    }

    let matcher = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .with_context(|| format!("Invalid file pattern '{}'", pattern))?
        .compile_matcher();

    let mut files = Vec::new();
    for entry in WalkDir::new(folder).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to read folder: {}", folder.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(folder).unwrap_or_else(|_| entry.path());
        if matcher.is_match(relative) {
            files.push(entry.path().to_path_buf());
        }
    }

    if files.is_empty() {
        bail!("No files matching '{}' found in {}", pattern, folder.display());
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(dir: &Path, name: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, "x\n").expect("Failed to create file");
    }

    #[test]
    fn test_discover_matches_default_glob() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        touch(dir.path(), "b.log");
        touch(dir.path(), "a.log");
        touch(dir.path(), "notes.txt");

        let files = discover_log_files(dir.path(), "*.log").expect("discovery should succeed");
        let names: Vec<_> =
            files.iter().map(|p| p.file_name().unwrap().to_string_lossy().to_string()).collect();
        assert_eq!(names, vec!["a.log", "b.log"]);
    }

    #[test]
    fn test_discover_star_does_not_recurse() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        touch(dir.path(), "top.log");
        touch(dir.path(), "sub/nested.log");

        let files = discover_log_files(dir.path(), "*.log").expect("discovery should succeed");
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("top.log"));
    }

    #[test]
    fn test_discover_double_star_recurses() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        touch(dir.path(), "top.log");
        touch(dir.path(), "sub/nested.log");

        let files = discover_log_files(dir.path(), "**/*.log").expect("discovery should succeed");
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_discover_skips_directories() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        touch(dir.path(), "real.log");
        fs::create_dir(dir.path().join("fake.log")).expect("Failed to create dir");

        let files = discover_log_files(dir.path(), "*.log").expect("discovery should succeed");
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("real.log"));
    }

    #[test]
    fn test_discover_missing_folder() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let result = discover_log_files(&dir.path().join("missing"), "*.log");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_discover_zero_matches() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        touch(dir.path(), "notes.txt");

        let result = discover_log_files(dir.path(), "*.log");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("No files matching"));
    }

    #[test]
    fn test_discover_invalid_glob() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        touch(dir.path(), "a.log");

        let result = discover_log_files(dir.path(), "a[.log");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid file pattern"));
    }
}
