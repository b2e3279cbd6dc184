//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::TempDir;

/// Builder for creating test log folders
pub struct LogFolderBuilder {
    temp_dir: TempDir,
}

impl LogFolderBuilder {
    /// Create a new builder with an empty folder
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the folder
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a log file with raw content
    pub fn with_log(self, filename: &str, content: &str) -> Self {
        let log_path = self.temp_dir.path().join(filename);
        let mut file = fs::File::create(log_path).expect("Failed to create log file");
        file.write_all(content.as_bytes()).expect("Failed to write log file");
        self
    }

    /// Add a log file built line by line
    pub fn with_file(self, log_file: &LogFileBuilder) -> Self {
        log_file.create_in(self.temp_dir.path());
        self
    }

    /// Add a subdirectory containing a log file (for recursive glob tests)
    pub fn with_nested_log(self, subdir: &str, filename: &str, content: &str) -> Self {
        let dir = self.temp_dir.path().join(subdir);
        fs::create_dir_all(&dir).expect("Failed to create subdirectory");
        fs::write(dir.join(filename), content).expect("Failed to write nested log file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for LogFolderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for WMS debug log files
pub struct LogFileBuilder {
    filename: String,
    lines: Vec<String>,
}

impl LogFileBuilder {
    /// Create a new log file with the given filename
    pub fn new(filename: &str) -> Self {
        Self { filename: filename.to_string(), lines: Vec::new() }
    }

    /// Add a raw line
    pub fn line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Add a timestamped line, e.g. `[01-JAN-25 10:00:00] <message>`
    pub fn stamped(mut self, timestamp: &str, message: &str) -> Self {
        self.lines.push(format!("[{}] {}", timestamp, message));
        self
    }

    /// Add a delivery id marker line
    pub fn del_id(self, timestamp: &str, id: &str) -> Self {
        self.stamped(timestamp, &format!("WMS_XDock_Pegging_Pub: Del Id:{}", id))
    }

    /// Add a wait marker line
    pub fn wait(self, timestamp: &str, seconds: u32) -> Self {
        self.stamped(
            timestamp,
            &format!("WMS_XDock_Pegging_Pub: wdd update wait time:{}", seconds),
        )
    }

    /// Add a lock failure marker line
    pub fn lock_failed(self, timestamp: &str) -> Self {
        self.stamped(
            timestamp,
            "WMS_XDock_Pegging_Pub: Could not lock the WDD demand line record",
        )
    }

    /// Add a lock success marker line
    pub fn lock_success(self, timestamp: &str) -> Self {
        self.stamped(timestamp, "WMS_XDock_Pegging_Pub: RM - Got WDD lock")
    }

    /// Add an Oracle error line
    pub fn oracle_error(self, timestamp: &str, code: &str, message: &str) -> Self {
        self.stamped(timestamp, &format!("WMS_XDock_Pegging_Pub: {}: {}", code, message))
    }

    /// Create the file in the given directory
    pub fn create_in(&self, dir: &Path) {
        let file_path = dir.join(&self.filename);
        let mut file = fs::File::create(file_path).expect("Failed to create log file");

        let mut content = self.lines.join("\n");
        content.push('\n');
        file.write_all(content.as_bytes()).expect("Failed to write log file");
    }
}

/// Helper to create a folder with one complete failed lock attempt and one
/// Oracle error
pub fn contended_log_folder() -> TempDir {
    LogFolderBuilder::new()
        .with_file(
            &LogFileBuilder::new("wms_debug.log")
                .stamped("01-JAN-25 09:59:59", "startup")
                .del_id("01-JAN-25 10:00:00", "12345")
                .wait("01-JAN-25 10:00:01", 5)
                .lock_failed("01-JAN-25 10:00:04")
                .oracle_error("01-JAN-25 10:00:05", "ORA-00054", "resource busy"),
        )
        .build()
}

/// Helper to create a folder whose single file has a clean, instant lock
pub fn quiet_log_folder() -> TempDir {
    LogFolderBuilder::new()
        .with_file(
            &LogFileBuilder::new("wms_debug.log")
                .del_id("01-JAN-25 10:00:00", "777")
                .wait("01-JAN-25 10:00:00", 0)
                .lock_success("01-JAN-25 10:00:00"),
        )
        .build()
}
