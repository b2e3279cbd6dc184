use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::timestamp::parse_timestamp;
use crate::models::{LockAttempt, LockOutcome};
use crate::utils::{base_name, lossy_lines};

/// Subsystem tag present on every line the lock extractor cares about.
/// Used as a cheap substring filter before any regex runs.
pub const SUBSYSTEM_TAG: &str = "WMS_XDock_Pegging_Pub:";

static DEL_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"WMS_XDock_Pegging_Pub:\s*Del Id:(\d+)").unwrap());

static WAIT_TIME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"WMS_XDock_Pegging_Pub:.*wdd update wait time:(\d+)").unwrap());

static LOCK_FAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"WMS_XDock_Pegging_Pub:.*Could not lock the WDD demand line record").unwrap()
});

static LOCK_SUCCESS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"WMS_XDock_Pegging_Pub:.*RM - Got WDD lock").unwrap());

/// Correlation state carried between lines while scanning one file.
///
/// A lock attempt spans several lines tied together by the delivery detail
/// identifier: a `Del Id:` line opens an attempt, a `wdd update wait time`
/// line records when the wait began, and a success/failure line closes it.
/// The state is a plain value threaded through [`observe`](Self::observe)
/// call by call, so the machine can be driven directly with synthetic line
/// sequences in tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LockScanState {
    del_id: Option<String>,
    wait_start: Option<NaiveDateTime>,
}

/// A completed lock lifecycle observed by the state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct LockEvent {
    pub del_id: String,
    pub wait_start: NaiveDateTime,
    pub result_time: NaiveDateTime,
    pub outcome: LockOutcome,
}

impl LockEvent {
    fn into_attempt(self, file: &str) -> LockAttempt {
        let time_diff_seconds = (self.result_time - self.wait_start).num_seconds() as f64;
        LockAttempt {
            file: file.to_string(),
            del_id: self.del_id,
            wait_start: self.wait_start,
            result_time: self.result_time,
            time_diff_seconds,
            outcome: self.outcome,
        }
    }
}

impl LockScanState {
    /// Advance the machine by one log line.
    ///
    /// Returns the next state and, when this line completes a lock
    /// lifecycle, the finished [`LockEvent`]. Markers are checked in a
    /// fixed order (identifier, wait, failure, success) and the first
    /// match decides the line.
    ///
    /// Incomplete lifecycles are dropped silently: a fresh `Del Id:`
    /// abandons any pending attempt, and a result marker that arrives
    /// without an identifier, without a wait timestamp, or on a line whose
    /// own timestamp does not parse emits nothing. Partial log windows make
    /// these a routine occurrence, so they are reported only via `debug!`.
    pub fn observe(self, line: &str) -> (Self, Option<LockEvent>) {
        if !line.contains(SUBSYSTEM_TAG) {
            return (self, None);
        }

        if let Some(captured) = DEL_ID_REGEX.captures(line) {
            if self.wait_start.is_some() {
                log::debug!("abandoning pending lock attempt for Del Id {:?}", self.del_id);
            }
            let state =
                LockScanState { del_id: Some(captured[1].to_string()), wait_start: None };
            return (state, None);
        }

        if WAIT_TIME_REGEX.is_match(line) {
            if self.del_id.is_some() {
                // The line's own bracketed timestamp is the wait start; the
                // wait count after the marker is informational only
                return (LockScanState { wait_start: parse_timestamp(line), ..self }, None);
            }
            return (self, None);
        }

        let outcome = if LOCK_FAIL_REGEX.is_match(line) {
            Some(LockOutcome::Failed)
        } else if LOCK_SUCCESS_REGEX.is_match(line) {
            Some(LockOutcome::Success)
        } else {
            None
        };

        match outcome {
            // A result marker always closes the current attempt
            Some(outcome) => {
                let event = match (self.del_id, self.wait_start, parse_timestamp(line)) {
                    (Some(del_id), Some(wait_start), Some(result_time)) => {
                        Some(LockEvent { del_id, wait_start, result_time, outcome })
                    }
                    (del_id, _, _) => {
                        log::debug!(
                            "result marker without a complete attempt (Del Id {:?})",
                            del_id
                        );
                        None
                    }
                };
                (LockScanState::default(), event)
            }
            None => (self, None),
        }
    }

    fn has_pending_attempt(&self) -> bool {
        self.wait_start.is_some()
    }
}

/// Extract completed WDD lock attempts from a single log file.
///
/// Streams the file line by line through [`LockScanState::observe`],
/// collecting one [`LockAttempt`] per completed lifecycle in line order.
/// Lines outside the `WMS_XDock_Pegging_Pub` subsystem are skipped, and
/// invalid UTF-8 is replaced rather than treated as an error.
///
/// # Arguments
///
/// * `path` - Path to the log file
///
/// # Returns
///
/// Returns a Vec of [`LockAttempt`] in the order the lifecycles completed.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read. Malformed or
/// incomplete lifecycles never error; they simply produce no record.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use wddscan::extract_lock_attempts;
///
/// let attempts = extract_lock_attempts(Path::new("/var/log/wms/app.log"))?;
/// println!("{} lock attempts", attempts.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn extract_lock_attempts(path: &Path) -> Result<Vec<LockAttempt>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;
    let file_name = base_name(path);

    let mut attempts = Vec::new();
    let mut state = LockScanState::default();

    for line in lossy_lines(BufReader::new(file)) {
        let line = line
            .with_context(|| format!("Failed to read from log file: {}", path.display()))?;
        let (next, event) = state.observe(&line);
        state = next;
        if let Some(event) = event {
            attempts.push(event.into_attempt(&file_name));
        }
    }

    if state.has_pending_attempt() {
        log::debug!("{}: pending lock attempt left open at end of file", file_name);
    }

    Ok(attempts)
}
