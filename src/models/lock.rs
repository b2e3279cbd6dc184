use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

/// Outcome of a WDD lock attempt, as reported by the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LockOutcome {
    #[serde(rename = "LOCK SUCCESS")]
    Success,
    #[serde(rename = "LOCK FAILED")]
    Failed,
}

impl fmt::Display for LockOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockOutcome::Success => write!(f, "LOCK SUCCESS"),
            LockOutcome::Failed => write!(f, "LOCK FAILED"),
        }
    }
}

/// One completed WDD lock attempt correlated from a wait marker and a
/// success/failure marker sharing the same delivery detail identifier.
///
/// Immutable once emitted by the extractor. `time_diff_seconds` is the
/// elapsed time between the wait marker and the result marker and may be
/// negative when log timestamps run backwards; negative values are kept
/// as-is since they describe what the log says.
///
/// Serde renames produce the exact CSV column schema
/// (`File,Del_ID,Wait_Start,Result_Time,Time_Diff_Seconds,Result`).
#[derive(Debug, Clone, Serialize)]
pub struct LockAttempt {
    #[serde(rename = "File")]
    pub file: String,
    #[serde(rename = "Del_ID")]
    pub del_id: String,
    #[serde(
        rename = "Wait_Start",
        serialize_with = "crate::extract::timestamp::serialize_timestamp"
    )]
    pub wait_start: NaiveDateTime,
    #[serde(
        rename = "Result_Time",
        serialize_with = "crate::extract::timestamp::serialize_timestamp"
    )]
    pub result_time: NaiveDateTime,
    #[serde(rename = "Time_Diff_Seconds")]
    pub time_diff_seconds: f64,
    #[serde(rename = "Result")]
    pub outcome: LockOutcome,
}

impl LockAttempt {
    pub fn is_failed(&self) -> bool {
        self.outcome == LockOutcome::Failed
    }

    pub fn has_delay(&self) -> bool {
        self.time_diff_seconds > 0.0
    }
}

/// Aggregate counts over a batch of lock attempts, shown in the console
/// summary and the workbook header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LockStats {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    /// Attempts where the result arrived strictly after the wait start.
    pub with_delay: usize,
}

impl LockStats {
    pub fn collect(attempts: &[LockAttempt]) -> Self {
        LockStats {
            total: attempts.len(),
            success: attempts.iter().filter(|a| !a.is_failed()).count(),
            failed: attempts.iter().filter(|a| a.is_failed()).count(),
            with_delay: attempts.iter().filter(|a| a.has_delay()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn ts(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    fn attempt(outcome: LockOutcome, diff: f64) -> LockAttempt {
        LockAttempt {
            file: "test.log".to_string(),
            del_id: "100".to_string(),
            wait_start: ts(10, 0, 0),
            result_time: ts(10, 0, 3),
            time_diff_seconds: diff,
            outcome,
        }
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(LockOutcome::Success.to_string(), "LOCK SUCCESS");
        assert_eq!(LockOutcome::Failed.to_string(), "LOCK FAILED");
    }

    #[test]
    fn test_stats_collect() {
        let attempts = vec![
            attempt(LockOutcome::Success, 0.0),
            attempt(LockOutcome::Success, 2.0),
            attempt(LockOutcome::Failed, 5.0),
            attempt(LockOutcome::Failed, -1.0),
        ];
        let stats = LockStats::collect(&attempts);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.success, 2);
        assert_eq!(stats.failed, 2);
        assert_eq!(stats.with_delay, 2);
    }

    #[test]
    fn test_stats_collect_empty() {
        assert_eq!(LockStats::collect(&[]), LockStats::default());
    }

    #[test]
    fn test_negative_diff_is_not_a_delay() {
        assert!(!attempt(LockOutcome::Success, -3.0).has_delay());
        assert!(!attempt(LockOutcome::Success, 0.0).has_delay());
        assert!(attempt(LockOutcome::Success, 0.5).has_delay());
    }
}
