use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::extract::timestamp::format_timestamp;

/// An Oracle database error found on a single log line.
///
/// One record per matching line, keyed on the first `ORA-` code present.
/// The excluded "no data found" code never produces a record.
#[derive(Debug, Clone)]
pub struct OracleError {
    /// Normalized error code, always `ORA-` plus five digits.
    pub code: String,
    /// The matched error text from the code to the end of the line, trimmed.
    pub message: String,
    /// Bracketed timestamp of the line, when the line carries one.
    pub timestamp: Option<NaiveDateTime>,
    /// 1-based line number within the source file.
    pub line_number: usize,
    /// Module/procedure token following the timestamp bracket, or `Unknown`.
    pub context: String,
    /// Base name of the source file.
    pub file: String,
    /// The matched line, truncated to 200 characters.
    pub full_line: String,
}

impl OracleError {
    /// Timestamp in log layout, or the `N/A` sentinel for lines without one.
    pub fn timestamp_display(&self) -> String {
        match &self.timestamp {
            Some(ts) => format_timestamp(ts),
            None => "N/A".to_string(),
        }
    }
}

/// Per-code occurrence counts, most frequent first, ties broken by code.
///
/// Both the console breakdown and the workbook summary sheet present codes
/// in this order.
pub fn error_code_counts(errors: &[OracleError]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for error in errors {
        *counts.entry(error.code.as_str()).or_insert(0) += 1;
    }

    let mut counts: Vec<(String, usize)> =
        counts.into_iter().map(|(code, n)| (code.to_string(), n)).collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn error(code: &str) -> OracleError {
        OracleError {
            code: code.to_string(),
            message: format!("{}: something went wrong", code),
            timestamp: None,
            line_number: 1,
            context: "Unknown".to_string(),
            file: "app.log".to_string(),
            full_line: String::new(),
        }
    }

    #[test]
    fn test_error_code_counts_orders_by_frequency() {
        let errors = vec![
            error("ORA-00054"),
            error("ORA-00001"),
            error("ORA-00054"),
            error("ORA-00060"),
            error("ORA-00054"),
            error("ORA-00060"),
        ];
        let counts = error_code_counts(&errors);
        assert_eq!(
            counts,
            vec![
                ("ORA-00054".to_string(), 3),
                ("ORA-00060".to_string(), 2),
                ("ORA-00001".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_error_code_counts_ties_break_by_code() {
        let errors = vec![error("ORA-00060"), error("ORA-00001")];
        let counts = error_code_counts(&errors);
        assert_eq!(counts[0].0, "ORA-00001");
        assert_eq!(counts[1].0, "ORA-00060");
    }

    #[test]
    fn test_timestamp_display_sentinel() {
        let err = OracleError {
            code: "ORA-00001".to_string(),
            message: "ORA-00001: unique constraint violated".to_string(),
            timestamp: None,
            line_number: 7,
            context: "Unknown".to_string(),
            file: "app.log".to_string(),
            full_line: "ORA-00001: unique constraint violated".to_string(),
        };
        assert_eq!(err.timestamp_display(), "N/A");
    }

    #[test]
    fn test_timestamp_display_formats_log_layout() {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap().and_hms_opt(9, 30, 45).unwrap();
        let err = OracleError {
            code: "ORA-00060".to_string(),
            message: "ORA-00060: deadlock detected".to_string(),
            timestamp: Some(ts),
            line_number: 1,
            context: "WMS_XDock_Pegging_Pub".to_string(),
            file: "app.log".to_string(),
            full_line: "[15-MAR-25 09:30:45] ORA-00060: deadlock detected".to_string(),
        };
        assert_eq!(err.timestamp_display(), "15-MAR-25 09:30:45");
    }
}
