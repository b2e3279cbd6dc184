use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serializer;

/// Timestamp layout used inside log line brackets, e.g. `01-JAN-25 13:45:10`.
pub const TIMESTAMP_FORMAT: &str = "%d-%b-%y %H:%M:%S";

static TIMESTAMP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\d{2}-[A-Z]{3}-\d{2}\s+\d{2}:\d{2}:\d{2})\]").unwrap());

/// Extract the bracketed timestamp from a log line, if any.
///
/// Log lines carry timestamps like `[01-JAN-25 13:45:10]`. The first such
/// bracket on the line is parsed; anything else on the line is ignored.
/// Lines without a parseable bracketed timestamp return `None` - absence is
/// an expected condition (continuation lines, banners), never an error.
///
/// Two-digit years follow the standard chrono window: 00-68 map to 20xx,
/// 69-99 to 19xx.
pub fn parse_timestamp(line: &str) -> Option<NaiveDateTime> {
    let captured = TIMESTAMP_REGEX.captures(line)?;
    NaiveDateTime::parse_from_str(&captured[1], TIMESTAMP_FORMAT).ok()
}

/// Render a timestamp in the log file's own layout (`01-JAN-25 13:45:10`).
///
/// chrono formats month abbreviations as `Jan`; the log format uses uppercase,
/// so the rendered string is uppercased to round-trip exactly what the
/// extractor matched.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string().to_uppercase()
}

/// Serialize a timestamp in log layout for CSV output.
pub fn serialize_timestamp<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(ts))
}
