use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};

use crate::extract::timestamp::format_timestamp;
use crate::models::{LockAttempt, LockStats, OracleError, error_code_counts};

const FILL_RED: Color = Color::RGB(0xFFCCCC);
const FILL_YELLOW: Color = Color::RGB(0xFFFFCC);
const FILL_GREEN: Color = Color::RGB(0xCCFFCC);
const FILL_ERROR: Color = Color::RGB(0xFFE6E6);
const FONT_DARK_RED: Color = Color::RGB(0x8B0000);
const FONT_GREEN: Color = Color::RGB(0x28A745);
const HEADER_BLUE: Color = Color::RGB(0x4472C4);
const HEADER_RED: Color = Color::RGB(0xDC3545);
const HEADER_PURPLE: Color = Color::RGB(0x6F42C1);
const HEADER_TEAL: Color = Color::RGB(0x17A2B8);

/// Reference table of common Oracle error codes, reproduced on the summary
/// sheet so readers do not have to look codes up elsewhere.
const ERROR_DESCRIPTIONS: &[(&str, &str)] = &[
    ("ORA-00001", "Unique constraint violated"),
    ("ORA-00054", "Resource busy and acquire with NOWAIT specified"),
    ("ORA-00060", "Deadlock detected while waiting for resource"),
    ("ORA-00904", "Invalid identifier"),
    ("ORA-00942", "Table or view does not exist"),
    ("ORA-01000", "Maximum open cursors exceeded"),
    ("ORA-01017", "Invalid username/password"),
    ("ORA-01400", "Cannot insert NULL into column"),
    ("ORA-01422", "Exact fetch returns more than requested number of rows"),
    ("ORA-01427", "Single-row subquery returns more than one row"),
    ("ORA-01438", "Value larger than specified precision"),
    ("ORA-01476", "Divisor is equal to zero"),
    ("ORA-01555", "Snapshot too old"),
    ("ORA-01652", "Unable to extend temp segment"),
    ("ORA-01722", "Invalid number"),
    ("ORA-02049", "Distributed transaction timeout"),
    ("ORA-02291", "Integrity constraint violated - parent key not found"),
    ("ORA-02292", "Integrity constraint violated - child record found"),
    ("ORA-04031", "Unable to allocate shared memory"),
    ("ORA-06502", "PL/SQL: numeric or value error"),
    ("ORA-06512", "PL/SQL: at line (stack trace)"),
    ("ORA-12154", "TNS: could not resolve connect identifier"),
    ("ORA-12170", "TNS: connect timeout occurred"),
    ("ORA-12541", "TNS: no listener"),
    ("ORA-20000", "User-defined error (RAISE_APPLICATION_ERROR)"),
];

/// Write the three-sheet workbook: lock results, the full Oracle error list
/// and the per-code error summary.
///
/// With nothing at all to report the workbook is skipped entirely (with a
/// console notice) rather than saved empty.
///
/// # Errors
///
/// Returns an error if the workbook cannot be assembled or saved. Callers
/// treat this as a degraded report, not a failed run.
pub fn write_workbook(
    path: &Path,
    attempts: &[LockAttempt],
    stats: &LockStats,
    errors: &[OracleError],
) -> Result<()> {
    if attempts.is_empty() && errors.is_empty() {
        println!("No results to generate Excel.");
        return Ok(());
    }

    let mut workbook = Workbook::new();
    write_lock_sheet(workbook.add_worksheet(), attempts, stats)?;
    write_error_sheet(workbook.add_worksheet(), errors)?;
    write_summary_sheet(workbook.add_worksheet(), errors)?;

    workbook
        .save(path)
        .with_context(|| format!("Failed to write Excel file: {}", path.display()))?;
    println!("Excel saved to: {}", path.display());
    Ok(())
}

fn header_format(background: Color) -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(background)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
}

fn cell_format(fill: Color) -> Format {
    Format::new()
        .set_background_color(fill)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
}

fn title_format() -> Format {
    Format::new().set_bold().set_font_size(14).set_align(FormatAlign::Center)
}

fn write_lock_sheet(
    sheet: &mut Worksheet,
    attempts: &[LockAttempt],
    stats: &LockStats,
) -> Result<(), XlsxError> {
    sheet.set_name("WDD Lock Results")?;

    if attempts.is_empty() {
        sheet.write_string_with_format(
            0,
            0,
            "No WDD Lock Results Found",
            &Format::new().set_bold().set_font_size(14),
        )?;
        return Ok(());
    }

    sheet.merge_range(0, 0, 0, 5, "WDD Lock Analysis Report", &title_format())?;
    sheet.merge_range(
        1,
        0,
        1,
        5,
        &format!(
            "Total: {} | Success: {} | Failed: {} | With Delay: {}",
            stats.total, stats.success, stats.failed, stats.with_delay
        ),
        &Format::new().set_align(FormatAlign::Center),
    )?;

    sheet.write_string_with_format(2, 0, "Legend:", &Format::new().set_bold())?;
    sheet.write_string_with_format(
        2,
        1,
        "RED = LOCK FAILED",
        &Format::new().set_background_color(FILL_RED),
    )?;
    sheet.write_string_with_format(
        2,
        2,
        "YELLOW = Time Diff > 0",
        &Format::new().set_background_color(FILL_YELLOW),
    )?;
    sheet.write_string_with_format(
        2,
        3,
        "GREEN = Success (no delay)",
        &Format::new().set_background_color(FILL_GREEN),
    )?;

    let header = header_format(HEADER_BLUE);
    let headers = ["File", "Del ID", "Wait Start", "Result Time", "Time Diff (s)", "Result"];
    for (col, text) in headers.iter().enumerate() {
        sheet.write_string_with_format(4, col as u16, *text, &header)?;
    }

    for (idx, attempt) in attempts.iter().enumerate() {
        let row = 5 + idx as u32;
        let fill = if attempt.is_failed() {
            FILL_RED
        } else if attempt.has_delay() {
            FILL_YELLOW
        } else {
            FILL_GREEN
        };
        let cell = cell_format(fill);

        sheet.write_string_with_format(row, 0, attempt.file.as_str(), &cell)?;
        sheet.write_string_with_format(row, 1, attempt.del_id.as_str(), &cell)?;
        sheet.write_string_with_format(row, 2, format_timestamp(&attempt.wait_start), &cell)?;
        sheet.write_string_with_format(row, 3, format_timestamp(&attempt.result_time), &cell)?;
        sheet.write_number_with_format(row, 4, attempt.time_diff_seconds, &cell)?;

        // The failed verdict itself stands out in bold dark red
        let result_format = if attempt.is_failed() {
            cell_format(fill).set_bold().set_font_color(FONT_DARK_RED)
        } else {
            cell
        };
        sheet.write_string_with_format(row, 5, attempt.outcome.to_string(), &result_format)?;
    }

    for (col, width) in [(0, 35.0), (1, 15.0), (2, 22.0), (3, 22.0), (4, 15.0), (5, 15.0)] {
        sheet.set_column_width(col, width)?;
    }

    Ok(())
}

fn write_error_sheet(sheet: &mut Worksheet, errors: &[OracleError]) -> Result<(), XlsxError> {
    sheet.set_name("Oracle Errors")?;
    sheet.merge_range(0, 0, 0, 6, "Oracle Database Errors (excluding ORA-01403)", &title_format())?;

    if errors.is_empty() {
        sheet.write_string_with_format(
            2,
            0,
            "No Oracle errors found (excluding ORA-01403)",
            &Format::new().set_font_color(FONT_GREEN),
        )?;
        return Ok(());
    }

    sheet.merge_range(
        1,
        0,
        1,
        6,
        &format!("Total Errors Found: {}", errors.len()),
        &Format::new().set_bold().set_font_color(FONT_DARK_RED).set_align(FormatAlign::Center),
    )?;

    let header = header_format(HEADER_RED);
    let headers =
        ["Error Code", "File", "Line #", "Timestamp", "Context", "Error Message", "Full Line"];
    for (col, text) in headers.iter().enumerate() {
        sheet.write_string_with_format(3, col as u16, *text, &header)?;
    }

    let cell = cell_format(FILL_ERROR);
    let code_cell = cell_format(FILL_ERROR).set_bold().set_font_color(FONT_DARK_RED);
    let text_cell = Format::new()
        .set_background_color(FILL_ERROR)
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
        .set_border(FormatBorder::Thin);

    for (idx, error) in errors.iter().enumerate() {
        let row = 4 + idx as u32;
        sheet.write_string_with_format(row, 0, error.code.as_str(), &code_cell)?;
        sheet.write_string_with_format(row, 1, error.file.as_str(), &cell)?;
        sheet.write_number_with_format(row, 2, error.line_number as f64, &cell)?;
        sheet.write_string_with_format(row, 3, error.timestamp_display(), &cell)?;
        sheet.write_string_with_format(row, 4, error.context.as_str(), &cell)?;
        sheet.write_string_with_format(row, 5, error.message.as_str(), &text_cell)?;
        sheet.write_string_with_format(row, 6, error.full_line.as_str(), &text_cell)?;
    }

    for (col, width) in
        [(0, 12.0), (1, 30.0), (2, 10.0), (3, 20.0), (4, 25.0), (5, 50.0), (6, 80.0)]
    {
        sheet.set_column_width(col, width)?;
    }

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, errors: &[OracleError]) -> Result<(), XlsxError> {
    sheet.set_name("Error Summary")?;
    sheet.merge_range(0, 0, 0, 2, "Oracle Error Summary by Error Code", &title_format())?;

    if errors.is_empty() {
        sheet.write_string_with_format(
            2,
            0,
            "No Oracle errors to summarize",
            &Format::new().set_font_color(FONT_GREEN),
        )?;
        return Ok(());
    }

    let header = header_format(HEADER_PURPLE);
    for (col, text) in ["Error Code", "Count", "Percentage"].iter().enumerate() {
        sheet.write_string_with_format(2, col as u16, *text, &header)?;
    }

    let plain = Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);
    let code_cell = Format::new()
        .set_bold()
        .set_font_color(FONT_DARK_RED)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);

    let total = errors.len();
    for (idx, (code, count)) in error_code_counts(errors).iter().enumerate() {
        let row = 3 + idx as u32;
        let percentage = (*count as f64 / total as f64) * 100.0;
        sheet.write_string_with_format(row, 0, code.as_str(), &code_cell)?;
        sheet.write_number_with_format(row, 1, *count as f64, &plain)?;
        sheet.write_string_with_format(row, 2, format!("{:.1}%", percentage), &plain)?;
    }

    for (col, width) in [(0, 15.0), (1, 12.0), (2, 12.0)] {
        sheet.set_column_width(col, width)?;
    }

    // Static reference table alongside the counts
    sheet.merge_range(
        0,
        4,
        0,
        5,
        "Common Error Descriptions",
        &Format::new().set_bold().set_font_size(12),
    )?;

    let desc_header = header_format(HEADER_TEAL);
    sheet.write_string_with_format(2, 4, "Error Code", &desc_header)?;
    sheet.write_string_with_format(2, 5, "Description", &desc_header)?;

    let desc_text = Format::new()
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
        .set_border(FormatBorder::Thin);
    for (idx, (code, description)) in ERROR_DESCRIPTIONS.iter().enumerate() {
        let row = 3 + idx as u32;
        sheet.write_string_with_format(row, 4, *code, &plain)?;
        sheet.write_string_with_format(row, 5, *description, &desc_text)?;
    }

    sheet.set_column_width(4, 15.0)?;
    sheet.set_column_width(5, 50.0)?;

    Ok(())
}
