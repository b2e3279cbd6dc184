use console::style;

use crate::extract::timestamp::format_timestamp;
use crate::models::{LockAttempt, LockStats, OracleError, error_code_counts};

/// Errors shown in full on the console before deferring to the workbook.
const MAX_CONSOLE_ERRORS: usize = 20;

const BANNER_WIDTH: usize = 120;

/// Print the WDD lock analysis summary: banner, color legend, one row per
/// attempt and the aggregate stats block.
///
/// Row coloring mirrors the workbook: failed attempts red and bold, delayed
/// successes red, clean successes green.
pub fn print_summary(attempts: &[LockAttempt], stats: &LockStats, files_processed: usize) {
    let banner = "=".repeat(BANNER_WIDTH);

    println!("\n{}", banner);
    println!(
        "SUMMARY: Processed {} file(s), found {} WDD lock attempt(s)",
        files_processed,
        attempts.len()
    );
    println!("{}", banner);
    println!(
        "{}  |  {}  |  {}",
        style("# RED = LOCK FAILED").red(),
        style("# RED = Time Diff > 0").red(),
        style("# GREEN = Success (no delay)").green()
    );
    println!("{}\n", banner);

    if attempts.is_empty() {
        return;
    }

    let header = format!(
        "{:<30} {:<15} {:<20} {:<20} {:<15} {}",
        "File", "Del ID", "Wait Start", "Result Time", "Time Diff (s)", "Result"
    );
    println!("{}", style(header).bold());
    println!(
        "{} {} {} {} {} {}",
        "-".repeat(30),
        "-".repeat(15),
        "-".repeat(20),
        "-".repeat(20),
        "-".repeat(15),
        "-".repeat(15)
    );

    for attempt in attempts {
        print_row(attempt);
    }

    println!("\n{}", banner);
    println!("{}", style("STATS:").bold());
    println!("  Total lock attempts:    {}", stats.total);
    println!("{}", style(format!("  Successful locks:       {}", stats.success)).green());
    println!("{}", style(format!("  Failed locks:           {}", stats.failed)).red());
    println!("{}", style(format!("  Entries with delay > 0: {}", stats.with_delay)).red());

    let failed: Vec<&LockAttempt> = attempts.iter().filter(|a| a.is_failed()).collect();
    let success: Vec<&LockAttempt> = attempts.iter().filter(|a| !a.is_failed()).collect();

    if !failed.is_empty() {
        let avg = failed.iter().map(|a| a.time_diff_seconds).sum::<f64>() / failed.len() as f64;
        let max = failed.iter().map(|a| a.time_diff_seconds).fold(f64::MIN, f64::max);
        println!("{}", style(format!("  Avg time for failed:    {:.2} seconds", avg)).red());
        println!("{}", style(format!("  Max time for failed:    {:.2} seconds", max)).red());
    }

    if !success.is_empty() {
        let avg = success.iter().map(|a| a.time_diff_seconds).sum::<f64>() / success.len() as f64;
        println!("{}", style(format!("  Avg time for success:   {:.2} seconds", avg)).green());
    }
}

fn print_row(attempt: &LockAttempt) {
    let row = format!(
        "{:<30} {:<15} {:<20} {:<20} {:<15.2} {}",
        attempt.file,
        attempt.del_id,
        format_timestamp(&attempt.wait_start),
        format_timestamp(&attempt.result_time),
        attempt.time_diff_seconds,
        attempt.outcome
    );

    if attempt.is_failed() {
        println!("{}", style(row).red().bold());
    } else if attempt.has_delay() {
        println!("{}", style(row).red());
    } else {
        println!("{}", style(row).green());
    }
}

/// Print the Oracle error section: total, per-code breakdown and the first
/// few full error lines. Everything past the console cap is deferred to the
/// workbook, which carries the complete list.
pub fn print_oracle_errors(errors: &[OracleError]) {
    let banner = "=".repeat(BANNER_WIDTH);

    println!("\n{}", banner);
    println!("{}", style("ORACLE ERRORS (excluding ORA-01403):").bold());
    println!("{}", banner);

    if errors.is_empty() {
        println!("{}", style("  No Oracle errors found (excluding ORA-01403)").green());
        return;
    }

    println!("{}", style(format!("  Total Oracle errors found: {}", errors.len())).red());

    println!("\n  Error breakdown:");
    for (code, count) in error_code_counts(errors) {
        println!("{}", style(format!("    {}: {} occurrence(s)", code, count)).red());
    }

    println!("\n  {}", style("Error Details:").bold());
    println!("  {}", "-".repeat(116));
    for error in errors.iter().take(MAX_CONSOLE_ERRORS) {
        println!(
            "  {} | {} | Line {} | {}",
            style(&error.code).red(),
            error.file,
            error.line_number,
            error.timestamp_display()
        );
        println!("    {}", clip(&error.message, 100));
    }

    if errors.len() > MAX_CONSOLE_ERRORS {
        println!(
            "\n  ... and {} more errors (see Excel report for full list)",
            errors.len() - MAX_CONSOLE_ERRORS
        );
    }
}

/// Clip display text at a character boundary with an ellipsis marker.
fn clip(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((boundary, _)) => format!("{}...", &text[..boundary]),
        None => text.to_string(),
    }
}
