use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::extract::extract_trace_window;
use crate::models::LockStats;
use crate::report::{
    print_oracle_errors, print_summary, write_lock_csv, write_trace_file, write_workbook,
};
use crate::scanner::{discover_log_files, file_size_mb, scan_folder};
use crate::utils::base_name;

const DEFAULT_OUTPUT: &str = "wdd_lock_results.csv";
const DEFAULT_PATTERN: &str = "*.log";

#[derive(Parser)]
#[command(name = "wddscan")]
#[command(version = "0.1.0")]
#[command(about = "Scan WMS debug logs for WDD lock contention and Oracle errors", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a folder of log files and report the results
    Run(RunArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Folder containing the log files
    pub folder: PathBuf,

    /// Output CSV path (with --id this positional is the file glob instead)
    pub output: Option<String>,

    /// Glob selecting files inside the folder, e.g. "*.log" or "**/*.log"
    pub pattern: Option<String>,

    /// Search for this identifier and extract its trace windows instead of
    /// running the lock/error analysis
    #[arg(long, value_name = "IDENTIFIER")]
    pub id: Option<String>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run(args)) => {
            if let Some(search_id) = args.id.clone() {
                run_trace(&args, &search_id)?;
            } else {
                run_analysis(&args)?;
            }
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Batch mode: extract lock attempts and Oracle errors from every matching
/// file, print the console report and write the CSV and Excel outputs.
fn run_analysis(args: &RunArgs) -> Result<()> {
    let output = args.output.as_deref().unwrap_or(DEFAULT_OUTPUT);
    let pattern = args.pattern.as_deref().unwrap_or(DEFAULT_PATTERN);

    let outcome = scan_folder(&args.folder, pattern)?;
    let stats = LockStats::collect(&outcome.lock_attempts);

    print_summary(&outcome.lock_attempts, &stats, outcome.files_processed);
    print_oracle_errors(&outcome.oracle_errors);

    // Excel lands next to the CSV, under the same name with the extension swapped
    let base = match output.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => output,
    };
    let excel_path = PathBuf::from(format!("{}.xlsx", base));
    if let Err(e) =
        write_workbook(&excel_path, &outcome.lock_attempts, &stats, &outcome.oracle_errors)
    {
        eprintln!("Warning: Could not generate Excel report: {}", e);
    }

    if !outcome.lock_attempts.is_empty() {
        match write_lock_csv(Path::new(output), &outcome.lock_attempts) {
            Ok(()) => println!("CSV saved to: {}", output),
            Err(e) => eprintln!("Warning: Could not write CSV: {}", e),
        }
    }

    Ok(())
}

/// Trace mode: find every file containing the identifier and dump the span
/// from its first to its last occurrence into a per-file trace file.
fn run_trace(args: &RunArgs, search_id: &str) -> Result<()> {
    // Without an output file the glob takes the output's positional slot
    let pattern = args
        .pattern
        .as_deref()
        .or(args.output.as_deref())
        .unwrap_or(DEFAULT_PATTERN);

    let log_files = discover_log_files(&args.folder, pattern)?;
    println!("Searching for ID '{}' in {} file(s)...", search_id, log_files.len());

    let output_dir = args.folder.join(format!("id_traces_{}", search_id));
    let mut files_with_id = 0usize;

    for path in &log_files {
        print!("Scanning {} ({:.2} MB)... ", base_name(path), file_size_mb(path));
        let _ = io::stdout().flush();

        match extract_trace_window(path, search_id) {
            Ok(window) if window.is_empty() => {
                println!("NOT FOUND");
            }
            Ok(window) => match write_trace_file(&output_dir, path, search_id, &window) {
                Ok(trace_path) => {
                    println!(
                        "FOUND (lines {}-{}) -> {}",
                        window.first_line,
                        window.last_line,
                        base_name(&trace_path)
                    );
                    files_with_id += 1;
                }
                Err(e) => {
                    println!("FOUND");
                    eprintln!("Warning: Could not write trace file: {}", e);
                }
            },
            Err(e) => {
                println!("SKIPPED");
                eprintln!("Warning: Skipping {}: {}", path.display(), e);
            }
        }
    }

    println!("\n{}", "=".repeat(60));
    if files_with_id > 0 {
        println!("ID '{}' found in {} file(s)", search_id, files_with_id);
        println!("Trace files saved to: {}", output_dir.display());
    } else {
        println!("ID '{}' was not found in any files", search_id);
    }

    Ok(())
}
