use std::path::Path;

use anyhow::{Context, Result};

use crate::models::LockAttempt;

/// Write the lock attempts to a CSV file with the fixed column schema
/// `File,Del_ID,Wait_Start,Result_Time,Time_Diff_Seconds,Result`.
///
/// The header row comes from the serde renames on [`LockAttempt`] and
/// timestamps are rendered in the log's own layout, so a saved CSV reads
/// back against the source lines it was extracted from.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_lock_csv(path: &Path, attempts: &[LockAttempt]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    for attempt in attempts {
        writer
            .serialize(attempt)
            .with_context(|| format!("Failed to write CSV record for {}", attempt.del_id))?;
    }

    writer.flush().with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    Ok(())
}
