//! Progress log: append-only JSONL with file locking and CSV export.
//!
//! Entries are appended as JSON lines; malformed lines are skipped on read
//! so one bad record never loses the rest of the history.

use crate::{ProgressEntry, Result};
use chrono::{Duration, Utc};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Append a progress entry to the log
pub fn append_entry(path: &Path, entry: &ProgressEntry) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    file.lock_exclusive()?;

    let mut writer = std::io::BufWriter::new(&file);
    let line = serde_json::to_string(entry)?;
    writer.write_all(line.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    file.unlock()?;

    tracing::debug!("Appended progress entry {} to {:?}", entry.id, path);
    Ok(())
}

/// Read every parseable entry from the log
pub fn read_entries(path: &Path) -> Result<Vec<ProgressEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut entries = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<ProgressEntry>(&line) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                tracing::warn!("Skipping progress entry at line {}: {}", line_num + 1, e);
            }
        }
    }

    file.unlock()?;
    Ok(entries)
}

/// Entries from the last `days` days, newest first
pub fn recent_entries(path: &Path, days: i64) -> Result<Vec<ProgressEntry>> {
    let cutoff = Utc::now() - Duration::days(days);

    let mut entries: Vec<ProgressEntry> = read_entries(path)?
        .into_iter()
        .filter(|e| e.recorded_at >= cutoff)
        .collect();

    entries.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));

    tracing::debug!(
        "Loaded {} progress entries from last {} days",
        entries.len(),
        days
    );
    Ok(entries)
}

/// Flattened row format for the CSV export
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    id: String,
    recorded_at: String,
    weight_kg: Option<f64>,
    exercises: String,
    meals: String,
    notes: Option<String>,
}

impl From<&ProgressEntry> for CsvRow {
    fn from(entry: &ProgressEntry) -> Self {
        CsvRow {
            id: entry.id.to_string(),
            recorded_at: entry.recorded_at.to_rfc3339(),
            weight_kg: entry.weight_kg,
            exercises: entry.exercises.join(";"),
            meals: entry.meals.join(";"),
            notes: entry.notes.clone(),
        }
    }
}

/// Export the full progress log to a CSV file
///
/// Returns the number of entries written. The export overwrites any
/// previous file at `csv_path`; the JSONL log stays untouched.
pub fn export_csv(log_path: &Path, csv_path: &Path) -> Result<usize> {
    let entries = read_entries(log_path)?;

    if let Some(parent) = csv_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(csv_path)?;
    for entry in &entries {
        writer.serialize(CsvRow::from(entry))?;
    }
    writer.flush()?;

    tracing::info!("Exported {} progress entries to {:?}", entries.len(), csv_path);
    Ok(entries.len())
}
