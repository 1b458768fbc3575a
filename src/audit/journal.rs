//! Activity journal for persisting the activity log
//!
//! Provides the ActivityJournal struct that appends activity entries to a
//! log file. Each entry is written as a single JSON line.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};

use super::entry::ActivityEntry;

/// Handles writing activity entries to the journal file
///
/// The journal uses a line-delimited JSON format (JSONL) where each line
/// is a complete JSON object representing one activity entry.
pub struct ActivityJournal {
    /// Path to the journal file
    log_path: PathBuf,
}

impl ActivityJournal {
    /// Create a new ActivityJournal that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append entries to the journal, flushing once at the end
    pub fn append(&self, entries: &[ActivityEntry]) -> ExpenseResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.log_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    ExpenseError::Io(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to open activity log: {}", e)))?;

        for entry in entries {
            let json = serde_json::to_string(entry).map_err(|e| {
                ExpenseError::Format(format!("Failed to serialize activity entry: {}", e))
            })?;

            writeln!(file, "{}", json)
                .map_err(|e| ExpenseError::Io(format!("Failed to write activity entry: {}", e)))?;
        }

        file.flush()
            .map_err(|e| ExpenseError::Io(format!("Failed to flush activity log: {}", e)))?;

        tracing::debug!(count = entries.len(), path = %self.log_path.display(), "journal appended");
        Ok(())
    }

    /// Read all entries from the journal, oldest first
    pub fn read_all(&self) -> ExpenseResult<Vec<ActivityEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to open activity log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                ExpenseError::Io(format!(
                    "Failed to read activity log line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: ActivityEntry = serde_json::from_str(&line).map_err(|e| {
                ExpenseError::Format(format!(
                    "Failed to parse activity entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries from the journal
    pub fn read_recent(&self, count: usize) -> ExpenseResult<Vec<ActivityEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    /// Get the path to the journal file
    pub fn path(&self) -> &Path {
        &self.log_path
    }
}
