//! Tracker file persistence
//!
//! Saves and loads a whole tracker at a single file path.

use std::path::{Path, PathBuf};

use crate::audit::{ActivityLog, EXPENSES_LOADED, EXPENSES_SAVED};
use crate::error::ExpenseError;
use crate::models::BudgetConfig;
use crate::services::ExpenseTracker;

use super::codec;
use super::file_io::{read_document, write_document_atomic};

/// Reads and writes the tracker document at one path
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store for the given document path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the tracker document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the tracker to disk, replacing any previous document
    pub fn save(&self, tracker: &ExpenseTracker) -> Result<(), ExpenseError> {
        let document = codec::serialize(tracker)?;
        write_document_atomic(&self.path, &document)?;

        tracing::info!(count = tracker.len(), path = %self.path.display(), "expenses saved");
        tracker.activity_log().record(EXPENSES_SAVED);
        Ok(())
    }

    /// Read a tracker from disk
    ///
    /// On failure nothing is returned and the caller keeps whatever tracker
    /// it already had.
    pub fn load(&self, budget: BudgetConfig, log: ActivityLog) -> Result<ExpenseTracker, ExpenseError> {
        let document = read_document(&self.path)?;
        let expenses = codec::parse(&document)?;

        tracing::info!(count = expenses.len(), path = %self.path.display(), "expenses loaded");
        log.record(EXPENSES_LOADED);
        Ok(codec::replay(expenses, budget, log))
    }

    /// Read a tracker from disk, or start an empty one if no document exists yet
    pub fn load_or_default(
        &self,
        budget: BudgetConfig,
        log: ActivityLog,
    ) -> Result<ExpenseTracker, ExpenseError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no tracker file, starting empty");
            return Ok(ExpenseTracker::new(budget, log));
        }
        self.load(budget, log)
    }
}
