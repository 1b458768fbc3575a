//! In-memory activity log
//!
//! An append-only sequence of activity entries shared between the tracker
//! and the front end. Cloning an `ActivityLog` yields another handle to the
//! same underlying sequence.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::entry::ActivityEntry;

/// Shared, append-only log of high-level operations
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: Arc<RwLock<Vec<ActivityEntry>>>,
}

impl ActivityLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry with the given description
    pub fn record(&self, description: impl Into<String>) {
        let entry = ActivityEntry::new(description);
        tracing::trace!(description = %entry.description, "activity recorded");
        self.write().push(entry);
    }

    /// Snapshot of all entries, oldest first
    pub fn entries(&self) -> Vec<ActivityEntry> {
        self.read().clone()
    }

    /// Entries recorded at or after `start`
    pub fn entries_since(&self, start: usize) -> Vec<ActivityEntry> {
        let entries = self.read();
        entries.get(start..).map(<[_]>::to_vec).unwrap_or_default()
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Writers never leave the Vec half-updated, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Vec<ActivityEntry>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<ActivityEntry>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }
}
