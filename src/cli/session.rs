//! CLI session
//!
//! Ties together settings, the tracker document, and the activity log for
//! the lifetime of one command invocation.

use crate::audit::{ActivityEntry, ActivityJournal, ActivityLog};
use crate::config::{Settings, TrackerPaths};
use crate::error::ExpenseResult;
use crate::services::ExpenseTracker;
use crate::storage::ExpenseStore;

/// State shared by every CLI command
pub struct Session {
    paths: TrackerPaths,
    settings: Settings,
    store: ExpenseStore,
    journal: ActivityJournal,
    log: ActivityLog,
    /// Loaded on first use so commands that never touch expenses don't
    /// depend on the tracker document
    tracker: Option<ExpenseTracker>,
    /// Log length right after the tracker loaded; later entries are journaled
    journal_mark: usize,
}

impl Session {
    /// Load settings for the given paths
    pub fn open(paths: TrackerPaths) -> ExpenseResult<Self> {
        let settings = Settings::load_or_create(&paths)?;
        let store = ExpenseStore::new(paths.tracker_file());
        let journal = ActivityJournal::new(paths.activity_log());

        Ok(Self {
            paths,
            settings,
            store,
            journal,
            log: ActivityLog::new(),
            tracker: None,
            journal_mark: 0,
        })
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The tracker, loading its document on first access
    ///
    /// A missing tracker document starts an empty tracker.
    pub fn tracker(&mut self) -> ExpenseResult<&mut ExpenseTracker> {
        let tracker = match self.tracker.take() {
            Some(tracker) => tracker,
            None => {
                let tracker = self
                    .store
                    .load_or_default(self.settings.budget, self.log.clone())?;
                self.journal_mark = self.log.len();
                tracker
            }
        };
        Ok(self.tracker.insert(tracker))
    }

    pub fn journal(&self) -> &ActivityJournal {
        &self.journal
    }

    /// Write the tracker back to its document, if it was loaded
    pub fn save(&self) -> ExpenseResult<()> {
        match &self.tracker {
            Some(tracker) => self.store.save(tracker),
            None => Ok(()),
        }
    }

    /// Close the session
    ///
    /// Appends the entries recorded after loading to the journal and
    /// returns the complete in-memory log.
    pub fn finish(self) -> ExpenseResult<Vec<ActivityEntry>> {
        let recorded = self.log.entries_since(self.journal_mark);
        self.journal.append(&recorded)?;
        Ok(self.log.entries())
    }
}
