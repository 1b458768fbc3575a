//! Activity logging for the expense tracker
//!
//! Records high-level operations (add, save, load) in an append-only log.
//!
//! # Architecture
//!
//! - `ActivityEntry`: a timestamped description of one operation.
//! - `ActivityLog`: the in-memory log, an explicitly constructed handle
//!   shared by the tracker, the store, and the front end.
//! - `ActivityJournal`: optional persistence of entries as JSON lines so a
//!   session's activity can be inspected after the process exits.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::{ActivityJournal, ActivityLog};
//!
//! let log = ActivityLog::new();
//! let mut tracker = ExpenseTracker::new(BudgetConfig::default(), log.clone());
//! tracker.add(expense);
//!
//! for entry in log.entries() {
//!     println!("{}", entry.format_human_readable());
//! }
//! ActivityJournal::new(paths.activity_log()).append(&log.entries())?;
//! ```

mod entry;
mod journal;
mod log;

pub use entry::{ActivityEntry, EXPENSES_LOADED, EXPENSES_SAVED, EXPENSE_ADDED};
pub use journal::ActivityJournal;
pub use log::ActivityLog;
