//! Activity entry data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Description recorded when an expense is added
pub const EXPENSE_ADDED: &str = "Expense added to expenseTracker";
/// Description recorded after a successful save
pub const EXPENSES_SAVED: &str = "Saved expenses to file";
/// Description recorded after a successful load
pub const EXPENSES_LOADED: &str = "Loaded expenses from file";

/// A single activity log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// What happened
    pub description: String,
}

impl ActivityEntry {
    /// Create an entry stamped with the current time
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            description: description.into(),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.description
        )
    }
}
