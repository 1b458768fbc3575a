//! Daily Report
//!
//! Total spent on one date and whether it stays under the daily limit.

use chrono::NaiveDate;

use crate::services::ExpenseTracker;

/// Spending on a single date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyReport {
    /// The reported date
    pub date: NaiveDate,
    /// Sum of the day's expenses
    pub total: i64,
    /// Daily limit the total is measured against
    pub limit: i64,
    /// Whether the total is strictly below the limit
    pub within_limit: bool,
}

impl DailyReport {
    /// Generate the report for a date
    pub fn generate(tracker: &ExpenseTracker, date: NaiveDate) -> Self {
        Self {
            date,
            total: tracker.daily_total(date),
            limit: tracker.budget().daily_limit,
            within_limit: tracker.below_daily_limit(date),
        }
    }
}
