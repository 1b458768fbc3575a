//! Monthly Summary Report
//!
//! Collects the month-level figures: total, average expense, the busiest
//! day, and the dominant category.

use chrono::{Month, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Category;
use crate::services::ExpenseTracker;

/// Summary of one calendar month, across every recorded year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummary {
    /// Month number (1-12)
    pub month: u32,
    /// Month name, e.g. "October"
    pub month_name: &'static str,
    /// Sum of the month's expenses
    pub total: i64,
    /// Average expense amount (truncated)
    pub average: i64,
    /// Date with the largest daily total, if any
    pub highest_day: Option<NaiveDate>,
    /// Bucket with the largest total, if any
    pub top_category: Option<Category>,
    /// Monthly limit the total is measured against
    pub limit: i64,
    /// Whether the total is strictly below the limit
    pub within_limit: bool,
}

impl MonthlySummary {
    /// Generate the summary for a month number
    pub fn generate(tracker: &ExpenseTracker, month: u32) -> ExpenseResult<Self> {
        let month_name = month_name(month)?;

        Ok(Self {
            month,
            month_name,
            total: tracker.monthly_total(month),
            average: tracker.monthly_average(month),
            highest_day: tracker.highest_spending_day(month),
            top_category: tracker.most_spent_category(month),
            limit: tracker.budget().monthly_limit,
            within_limit: tracker.below_monthly_limit(month),
        })
    }
}

/// English name of a month number
pub fn month_name(month: u32) -> ExpenseResult<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .ok_or_else(|| {
            ExpenseError::Validation(format!("Month must be between 1 and 12, got {}", month))
        })
}
