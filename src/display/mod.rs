//! Display formatting for terminal output

pub mod expense;
pub mod report;

/// Symbol printed before every amount
pub const CURRENCY: &str = "$";

pub use expense::{format_added_expense, format_expense_table};
pub use report::{format_daily_report, format_monthly_summary, format_monthly_total};
