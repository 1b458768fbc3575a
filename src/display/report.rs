//! Report formatting utilities for terminal output

use super::CURRENCY;
use crate::reports::{DailyReport, MonthlySummary};
use crate::services::NO_EXPENSES_LABEL;

/// Format a daily report with its limit status
pub fn format_daily_report(report: &DailyReport) -> String {
    let status = if report.within_limit {
        "You're within your daily limit!"
    } else {
        "Warning: You've exceeded your daily limit!"
    };

    format!(
        "{}\nTotal for {}: {}{} (limit {}{})\n",
        status,
        report.date.format("%Y-%m-%d"),
        CURRENCY,
        report.total,
        CURRENCY,
        report.limit
    )
}

/// Format a month's total with its limit status
pub fn format_monthly_total(summary: &MonthlySummary) -> String {
    let status = if summary.within_limit {
        "You're within your monthly limit!"
    } else {
        "Warning: You've exceeded your monthly limit!"
    };

    format!(
        "{}\nTotal for {}: {}{} (limit {}{})\n",
        status, summary.month_name, CURRENCY, summary.total, CURRENCY, summary.limit
    )
}

/// Format the full monthly summary
pub fn format_monthly_summary(summary: &MonthlySummary) -> String {
    let highest_day = summary
        .highest_day
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "none".to_string());
    let top_category = summary
        .top_category
        .map_or(NO_EXPENSES_LABEL, |c| c.label());

    let mut output = format!("Monthly Summary: {}\n", summary.month_name);
    output.push_str(&"─".repeat(30));
    output.push('\n');
    output.push_str(&format!(
        "Total spent this month:    {}{}\n",
        CURRENCY, summary.total
    ));
    output.push_str(&format!(
        "Average expense:           {}{}\n",
        CURRENCY, summary.average
    ));
    output.push_str(&format!("Day with highest spending: {}\n", highest_day));
    output.push_str(&format!("Most spent category:       {}\n", top_category));
    output
}
