//! CLI commands for reports

use chrono::NaiveDate;

use super::session::Session;
use crate::display::{format_daily_report, format_monthly_summary, format_monthly_total};
use crate::error::ExpenseResult;
use crate::reports::{DailyReport, MonthlySummary};

/// Show the total for a date and the daily limit status
pub fn handle_daily(session: &mut Session, date: NaiveDate) -> ExpenseResult<()> {
    let report = DailyReport::generate(session.tracker()?, date);
    print!("{}", format_daily_report(&report));
    Ok(())
}

/// Show the total for a month and the monthly limit status
pub fn handle_monthly(session: &mut Session, month: u32) -> ExpenseResult<()> {
    let summary = MonthlySummary::generate(session.tracker()?, month)?;
    print!("{}", format_monthly_total(&summary));
    Ok(())
}

/// Show the full monthly summary
pub fn handle_summary(session: &mut Session, month: u32) -> ExpenseResult<()> {
    let summary = MonthlySummary::generate(session.tracker()?, month)?;
    print!("{}", format_monthly_summary(&summary));
    Ok(())
}
