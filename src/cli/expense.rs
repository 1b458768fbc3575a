//! Expense CLI commands
//!
//! Implements recording and listing expenses.

use chrono::NaiveDate;

use super::session::Session;
use crate::display::{format_added_expense, format_expense_table};
use crate::error::ExpenseResult;
use crate::models::Expense;

/// Record a new expense and save the tracker
pub fn handle_add(
    session: &mut Session,
    amount: i64,
    category: String,
    date: NaiveDate,
) -> ExpenseResult<()> {
    let tracker = session.tracker()?;
    let expense = Expense::new(amount, category, date);
    let message = format_added_expense(&expense, tracker.budget());

    tracker.add(expense);
    session.save()?;

    print!("{}", message);
    println!("Saved to {}", session.paths().tracker_file().display());
    Ok(())
}

/// List every recorded expense
pub fn handle_list(session: &mut Session) -> ExpenseResult<()> {
    let tracker = session.tracker()?;
    print!(
        "{}",
        format_expense_table(tracker.expenses(), tracker.budget())
    );
    Ok(())
}

/// Show a single expense by its list index
pub fn handle_show(session: &mut Session, index: usize) -> ExpenseResult<()> {
    let tracker = session.tracker()?;
    let expense = tracker.get(index)?;
    println!("{}", expense);
    println!(
        "This amount is {}% of the budget for {}",
        tracker.budget_percentage(expense),
        expense.category()
    );
    Ok(())
}
