//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::CURRENCY;
use crate::models::{BudgetConfig, Expense};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Budget")]
    budget: String,
}

/// Format the recorded expenses as a table, in insertion order
pub fn format_expense_table(expenses: &[Expense], budget: &BudgetConfig) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let rows = expenses.iter().enumerate().map(|(i, e)| ExpenseRow {
        index: i,
        date: e.date().format("%Y-%m-%d").to_string(),
        category: e.category().to_string(),
        amount: format!("{}{}", CURRENCY, e.amount()),
        budget: format!("{}%", e.budget_percentage(budget)),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format the confirmation shown after an expense is added
pub fn format_added_expense(expense: &Expense, budget: &BudgetConfig) -> String {
    format!(
        "This amount is {}% of the budget for {}\nExpense added successfully!\n",
        expense.budget_percentage(budget),
        expense.category()
    )
}
