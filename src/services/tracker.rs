//! Expense tracker
//!
//! Holds the ordered list of expenses and derives daily and monthly
//! reporting figures from it. Every query walks the list directly, so the
//! results always reflect the current records.

use chrono::{Datelike, NaiveDate};

use crate::audit::{ActivityLog, EXPENSE_ADDED};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{BudgetConfig, Category, Expense};

/// Label returned when a month has nothing to rank
pub const NO_EXPENSES_LABEL: &str = "No expenses this month";

/// Ordered collection of expenses with reporting queries
///
/// Insertion order is preserved and is the order used for iteration and
/// persistence. Expenses can only be appended.
#[derive(Debug, Clone)]
pub struct ExpenseTracker {
    expenses: Vec<Expense>,
    budget: BudgetConfig,
    log: ActivityLog,
}

impl Default for ExpenseTracker {
    fn default() -> Self {
        Self::new(BudgetConfig::default(), ActivityLog::new())
    }
}

impl ExpenseTracker {
    /// Create an empty tracker using the given thresholds and activity log
    pub fn new(budget: BudgetConfig, log: ActivityLog) -> Self {
        Self {
            expenses: Vec::new(),
            budget,
            log,
        }
    }

    /// Append an expense
    pub fn add(&mut self, expense: Expense) {
        tracing::debug!(
            amount = expense.amount(),
            category = expense.category(),
            date = %expense.date(),
            "expense added"
        );
        self.expenses.push(expense);
        self.log.record(EXPENSE_ADDED);
    }

    /// Total spent on exactly this date
    pub fn daily_total(&self, date: NaiveDate) -> i64 {
        sum_amounts(self.expenses.iter().filter(|e| e.date() == date))
    }

    /// Total spent in a calendar month (1-12), across every year
    pub fn monthly_total(&self, month: u32) -> i64 {
        sum_amounts(self.in_month(month))
    }

    /// Average expense amount in a month, truncated; 0 for an empty month
    pub fn monthly_average(&self, month: u32) -> i64 {
        let count = self.in_month(month).count() as i64;
        if count == 0 {
            return 0;
        }
        self.monthly_total(month) / count
    }

    /// The date with the largest daily total in a month
    ///
    /// Dates are considered in insertion order and a later date only wins
    /// with a strictly larger total. Days must total more than zero.
    pub fn highest_spending_day(&self, month: u32) -> Option<NaiveDate> {
        let mut best: Option<NaiveDate> = None;
        let mut best_total = 0;

        for expense in self.in_month(month) {
            let total = self.daily_total(expense.date());
            if total > best_total {
                best_total = total;
                best = Some(expense.date());
            }
        }

        best
    }

    /// The bucket with the largest total in a month
    ///
    /// Ties resolve in `Category::PRIORITY` order. Returns `None` when the
    /// largest bucket total is zero.
    pub fn most_spent_category(&self, month: u32) -> Option<Category> {
        let mut totals = [0i64; 4];
        for expense in self.in_month(month) {
            let bucket = &mut totals[expense.classification().index()];
            *bucket = bucket.saturating_add(expense.amount());
        }

        let max = totals.iter().copied().max().unwrap_or(0);
        if max == 0 {
            return None;
        }

        Category::PRIORITY
            .into_iter()
            .find(|category| totals[category.index()] == max)
    }

    /// `most_spent_category` rendered as its display label
    pub fn most_spent_category_label(&self, month: u32) -> &'static str {
        self.most_spent_category(month)
            .map_or(NO_EXPENSES_LABEL, |category| category.label())
    }

    /// Check if a day's total is below the daily limit
    pub fn below_daily_limit(&self, date: NaiveDate) -> bool {
        self.daily_total(date) < self.budget.daily_limit
    }

    /// Check if a month's total is below the monthly limit
    pub fn below_monthly_limit(&self, month: u32) -> bool {
        self.monthly_total(month) < self.budget.monthly_limit
    }

    /// Budget percentage of an expense under this tracker's thresholds
    pub fn budget_percentage(&self, expense: &Expense) -> i64 {
        expense.budget_percentage(&self.budget)
    }

    /// Number of recorded expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check if no expenses have been recorded
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Get the expense at an index
    pub fn get(&self, index: usize) -> ExpenseResult<&Expense> {
        self.expenses
            .get(index)
            .ok_or(ExpenseError::IndexOutOfRange {
                index,
                len: self.expenses.len(),
            })
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The thresholds this tracker reports against
    pub fn budget(&self) -> &BudgetConfig {
        &self.budget
    }

    /// The activity log this tracker records into
    pub fn activity_log(&self) -> &ActivityLog {
        &self.log
    }

    fn in_month(&self, month: u32) -> impl Iterator<Item = &Expense> {
        self.expenses.iter().filter(move |e| e.date().month() == month)
    }
}

/// Sum of amounts, saturating at the `i64` bounds
fn sum_amounts<'a>(expenses: impl Iterator<Item = &'a Expense>) -> i64 {
    expenses.fold(0i64, |acc, e| acc.saturating_add(e.amount()))
}
