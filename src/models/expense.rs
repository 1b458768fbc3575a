//! Expense model
//!
//! A single spending event: an integer amount, a free-form category label,
//! and the calendar date it happened on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::budget::BudgetConfig;
use super::category::Category;

/// A recorded expense
///
/// Expenses are immutable once created. Negative amounts and unknown
/// category labels are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    amount: i64,
    category: String,
    date: NaiveDate,
}

impl Expense {
    /// Create a new expense
    pub fn new(amount: i64, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            category: category.into(),
            date,
        }
    }

    /// The amount spent, in whole currency units
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// The category label as entered
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The date of the expense
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The budget bucket this expense falls into
    pub fn classification(&self) -> Category {
        Category::classify(&self.category)
    }

    /// Percentage of the category's reference amount this expense uses
    ///
    /// Rounds half up. Categories without a reference amount yield 0.
    pub fn budget_percentage(&self, budget: &BudgetConfig) -> i64 {
        match budget.reference_for(self.classification()) {
            Some(reference) if reference > 0 => {
                let reference = i128::from(reference);
                let scaled = i128::from(self.amount) * 200 + reference;
                let rounded = scaled.div_euclid(2 * reference);
                rounded.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
            }
            _ => 0,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Amount: ${}, Category: {}, Date: {}",
            self.amount,
            self.category,
            self.date.format("%Y-%m-%d")
        )
    }
}
