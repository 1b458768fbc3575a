//! Core data models for the expense tracker
//!
//! This module contains the expense record, its category classification,
//! and the budget thresholds reports are measured against.

pub mod budget;
pub mod category;
pub mod expense;

pub use budget::{BudgetConfig, CategoryReferences};
pub use category::Category;
pub use expense::Expense;
