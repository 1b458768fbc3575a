//! Business logic layer
//!
//! The expense tracker owns the recorded expenses and answers every
//! reporting query the front ends display.

pub mod tracker;

pub use tracker::{ExpenseTracker, NO_EXPENSES_LABEL};
