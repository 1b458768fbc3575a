//! Expense Tracker - personal expense recording and budget reports
//!
//! This library records discrete spending events and derives simple
//! reports from them: daily and monthly totals, budget percentages, the
//! highest-spending day, and the dominant category of a month. State is
//! persisted as a single JSON document.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Expense records, category classification, budget thresholds
//! - `services`: The expense tracker and its reporting queries
//! - `reports`: Daily and monthly report views
//! - `storage`: JSON document codec and file persistence
//! - `audit`: Activity log of add, save, and load operations
//! - `config`: Data directory and settings management
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `expense` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::audit::ActivityLog;
//! use expense_tracker::models::{BudgetConfig, Expense};
//! use expense_tracker::services::ExpenseTracker;
//! use expense_tracker::storage::ExpenseStore;
//!
//! let log = ActivityLog::new();
//! let mut tracker = ExpenseTracker::new(BudgetConfig::default(), log.clone());
//! tracker.add(Expense::new(15, "food", date));
//!
//! let store = ExpenseStore::new("./data/tracker.json".into());
//! store.save(&tracker)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
