//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the tracker and its reports.

pub mod activity;
pub mod expense;
pub mod report;
pub mod session;

pub use activity::{handle_config, handle_log};
pub use expense::{handle_add, handle_list, handle_show};
pub use report::{handle_daily, handle_monthly, handle_summary};
pub use session::Session;
