//! Reports module for the expense tracker
//!
//! Bundles tracker queries into the daily and monthly views the front end
//! renders.

pub mod daily;
pub mod monthly;

pub use daily::DailyReport;
pub use monthly::{month_name, MonthlySummary};
