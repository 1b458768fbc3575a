//! Activity log CLI commands

use super::session::Session;
use crate::error::ExpenseResult;

/// Print journaled activity, most recent `limit` entries
pub fn handle_log(session: &Session, limit: usize) -> ExpenseResult<()> {
    let entries = session.journal().read_recent(limit)?;

    if entries.is_empty() {
        println!("No activity recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}

/// Print the resolved paths and budget thresholds
///
/// With `init`, the settings in effect are first written to the settings
/// file so they can be edited.
pub fn handle_config(session: &Session, init: bool) -> ExpenseResult<()> {
    let paths = session.paths();
    let budget = &session.settings().budget;

    if init {
        session.settings().save(paths)?;
        tracing::info!(path = %paths.settings_file().display(), "settings file written");
        println!("Wrote {}", paths.settings_file().display());
        println!();
    }

    println!("Data directory: {}", paths.base_dir().display());
    println!("Tracker file:   {}", paths.tracker_file().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Activity log:   {}", paths.activity_log().display());
    println!();
    println!("Budget references:");
    println!("  food:    {}", budget.references.food);
    println!("  clothes: {}", budget.references.clothes);
    println!("  fun:     {}", budget.references.fun);
    println!("Daily limit:   {}", budget.daily_limit);
    println!("Monthly limit: {}", budget.monthly_limit);
    Ok(())
}
