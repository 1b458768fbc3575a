use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{self, Session};
use expense_tracker::config::TrackerPaths;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Record expenses and check them against daily and monthly budgets"
)]
struct Cli {
    /// Directory holding tracker.json, config.json and activity.log
    #[arg(long, global = true, env = "EXPENSE_TRACKER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Print this session's activity log before exiting
    #[arg(long, global = true)]
    show_log: bool,

    /// Increase diagnostic output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    #[command(alias = "a")]
    Add {
        /// Amount in whole currency units
        #[arg(allow_negative_numbers = true)]
        amount: i64,
        /// Category (food, clothes, fun, or anything else)
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// List all recorded expenses
    #[command(alias = "v")]
    List,

    /// Show one expense by its list index
    Show {
        /// Zero-based index from `list`
        index: usize,
    },

    /// Show the total for a date
    #[command(alias = "d")]
    Daily {
        /// Date (YYYY-MM-DD)
        date: NaiveDate,
    },

    /// Show the total for a month
    #[command(alias = "mt")]
    Monthly {
        /// Month number (1-12)
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
    },

    /// Show the monthly summary report
    #[command(alias = "ms")]
    Summary {
        /// Month number (1-12)
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
    },

    /// Show journaled activity from previous sessions
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Write the settings in effect to config.json
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_logger(match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    });

    let paths = match args.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new(),
    };

    let mut session = Session::open(paths)?;

    match args.command {
        Commands::Add {
            amount,
            category,
            date,
        } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            cli::handle_add(&mut session, amount, category, date)?;
        }
        Commands::List => cli::handle_list(&mut session)?,
        Commands::Show { index } => cli::handle_show(&mut session, index)?,
        Commands::Daily { date } => cli::handle_daily(&mut session, date)?,
        Commands::Monthly { month } => cli::handle_monthly(&mut session, month)?,
        Commands::Summary { month } => cli::handle_summary(&mut session, month)?,
        Commands::Log { limit } => cli::handle_log(&session, limit)?,
        Commands::Config { init } => cli::handle_config(&session, init)?,
    }

    let entries = session.finish()?;
    if args.show_log {
        println!();
        println!("Activity log:");
        for entry in entries {
            println!("{}", entry.format_human_readable());
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "{}={},expense_tracker={}",
            env!("CARGO_CRATE_NAME"),
            level,
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
