use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{HistoryCommands, PlanArgs};

/// Interactive meal plan wizard
///
/// Walks through delivery days, location and time window, then submits the
/// plan. Submitted plans are kept in a local SQLite database and can be
/// reviewed with the `history` commands.
#[derive(Parser)]
#[command(version, about, name = "mealplan")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/mealplan/mealplan.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// JSON file with the weekday, location and time slot lists
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Length of the "submitting" pause after each step, in milliseconds
    #[arg(long, global = true, default_value_t = 400)]
    pub submit_delay_ms: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command the wizard starts.
#[derive(Subcommand)]
pub enum Commands {
    /// Plan meals interactively
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Review submitted plans
    #[command(alias = "h")]
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Show the available days, locations and time slots
    Catalog,
}
