use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CategoryCommands, ItemCommands, LocationCommands};

/// Keep track of what you own and where it is
///
/// Homestock records household items with their quantity, category,
/// location and purchase details, and lets you browse, search, edit and
/// remove them. Running without a subcommand lists the whole inventory.
#[derive(Parser)]
#[command(version, about, name = "homestock")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/homestock/homestock.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Homestock CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage inventory items
    #[command(alias = "i")]
    Item {
        #[command(subcommand)]
        command: ItemCommands,
    },
    /// Manage categories
    #[command(alias = "c")]
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// Manage locations
    #[command(alias = "l")]
    Location {
        #[command(subcommand)]
        command: LocationCommands,
    },
    /// Create the database and insert the default categories and locations
    Init,
}
