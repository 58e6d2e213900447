//! Homestock CLI Application
//!
//! Command-line front end for the home inventory store.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use homestock_core::StoreBuilder;
use log::{info, warn};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        command,
    } = Args::parse();

    let store = StoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize inventory store")?;

    // `init` seeds on its own and reports what it inserted
    if !matches!(command, Some(Init)) {
        if let Err(e) = store.seed_defaults().await {
            warn!("Could not insert default categories and locations: {e}");
        }
    }

    info!("Homestock started");

    let cli = Cli::new(store, TerminalRenderer::new(!no_color), json);

    match command {
        Some(Item { command }) => cli.handle_item_command(command).await,
        Some(Category { command }) => cli.handle_category_command(command).await,
        Some(Location { command }) => cli.handle_location_command(command).await,
        Some(Init) => cli.init().await,
        None => cli.list_items().await,
    }
}
