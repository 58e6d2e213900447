//! Command definitions and their handlers.
//!
//! Each subcommand has a clap `Args` wrapper that converts into the core
//! parameter type, so the core crate never sees clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Store → Markdown / JSON
//! ```
//!
//! IDs are accepted as text and parsed by the core, which reports bad input
//! as a validation error on field `id` instead of a clap usage error.

use std::fmt::Display;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use homestock_core::{params::*, InventoryError, Store, StoreStatus};
use serde::Serialize;

use crate::renderer::TerminalRenderer;

// ============================================================================
// Item commands
// ============================================================================

/// Add a new item
///
/// Values are taken as typed: an invalid quantity falls back to 1 and an
/// unparseable price is left empty.
#[derive(Args)]
pub struct AddItemArgs {
    /// Name of the item
    pub name: String,
    #[arg(
        short,
        long,
        allow_hyphen_values = true,
        help = "How many you have (defaults to 1)"
    )]
    pub quantity: Option<String>,
    #[arg(short, long, help = "ID of the category (see `category list`)")]
    pub category: Option<u64>,
    #[arg(short, long, help = "ID of the location (see `location list`)")]
    pub location: Option<u64>,
    #[arg(short, long, help = "Free-form description")]
    pub description: Option<String>,
    #[arg(long, help = "Purchase date as YYYY-MM-DD")]
    pub purchase_date: Option<String>,
    #[arg(
        short,
        long,
        allow_hyphen_values = true,
        help = "Purchase price"
    )]
    pub price: Option<String>,
    #[arg(short, long, help = "Warranty expiry date as YYYY-MM-DD")]
    pub warranty: Option<String>,
    #[arg(short, long, help = "Serial number")]
    pub serial: Option<String>,
    #[arg(short, long, help = "Additional notes")]
    pub notes: Option<String>,
    #[arg(long, help = "URI of a photo of the item")]
    pub image: Option<String>,
}

impl From<AddItemArgs> for ItemDraft {
    fn from(val: AddItemArgs) -> Self {
        ItemDraft {
            name: val.name,
            quantity: val.quantity,
            category_id: val.category,
            location_id: val.location,
            description: val.description,
            purchase_date: val.purchase_date,
            purchase_price: val.price,
            warranty_expiry: val.warranty,
            serial_number: val.serial,
            notes: val.notes,
            image_uri: val.image,
        }
    }
}

/// Show details of a specific item
#[derive(Args)]
pub struct ShowItemArgs {
    #[arg(help = "Unique identifier of the item to show")]
    pub id: String,
}

impl TryFrom<ShowItemArgs> for Id {
    type Error = InventoryError;

    fn try_from(val: ShowItemArgs) -> Result<Self, Self::Error> {
        Id::parse(&val.id)
    }
}

/// Edit an item
///
/// Only the given fields change. Pass an empty string to clear a text or
/// date field.
#[derive(Args)]
pub struct EditItemArgs {
    #[arg(help = "Unique identifier of the item to edit")]
    pub id: String,
    #[arg(long, help = "New name")]
    pub name: Option<String>,
    #[arg(
        short,
        long,
        allow_hyphen_values = true,
        help = "New quantity"
    )]
    pub quantity: Option<String>,
    #[arg(
        short,
        long,
        conflicts_with = "clear_category",
        help = "New category ID"
    )]
    pub category: Option<u64>,
    #[arg(long, help = "Remove the category")]
    pub clear_category: bool,
    #[arg(
        short,
        long,
        conflicts_with = "clear_location",
        help = "New location ID"
    )]
    pub location: Option<u64>,
    #[arg(long, help = "Remove the location")]
    pub clear_location: bool,
    #[arg(short, long, help = "New description")]
    pub description: Option<String>,
    #[arg(long, help = "New purchase date as YYYY-MM-DD")]
    pub purchase_date: Option<String>,
    #[arg(
        short,
        long,
        allow_hyphen_values = true,
        help = "New purchase price"
    )]
    pub price: Option<String>,
    #[arg(short, long, help = "New warranty expiry date as YYYY-MM-DD")]
    pub warranty: Option<String>,
    #[arg(short, long, help = "New serial number")]
    pub serial: Option<String>,
    #[arg(short, long, help = "New notes")]
    pub notes: Option<String>,
    #[arg(long, help = "New image URI")]
    pub image: Option<String>,
}

impl TryFrom<EditItemArgs> for EditItem {
    type Error = InventoryError;

    fn try_from(val: EditItemArgs) -> Result<Self, Self::Error> {
        Ok(EditItem {
            id: parse_id(&val.id)?,
            name: val.name,
            quantity: val.quantity,
            category_id: val.category,
            clear_category: val.clear_category,
            location_id: val.location,
            clear_location: val.clear_location,
            description: val.description,
            purchase_date: val.purchase_date,
            purchase_price: val.price,
            warranty_expiry: val.warranty,
            serial_number: val.serial,
            notes: val.notes,
            image_uri: val.image,
        })
    }
}

/// Delete an item permanently
#[derive(Args)]
pub struct DeleteItemArgs {
    #[arg(help = "Unique identifier of the item to permanently delete")]
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl TryFrom<DeleteItemArgs> for DeleteItem {
    type Error = InventoryError;

    fn try_from(val: DeleteItemArgs) -> Result<Self, Self::Error> {
        Ok(DeleteItem {
            id: parse_id(&val.id)?,
            confirmed: val.confirm,
        })
    }
}

/// Search items by name or description
#[derive(Args)]
pub struct SearchItemsArgs {
    #[arg(help = "Case-insensitive text to look for")]
    pub term: String,
}

impl From<SearchItemsArgs> for SearchItems {
    fn from(val: SearchItemsArgs) -> Self {
        SearchItems { term: val.term }
    }
}

#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add a new item
    #[command(alias = "a")]
    Add(AddItemArgs),
    /// List all items
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific item
    #[command(alias = "s")]
    Show(ShowItemArgs),
    /// Edit an item
    #[command(alias = "e")]
    Edit(EditItemArgs),
    /// Delete an item permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteItemArgs),
    /// Search items by name or description
    #[command(alias = "f")]
    Search(SearchItemsArgs),
}

// ============================================================================
// Category and location commands
// ============================================================================

/// Add a category
#[derive(Args)]
pub struct AddCategoryArgs {
    /// Name of the category
    pub name: String,
    #[arg(short, long, help = "Icon name shown next to the category")]
    pub icon: Option<String>,
}

impl From<AddCategoryArgs> for CreateCategory {
    fn from(val: AddCategoryArgs) -> Self {
        CreateCategory {
            name: val.name,
            icon: val.icon,
        }
    }
}

/// Add a location
#[derive(Args)]
pub struct AddLocationArgs {
    /// Name of the location
    pub name: String,
    #[arg(short, long, help = "What the location is used for")]
    pub description: Option<String>,
}

impl From<AddLocationArgs> for CreateLocation {
    fn from(val: AddLocationArgs) -> Self {
        CreateLocation {
            name: val.name,
            description: val.description,
        }
    }
}

/// Delete a category or location by ID
#[derive(Args)]
pub struct DeleteByIdArgs {
    #[arg(help = "Unique identifier of the entry to delete")]
    pub id: String,
}

impl TryFrom<DeleteByIdArgs> for Id {
    type Error = InventoryError;

    fn try_from(val: DeleteByIdArgs) -> Result<Self, Self::Error> {
        Id::parse(&val.id)
    }
}

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    #[command(aliases = ["l", "ls"])]
    List,
    /// Add a category
    #[command(alias = "a")]
    Add(AddCategoryArgs),
    /// Delete a category; its items become uncategorized
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteByIdArgs),
}

#[derive(Subcommand)]
pub enum LocationCommands {
    /// List all locations
    #[command(aliases = ["l", "ls"])]
    List,
    /// Add a location
    #[command(alias = "a")]
    Add(AddLocationArgs),
    /// Delete a location; its items lose their location
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteByIdArgs),
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs commands against a store and prints the outcome.
pub struct Cli {
    store: Store,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(store: Store, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            store,
            renderer,
            json,
        }
    }

    /// Print `value` as JSON in `--json` mode, otherwise render `markdown`.
    fn emit<T: Serialize>(&self, value: &T, markdown: impl Display) -> Result<()> {
        if self.json {
            let out =
                serde_json::to_string_pretty(value).context("Failed to serialize output")?;
            println!("{out}");
            Ok(())
        } else {
            self.renderer.render(&markdown.to_string())
        }
    }

    pub async fn handle_item_command(&self, command: ItemCommands) -> Result<()> {
        match command {
            ItemCommands::Add(args) => {
                let result = self.store.add_item(args.into()).await?;
                self.emit(&result.resource, &result)
            }
            ItemCommands::List => self.list_items().await,
            ItemCommands::Show(args) => {
                let item = self.store.show_item(&args.try_into()?).await?;
                self.emit(&item, &item)
            }
            ItemCommands::Edit(args) => {
                let result = self.store.edit_item(&args.try_into()?).await?;
                self.emit(&result.resource, &result)
            }
            ItemCommands::Delete(args) => {
                let result = self.store.remove_item(&args.try_into()?).await?;
                self.emit(&result.resource, &result)
            }
            ItemCommands::Search(args) => {
                let items = self.store.find_items(&args.into()).await?;
                self.emit(&items.0, &items)
            }
        }
    }

    pub async fn handle_category_command(&self, command: CategoryCommands) -> Result<()> {
        match command {
            CategoryCommands::List => {
                let categories = self.store.categories().await?;
                self.emit(&categories.0, &categories)
            }
            CategoryCommands::Add(args) => {
                let result = self.store.add_category(&args.into()).await?;
                self.emit(&result.resource, &result)
            }
            CategoryCommands::Delete(args) => {
                let result = self.store.remove_category(&args.try_into()?).await?;
                self.emit(&result.resource, &result)
            }
        }
    }

    pub async fn handle_location_command(&self, command: LocationCommands) -> Result<()> {
        match command {
            LocationCommands::List => {
                let locations = self.store.locations().await?;
                self.emit(&locations.0, &locations)
            }
            LocationCommands::Add(args) => {
                let result = self.store.add_location(&args.into()).await?;
                self.emit(&result.resource, &result)
            }
            LocationCommands::Delete(args) => {
                let result = self.store.remove_location(&args.try_into()?).await?;
                self.emit(&result.resource, &result)
            }
        }
    }

    /// List every item, ordered by name.
    pub async fn list_items(&self) -> Result<()> {
        let items = self.store.find_items(&SearchItems::default()).await?;
        self.emit(&items.0, &items)
    }

    /// Create the schema if needed and insert any missing defaults.
    pub async fn init(&self) -> Result<()> {
        self.store
            .initialize()
            .await
            .context("Failed to initialize inventory store")?;
        let report = self
            .store
            .seed_defaults()
            .await
            .context("Failed to insert default data")?;

        let status = StoreStatus {
            path: self.store.database_path(),
            seeded: report,
        };
        self.emit(&report, status)
    }
}
