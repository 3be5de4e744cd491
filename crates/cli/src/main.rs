//! Sufficius CLI - Local cart management and dashboard export tools.
//!
//! # Usage
//!
//! ```bash
//! # Add an item to a user's local cart
//! sfc-cli cart --user u-1 add --id 10 --name "Moka Pot" --price 49.90 --available 5
//!
//! # Show the cart and its total
//! sfc-cli cart --user u-1 list
//! sfc-cli cart --user u-1 total
//!
//! # Remove an item (confirms with the backend first)
//! sfc-cli cart --user u-1 remove 10
//!
//! # Export a dashboard aggregate snapshot to CSV
//! sfc-cli export --input aggregate.json --scope full --period-label mes
//! ```
//!
//! # Commands
//!
//! - `cart` - Operate on the local cart-storage slot as a given user
//! - `export` - Encode a dashboard aggregate into a CSV/JSON artifact

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use sufficius_core::{CartLineItem, Price, ProductId};
use sufficius_export::ExportScope;

mod commands;

use commands::export::OutputFormat;

#[derive(Parser)]
#[command(name = "sfc-cli")]
#[command(author, version, about = "Sufficius Commerce CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Operate on the local cart as a given user
    Cart {
        /// User whose cart to operate on
        #[arg(short, long)]
        user: String,

        /// Path to the cart storage slot
        #[arg(long, default_value = "cart-storage.json")]
        cart_file: PathBuf,

        #[command(subcommand)]
        action: CartAction,
    },
    /// Encode a dashboard aggregate snapshot into an export artifact
    Export {
        /// Path to the aggregate snapshot (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Export scope (orders, products, summary, full)
        #[arg(short, long, default_value = "full")]
        scope: ExportScope,

        /// Period label embedded in the artifact and its filename
        #[arg(short, long)]
        period_label: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        /// Directory the artifact is written into
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add an item (merges with an existing line of the same id)
    Add {
        /// Product identifier
        #[arg(long)]
        id: i64,

        /// Product display name
        #[arg(long)]
        name: String,

        /// Unit price (e.g., 49.90)
        #[arg(long)]
        price: Decimal,

        /// Stock ceiling from the catalog
        #[arg(long)]
        available: u32,

        /// Quantity to add
        #[arg(long, default_value_t = 1)]
        quantity: u32,

        /// Optional product description
        #[arg(long)]
        description: Option<String>,

        /// Optional product category
        #[arg(long)]
        category: Option<String>,
    },
    /// Remove an item (confirms with the backend first)
    Remove {
        /// Product identifier
        id: i64,
    },
    /// Set an item's quantity (clamped to the stock ceiling)
    Update {
        /// Product identifier
        id: i64,

        /// New quantity (zero floors to one)
        quantity: u32,
    },
    /// List the cart's lines
    List,
    /// Show the cart total and item count
    Total,
    /// Clear the cart (confirms with the backend first)
    Clear,
    /// Push the local lines to the backend reconciliation endpoint
    Sync,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Cart {
            user,
            cart_file,
            action,
        } => match action {
            CartAction::Add {
                id,
                name,
                price,
                available,
                quantity,
                description,
                category,
            } => {
                let mut item = CartLineItem::new(
                    ProductId::new(id),
                    name,
                    Price::new(price)?,
                    available,
                    quantity,
                )?;
                if let Some(description) = description {
                    item = item.with_description(description);
                }
                if let Some(category) = category {
                    item = item.with_category(category);
                }
                commands::cart::add(&cart_file, &user, item)?;
            }
            CartAction::Remove { id } => {
                commands::cart::remove(&cart_file, &user, ProductId::new(id)).await?;
            }
            CartAction::Update { id, quantity } => {
                commands::cart::update(&cart_file, &user, ProductId::new(id), quantity)?;
            }
            CartAction::List => commands::cart::list(&cart_file, &user)?,
            CartAction::Total => commands::cart::total(&cart_file, &user)?,
            CartAction::Clear => commands::cart::clear(&cart_file, &user).await?,
            CartAction::Sync => commands::cart::sync(&cart_file, &user).await?,
        },
        Commands::Export {
            input,
            scope,
            period_label,
            format,
            out,
        } => {
            commands::export::run(&input, &out, &period_label, scope, format)?;
        }
    }
    Ok(())
}
