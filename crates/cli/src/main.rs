//! ModernShop CLI - Catalog browsing and demo tools.
//!
//! # Usage
//!
//! ```bash
//! # List the sample catalog
//! ms-cli catalog list
//!
//! # Search within a category
//! ms-cli catalog list --search wireless --category Electronics
//!
//! # List the category names
//! ms-cli catalog categories
//!
//! # Run a scripted end-to-end shopping session
//! ms-cli demo --fast
//!
//! # Same session, paying cash on delivery
//! ms-cli demo --fast --payment cash
//! ```
//!
//! # Commands
//!
//! - `catalog list` - Print the (filtered) sample catalog
//! - `catalog categories` - Print the distinct categories
//! - `demo` - Browse, fill a cart, and check out

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ms-cli")]
#[command(author, version, about = "ModernShop CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the sample catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Run a scripted end-to-end shopping session
    Demo {
        /// Skip the simulated payment-processing delay
        #[arg(long)]
        fast: bool,

        /// Payment method (`cash`, `card`)
        #[arg(short, long, default_value = "card")]
        payment: String,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products, optionally filtered
    List {
        /// Case-insensitive search over name and description
        #[arg(short, long, default_value = "")]
        search: String,

        /// Exact category name (e.g. `Electronics`)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List the distinct category names
    Categories,
}

#[tokio::main]
async fn main() {
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
        Commands::Catalog { action } => match action {
            CatalogAction::List { search, category } => {
                commands::catalog::list(&search, category.as_deref());
            }
            CatalogAction::Categories => commands::catalog::categories(),
        },
        Commands::Demo { fast, payment } => commands::demo::run(fast, &payment).await?,
    }
    Ok(())
}
