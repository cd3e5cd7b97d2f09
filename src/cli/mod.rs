// CLI module - server entry point and terminal front end

pub mod presenter;
pub mod serve;
pub mod views;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::app_data::AppData;
use crate::config::AppSettings;
use crate::ui::ItemFormFields;

use views::{FieldOverrides, Frontend};

/// Item catalog server and terminal front end
#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Item catalog backend and CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// List items, optionally filtered
    List {
        /// Case-insensitive filter over name, description, category and price
        #[arg(long)]
        search: Option<String>,
    },

    /// Add a new item
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        price: String,
    },

    /// Edit an existing item; omitted fields keep their current value
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        price: Option<String>,
    },

    /// Delete an item
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Resolve a front-end route (/, /add, /edit/:id) and show its view
    Open { route: String },
}

/// Execute CLI command
///
/// `serve` connects to the database; every other command talks to the
/// server through the HTTP client at `settings.api_url`.
///
/// # Returns
/// * `Ok(())` - Command executed successfully
/// * `Err(...)` - Command execution failed
pub async fn execute_command(
    cli: Cli,
    settings: Arc<AppSettings>,
) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let app_data = AppData::init(settings).await?;
            serve::run_server(&app_data).await?;
            Ok(())
        }
        Commands::List { search } => {
            let frontend = Frontend::connect(&settings)?;
            let result = frontend.list(search.as_deref()).await;
            frontend.finish(result).await
        }
        Commands::Add {
            name,
            description,
            category,
            price,
        } => {
            let fields = ItemFormFields {
                name,
                description,
                category,
                price,
            };
            let frontend = Frontend::connect(&settings)?;
            let result = frontend.add(fields).await;
            frontend.finish(result).await
        }
        Commands::Edit {
            id,
            name,
            description,
            category,
            price,
        } => {
            let overrides = FieldOverrides {
                name,
                description,
                category,
                price,
            };
            let frontend = Frontend::connect(&settings)?;
            let result = frontend.edit(&id, overrides).await;
            frontend.finish(result).await
        }
        Commands::Delete { id, yes } => {
            let frontend = Frontend::connect(&settings)?;
            let result = frontend.delete(&id, yes).await;
            frontend.finish(result).await
        }
        Commands::Open { route } => {
            let frontend = Frontend::connect(&settings)?;
            let result = frontend.open(&route).await;
            frontend.finish(result).await
        }
    }
}
