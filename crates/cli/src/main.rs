//! Backoffice CLI - the dashboard from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add a user
//! bo-cli users add -n Ann -e a@b.com -r admin
//!
//! # Female customers whose name or email contains "an", second page
//! bo-cli customers list -q an -g female -p 1
//!
//! # Delete a product without prompting
//! bo-cli --yes products delete 1735689600000
//!
//! # Counters and today's activity
//! bo-cli summary
//! bo-cli logs --date 2025-06-01
//! ```
//!
//! # Commands
//!
//! - `users|products|customers add|update|edit|delete|list` - Manage records
//! - `summary` - Record counters (`--recount` rebuilds them from the lists)
//! - `logs` - Activity log
//!
//! Results are printed to stdout as JSON. Logs go to stderr and are
//! configured with `RUST_LOG` and `BACKOFFICE_LOG_FORMAT`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::rc::Rc;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use backoffice_admin::store::{FileStore, KeyValueStore};
use backoffice_admin::{BackofficeConfig, Dashboard, Dialog, LogFormat, SystemClock};

mod commands;
mod dialog;

use commands::customers::CustomerAction;
use commands::products::ProductAction;
use commands::users::UserAction;
use dialog::TerminalDialog;

#[derive(Parser)]
#[command(name = "bo-cli")]
#[command(author, version, about = "Backoffice dashboard CLI")]
struct Cli {
    /// Store file (overrides `BACKOFFICE_STORE_PATH`)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Rows per page (overrides `BACKOFFICE_PAGE_SIZE`)
    #[arg(long, global = true)]
    page_size: Option<usize>,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage users
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Manage products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Manage customers
    Customers {
        #[command(subcommand)]
        action: CustomerAction,
    },
    /// Show record counters
    Summary {
        /// Rebuild the counters from the stored lists
        #[arg(long)]
        recount: bool,
    },
    /// Show the activity log
    Logs {
        /// Only entries from this day (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = BackofficeConfig::from_env();

    init_tracing(
        config
            .as_ref()
            .map_or(LogFormat::Text, |config| config.log_format),
    );

    let result: Result<(), Box<dyn std::error::Error>> = config
        .map_err(Into::into)
        .and_then(|config| run(cli, config));

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Install the stderr subscriber.
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "backoffice_admin=info,backoffice_cli=info".into());

    let json = format == LogFormat::Json;
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn run(cli: Cli, mut config: BackofficeConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = cli.store {
        config.store_path = path;
    }
    if let Some(page_size) = cli.page_size {
        config = config.with_page_size(page_size)?;
    }

    tracing::debug!(store = %config.store_path.display(), "Opening store");
    let store: Rc<dyn KeyValueStore> = Rc::new(FileStore::open(config.store_path.clone())?);
    let dialog: Rc<dyn Dialog> = Rc::new(TerminalDialog::new(cli.yes));
    let mut dashboard = Dashboard::open(store.clone(), Rc::new(SystemClock), dialog, &config)?;

    match cli.command {
        Commands::Users { action } => commands::users::run(dashboard.users_mut(), action)?,
        Commands::Products { action } => {
            commands::products::run(dashboard.products_mut(), action)?;
        }
        Commands::Customers { action } => {
            commands::customers::run(dashboard.customers_mut(), action)?;
        }
        Commands::Summary { recount } => {
            commands::activity::summary(&dashboard, store.as_ref(), recount)?;
        }
        Commands::Logs { date } => commands::activity::logs(&dashboard, date)?,
    }
    Ok(())
}
