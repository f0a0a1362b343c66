//! Jollibee CLI - Ordering backend and local store tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed the local store with demo accounts and the default menu
//! jb-cli seed
//!
//! # Show what the local store holds
//! jb-cli store show menu
//!
//! # Talk to the backend (needs JOLLIBEE_API_BASE_URL)
//! jb-cli menu list
//! jb-cli customer login -e customer@jollibee.com -p pass123
//! jb-cli orders status 42 preparing --token "$STAFF_TOKEN"
//! ```
//!
//! Results are printed to stdout as pretty JSON; logs go to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use jollibee_core::{Email, OrderId, Price, StaffRole};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "jb-cli")]
#[command(author, version, about = "Jollibee ordering client tools")]
struct Cli {
    /// Local store file (overrides `JOLLIBEE_STORE_PATH`)
    #[arg(long, global = true)]
    store_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write demo data into the local store where missing
    Seed,
    /// Inspect the local store
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
    /// Menu endpoints
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },
    /// Customer account endpoints
    Customer {
        #[command(subcommand)]
        action: CustomerAction,
    },
    /// Staff account endpoints
    Staff {
        #[command(subcommand)]
        action: StaffAction,
    },
    /// Order endpoints
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand)]
enum StoreAction {
    /// Print one seeded record as JSON
    Show {
        #[arg(value_enum)]
        record: Record,
    },
}

/// Records kept in the local store.
#[derive(Clone, Copy, ValueEnum)]
enum Record {
    Customers,
    Staff,
    Menu,
}

#[derive(Subcommand)]
enum MenuAction {
    /// Fetch the menu
    List,
    /// Add a menu item (admin token)
    Create {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        price: Price,
        /// Image URL
        #[arg(short, long)]
        img: String,
        #[arg(long, env = "JOLLIBEE_TOKEN")]
        token: String,
    },
}

#[derive(Subcommand)]
enum CustomerAction {
    /// Register a customer account
    Register {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: Email,
        #[arg(long)]
        phone: String,
        #[arg(short, long, env = "JOLLIBEE_PASSWORD")]
        password: String,
    },
    /// Log in as a customer
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "JOLLIBEE_PASSWORD")]
        password: String,
    },
}

#[derive(Subcommand)]
enum StaffAction {
    /// Log in as staff or admin
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "JOLLIBEE_PASSWORD")]
        password: String,
        /// `staff` or `admin`
        #[arg(short, long, default_value = "staff")]
        role: StaffRole,
    },
    /// Create a staff account (admin token)
    Create {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
        /// `staff` or `admin`
        #[arg(short, long, default_value = "staff")]
        role: StaffRole,
        #[arg(short, long)]
        name: String,
        #[arg(long, env = "JOLLIBEE_TOKEN")]
        token: String,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// Place an order from a JSON file (customer token)
    Create {
        #[arg(short, long)]
        file: PathBuf,
        #[arg(long, env = "JOLLIBEE_TOKEN")]
        token: String,
    },
    /// List the orders of the logged-in customer (customer token)
    Mine {
        #[arg(long, env = "JOLLIBEE_TOKEN")]
        token: String,
    },
    /// List every order (staff token)
    All {
        #[arg(long, env = "JOLLIBEE_TOKEN")]
        token: String,
    },
    /// Change an order's status (staff token)
    Status {
        id: OrderId,
        status: String,
        #[arg(long, env = "JOLLIBEE_TOKEN")]
        token: String,
    },
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "jollibee_client=info,jb_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    let mut config = jollibee_client::ClientConfig::from_env()?;
    if let Some(path) = cli.store_path {
        config.store_path = path;
    }

    match cli.command {
        Commands::Seed => commands::seed::run(&config)?,
        Commands::Store { action } => match action {
            StoreAction::Show { record } => commands::seed::show(&config, record)?,
        },
        Commands::Menu { action } => match action {
            MenuAction::List => commands::menu::list(&config).await?,
            MenuAction::Create {
                name,
                price,
                img,
                token,
            } => commands::menu::create(&config, name, price, img, token).await?,
        },
        Commands::Customer { action } => match action {
            CustomerAction::Register {
                name,
                email,
                phone,
                password,
            } => commands::accounts::register_customer(&config, name, email, phone, password)
                .await?,
            CustomerAction::Login { email, password } => {
                commands::accounts::login_customer(&config, &email, password).await?;
            }
        },
        Commands::Staff { action } => match action {
            StaffAction::Login {
                username,
                password,
                role,
            } => commands::accounts::login_staff(&config, &username, password, role).await?,
            StaffAction::Create {
                username,
                password,
                role,
                name,
                token,
            } => {
                commands::accounts::create_staff_user(
                    &config, username, password, role, name, token,
                )
                .await?;
            }
        },
        Commands::Orders { action } => match action {
            OrdersAction::Create { file, token } => {
                commands::orders::create(&config, &file, token).await?;
            }
            OrdersAction::Mine { token } => commands::orders::mine(&config, token).await?,
            OrdersAction::All { token } => commands::orders::all(&config, token).await?,
            OrdersAction::Status { id, status, token } => {
                commands::orders::update_status(&config, id, status, token).await?;
            }
        },
    }
    Ok(())
}
