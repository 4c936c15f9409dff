//! Remedia CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! remedia migrate
//!
//! # Promote a user after first login
//! remedia user set-role -e admin@example.com -r admin
//!
//! # Seed the catalog with sample listings
//! remedia seed -s seller@example.com
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `user set-role` - Change a user's role
//! - `seed` - Seed the catalog with sample listings

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "remedia")]
#[command(author, version, about = "Remedia CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage marketplace users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Seed the catalog with sample listings
    Seed {
        /// Seller email to own the seeded listings
        #[arg(short, long)]
        seller: String,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Change a user's role
    SetRole {
        /// User email address
        #[arg(short, long)]
        email: String,

        /// New role (`buyer`, `seller`, `admin`)
        #[arg(short, long)]
        role: String,
    },
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
        Commands::Migrate => commands::migrate::run().await?,
        Commands::User { action } => match action {
            UserAction::SetRole { email, role } => {
                commands::user::set_role(&email, &role).await?;
            }
        },
        Commands::Seed { seller } => commands::seed::catalog(&seller).await?,
    }
    Ok(())
}
