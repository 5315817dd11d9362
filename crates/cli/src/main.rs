//! Ladle CLI - Database bootstrap and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the schema and seed the default admin account
//! ladle migrate
//!
//! # Create an additional user
//! ladle admin create -u chef -p s3cret -r write
//! ```
//!
//! # Commands
//!
//! - `migrate` - Initialize the database schema (idempotent)
//! - `admin create` - Create application users

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ladle")]
#[command(author, version, about = "Ladle CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema and seed data
    Migrate,
    /// Manage application users
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new user
    Create {
        /// Login name
        #[arg(short, long)]
        username: String,

        /// Plaintext password (hashed before storage)
        #[arg(short, long)]
        password: String,

        /// Role (`admin`, `read_only`, `write`)
        #[arg(short, long, default_value = "write")]
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
        Commands::Admin { action } => match action {
            AdminAction::Create {
                username,
                password,
                role,
            } => {
                commands::admin::create_user(&username, &password, &role).await?;
            }
        },
    }
    Ok(())
}
