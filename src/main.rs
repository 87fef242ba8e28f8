mod client;
mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::client::Client;

#[derive(Parser)]
#[command(name = "haru")]
#[command(about = "Browse and manage your haru calendar from the terminal")]
struct Cli {
    /// Base URL of haru-server
    #[arg(long, default_value = "http://127.0.0.1:4080")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month view
    Month(commands::month::MonthArgs),
    /// Show the week view
    Week(commands::week::WeekArgs),
    /// Create a new event
    New(commands::new::NewArgs),
    /// Edit an existing event
    Edit(commands::edit::EditArgs),
    /// Delete an event
    Rm {
        /// Event id
        id: String,
    },
    /// Poll for due notifications and print alerts
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = Client::new(cli.server);

    match cli.command {
        Commands::Month(args) => commands::month::run(&client, args).await,
        Commands::Week(args) => commands::week::run(&client, args).await,
        Commands::New(args) => commands::new::run(&client, args).await,
        Commands::Edit(args) => commands::edit::run(&client, args).await,
        Commands::Rm { id } => commands::rm::run(&client, &id).await,
        Commands::Watch => commands::watch::run(&client).await,
    }
}
