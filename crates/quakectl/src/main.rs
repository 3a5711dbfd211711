//! QuakeLens Control - terminal front-end for the advisory core
//!
//! The dispatcher's caller: owns the conversation session, renders
//! results, and shows a processing indicator while a dispatch call is
//! pending.

mod chat;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "quakectl")]
#[command(about = "QuakeLens tactical hub - hybrid first-aid advisory", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a single emergency query
    Ask {
        /// Free-text description of the emergency
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Interactive advisory session
    Chat,

    /// Print the offline protocol catalog
    Protocols,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Keep the transcript clean; failures on the fallback path are
    // recovered, not reported
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask { query } => chat::ask(&query.join(" ")).await,
        Commands::Chat => chat::run().await,
        Commands::Protocols => {
            chat::print_protocols();
            Ok(())
        }
    }
}
