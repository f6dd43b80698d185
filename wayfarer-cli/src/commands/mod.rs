//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod travel;

pub use travel::TravelArgs;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Submit a travel request and print its id
    Submit {
        #[command(flatten)]
        request: TravelArgs,
    },
    /// Check the status of a travel request
    Status {
        /// Request id returned by submit
        id: uuid::Uuid,
    },
    /// Fetch the itinerary of a completed travel request
    Result {
        /// Request id returned by submit
        id: uuid::Uuid,
    },
    /// Submit a travel request and wait for the itinerary
    Plan {
        #[command(flatten)]
        request: TravelArgs,

        /// Maximum polling attempts before giving up
        #[arg(long, default_value_t = 30)]
        max_attempts: u32,

        /// Seconds between polls
        #[arg(long, default_value_t = 2)]
        interval: u64,
    },
}

/// Handle top-level commands
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Submit { request } => travel::submit(config, request).await,
        Commands::Status { id } => travel::status(config, id).await,
        Commands::Result { id } => travel::result(config, id).await,
        Commands::Plan {
            request,
            max_attempts,
            interval,
        } => travel::plan(config, request, max_attempts, interval).await,
    }
}
