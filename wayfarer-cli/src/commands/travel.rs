//! Travel command handlers
//!
//! Submission, status checks, result retrieval and the combined
//! submit-and-wait flow.

use anyhow::Result;
use clap::Args;
use colored::*;
use std::time::Duration;
use uuid::Uuid;

use wayfarer_client::{PlannerClient, PollConfig, poll_with_observer};
use wayfarer_core::domain::itinerary::ItineraryPoint;
use wayfarer_core::domain::job::JobStatus;
use wayfarer_core::domain::request::{TravelPreferences, TravelRequest};
use wayfarer_core::dto::travel::StatusSnapshot;

use crate::config::Config;

/// Travel request fields
#[derive(Args)]
pub struct TravelArgs {
    /// Destination (e.g. "Paris")
    pub location: String,

    /// Trip start date (e.g. 2025-06-01)
    #[arg(long)]
    pub from: String,

    /// Trip end date (e.g. 2025-06-02)
    #[arg(long)]
    pub to: String,

    /// Interest tags (repeatable)
    #[arg(long = "interest")]
    pub interests: Vec<String>,

    /// Travel style (e.g. relaxed, packed)
    #[arg(long, default_value = "")]
    pub style: String,

    /// Food preference (e.g. vegetarian)
    #[arg(long, default_value = "")]
    pub food: String,

    /// Budget tier (e.g. low, medium, high)
    #[arg(long, default_value = "")]
    pub budget: String,

    /// Transport mode (e.g. walking, transit)
    #[arg(long, default_value = "")]
    pub transport: String,

    /// Time-of-day preference (e.g. morning)
    #[arg(long, default_value = "")]
    pub time_of_day: String,

    /// Activity intensity (e.g. light, moderate, intense)
    #[arg(long, default_value = "")]
    pub intensity: String,

    /// Free-text custom preferences
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<TravelArgs> for TravelRequest {
    fn from(args: TravelArgs) -> Self {
        TravelRequest {
            location: args.location,
            date_from: args.from,
            date_to: args.to,
            preferences: TravelPreferences {
                travel_style: args.style,
                food_preference: args.food,
                budget: args.budget,
                transport_mode: args.transport,
                time_preference: args.time_of_day,
                activity_intensity: args.intensity,
                interests: args.interests,
                custom_preferences: args.notes,
            },
        }
    }
}

/// Submit a request and print its id
pub async fn submit(config: &Config, args: TravelArgs) -> Result<()> {
    let client = PlannerClient::new(&config.server_url);
    let receipt = client.submit_travel_request(&args.into()).await?;

    println!("{}", "Travel request submitted".green().bold());
    println!("  Request id: {}", receipt.request_id.to_string().cyan());
    println!("  Status:     {}", receipt.status);

    Ok(())
}

/// Check and display the status of a request
pub async fn status(config: &Config, id: Uuid) -> Result<()> {
    let client = PlannerClient::new(&config.server_url);
    let snapshot = client.travel_status(id).await?;

    print_snapshot(&snapshot);

    Ok(())
}

/// Fetch and display a completed itinerary
pub async fn result(config: &Config, id: Uuid) -> Result<()> {
    let client = PlannerClient::new(&config.server_url);
    let itinerary = client.travel_result(id).await?;

    print_itinerary(&itinerary);

    Ok(())
}

/// Submit, poll with live progress, and display the itinerary
pub async fn plan(
    config: &Config,
    args: TravelArgs,
    max_attempts: u32,
    interval_secs: u64,
) -> Result<()> {
    let client = PlannerClient::new(&config.server_url);
    let receipt = client.submit_travel_request(&args.into()).await?;

    println!(
        "{} {}",
        "Planning trip, request id:".bold(),
        receipt.request_id.to_string().cyan()
    );

    let poll_config = PollConfig {
        max_attempts,
        interval: Duration::from_secs(interval_secs),
    };

    let itinerary = poll_with_observer(&client, receipt.request_id, &poll_config, |snapshot| {
        let message = snapshot.message.as_deref().unwrap_or("");
        println!(
            "  {:>4.0}%  {}",
            snapshot.progress * 100.0,
            message.dimmed()
        );
    })
    .await?;

    println!();
    print_itinerary(&itinerary);

    Ok(())
}

fn print_snapshot(snapshot: &StatusSnapshot) {
    let status = match snapshot.status {
        JobStatus::Pending => "pending".yellow(),
        JobStatus::Completed => "completed".green(),
        JobStatus::Failed => "failed".red(),
    };

    println!("{}", format!("Request {}", snapshot.request_id).bold());
    println!("  Status:   {}", status);
    println!("  Progress: {:.0}%", snapshot.progress * 100.0);
    if let Some(message) = &snapshot.message {
        println!("  Message:  {}", message);
    }
    if let Some(error) = &snapshot.error {
        println!("  Error:    {}", error.red());
    }
}

fn print_itinerary(itinerary: &[ItineraryPoint]) {
    if itinerary.is_empty() {
        println!("{}", "Empty itinerary.".yellow());
        return;
    }

    println!("{}", format!("Itinerary ({} stops):", itinerary.len()).bold());

    let mut current_day = None;
    for point in itinerary {
        let day = point.time.date_naive();
        if current_day != Some(day) {
            println!();
            println!("{}", day.to_string().bold().underline());
            current_day = Some(day);
        }

        let time = point.time.format("%H:%M");
        let window = match &point.end_time {
            Some(end) => format!("{}-{}", time, end.format("%H:%M")),
            None => time.to_string(),
        };

        let kind = match point.kind.as_str() {
            "start" => point.kind.blue(),
            "attraction" => point.kind.magenta(),
            "food" => point.kind.green(),
            "accommodation" => point.kind.cyan(),
            _ => point.kind.normal(),
        };

        print!("  {}  [{}] {}", window, kind, point.location.bold());
        if let Some(rating) = point.rating {
            print!("  {}", format!("({:.1}★)", rating).yellow());
        }
        println!();
        println!("      {}", point.description.dimmed());
    }
}
