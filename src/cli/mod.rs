//! Command-line interface for timescope.
//!
//! Provides commands for resolving dates into historical events, fetching
//! long-form event detail, moon phases, timeline milestones, and era
//! comparison.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::config;
use crate::domain::date::format_long;
use crate::domain::resolution::Resolution;
use crate::moon;
use crate::resolver::Resolver;
use crate::timeline;

/// timescope - Date-keyed historical event resolver
#[derive(Parser, Debug)]
#[command(name = "timescope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a date into its historical events
    Resolve {
        /// Date to resolve (YYYY-MM-DD)
        date: String,

        /// Use the alternate timeline
        #[arg(long)]
        alt: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show long-form content for one resolved event
    Detail {
        /// Date the event was resolved for (YYYY-MM-DD)
        date: String,

        /// Event id from a previous resolve
        event_id: String,

        /// Use the alternate timeline
        #[arg(long)]
        alt: bool,
    },

    /// Show the moon phase for a date
    Moon {
        /// Date to inspect (YYYY-MM-DD)
        date: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List timeline milestones
    Timeline {
        /// Use the alternate timeline
        #[arg(long)]
        alt: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Compare two years side by side
    Compare {
        /// Left year
        left: i32,

        /// Right year
        right: i32,

        /// Use the alternate timeline
        #[arg(long)]
        alt: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Resolve { date, alt, json } => resolve_date(&date, alt, json).await,
            Commands::Detail {
                date,
                event_id,
                alt,
            } => show_detail(&date, &event_id, alt).await,
            Commands::Moon { date, json } => show_moon(&date, json),
            Commands::Timeline { alt, json } => show_timeline(alt, json),
            Commands::Compare {
                left,
                right,
                alt,
                json,
            } => compare_years(left, right, alt, json),
            Commands::Config => show_config(),
        }
    }
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    input
        .parse()
        .with_context(|| format!("Invalid date (expected YYYY-MM-DD): {}", input))
}

fn make_resolver() -> Result<Resolver> {
    Resolver::from_config(config::config()?)
}

/// Resolve a date and print its events
async fn resolve_date(date_str: &str, alt: bool, json: bool) -> Result<()> {
    let date = parse_date(date_str)?;
    let resolver = make_resolver()?;
    let resolution = resolver.resolve(date, alt).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
        return Ok(());
    }

    print_resolution(&resolution);
    Ok(())
}

fn print_resolution(resolution: &Resolution) {
    println!("Date: {}", format_long(resolution.date));
    println!("Tags: {}", resolution.context_tags.join(" | "));
    println!();

    if resolution.events.is_empty() {
        println!("No events found");
        return;
    }

    for (idx, event) in resolution.events.iter().enumerate() {
        let country = event.country.as_deref().unwrap_or("-");
        println!(
            "{}. [{}] {} ({}, {})",
            idx + 1,
            event.year,
            event.title,
            event.category,
            country
        );
        println!("   {}", event.description);
        if let Some(source) = &event.source {
            println!("   Source: {}", source);
        }
        println!("   id: {}", event.id);
        println!();
    }
}

/// Resolve a date, pick one event, and print its long-form content
async fn show_detail(date_str: &str, event_id: &str, alt: bool) -> Result<()> {
    let date = parse_date(date_str)?;
    let resolver = make_resolver()?;
    let resolution = resolver.resolve(date, alt).await;

    let event = resolution
        .events
        .iter()
        .find(|e| e.id == event_id)
        .with_context(|| format!("No event with id '{}' on {}", event_id, date_str))?;

    println!("{}", event.title);
    println!("{}", "-".repeat(event.title.len()));
    println!("{}", resolver.event_detail(event).await);

    if let Some(citation) = &event.citation {
        println!("\nCitation: {}", citation);
    }
    if let Some(url) = &event.verification_url {
        println!("Verify: {}", url);
    }

    Ok(())
}

/// Print the moon phase for a date
fn show_moon(date_str: &str, json: bool) -> Result<()> {
    let date = parse_date(date_str)?;
    let phase = moon::moon_phase(date);

    if json {
        println!("{}", serde_json::to_string_pretty(&phase)?);
        return Ok(());
    }

    println!("Date: {}", format_long(date));
    println!("Phase: {} ({}% illuminated)", phase.phase, phase.illumination);
    Ok(())
}

/// Print timeline milestones
fn show_timeline(alt: bool, json: bool) -> Result<()> {
    let milestones = timeline::milestones(alt);

    if json {
        println!("{}", serde_json::to_string_pretty(&milestones)?);
        return Ok(());
    }

    println!("{:<6} {:<28} {:<16}", "YEAR", "MILESTONE", "CATEGORY");
    println!("{}", "-".repeat(70));
    for milestone in milestones {
        println!(
            "{:<6} {:<28} {:<16}",
            milestone.year, milestone.title, milestone.category
        );
        println!("       {}", milestone.description);
    }

    Ok(())
}

/// Print era snapshots for two years
fn compare_years(left: i32, right: i32, alt: bool, json: bool) -> Result<()> {
    let left_snapshot = timeline::era_snapshot(left, alt);
    let right_snapshot = timeline::era_snapshot(right, alt);

    if json {
        let pair = serde_json::json!({
            "left": left_snapshot,
            "right": right_snapshot,
        });
        println!("{}", serde_json::to_string_pretty(&pair)?);
        return Ok(());
    }

    for snapshot in [&left_snapshot, &right_snapshot] {
        println!("== {} ==", snapshot.year);
        println!("Population: {}", snapshot.population);
        println!("Technology: {}", snapshot.technology.join(", "));
        println!("Culture:    {}", snapshot.culture.join(", "));
        println!("Economy:    {}", snapshot.economy);
        println!();
    }

    Ok(())
}

/// Show the resolved configuration
fn show_config() -> Result<()> {
    let config = config::config()?;

    println!("Almanac URL:  {}", config.almanac_url);
    println!("Summary URL:  {}", config.summary_url);
    println!("Relay URL:    {}", config.relay_url);
    println!("User-Agent:   {}", config.user_agent);
    println!("Timeout:      {}s", config.timeout_secs);
    match &config.config_file {
        Some(path) => println!("Config file:  {}", path.display()),
        None => println!("Config file:  (none, using defaults)"),
    }

    Ok(())
}
