//! CLI administration tool for affiliate-tracker.
//!
//! Inspects recorded clicks and conversions and checks the database without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Totals across all affiliates
//! cargo run --bin admin -- stats
//!
//! # Clicks / conversions of one affiliate, newest first
//! cargo run --bin admin -- clicks A1
//! cargo run --bin admin -- conversions A1
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use affiliate_tracker::application::services::QueryService;
use affiliate_tracker::infrastructure::persistence::{PgClickRepository, PgConversionRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

type PgQueryService = QueryService<PgClickRepository, PgConversionRepository>;

/// CLI tool for inspecting affiliate-tracker data.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show click and conversion totals
    Stats,

    /// List an affiliate's clicks, newest first
    Clicks {
        /// Affiliate identifier
        affiliate_id: String,
    },

    /// List an affiliate's conversions, newest first
    Conversions {
        /// Affiliate identifier
        affiliate_id: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let pool_arc = Arc::new(pool.clone());
    let service = QueryService::new(
        Arc::new(PgClickRepository::new(pool_arc.clone())),
        Arc::new(PgConversionRepository::new(pool_arc)),
    );

    match cli.command {
        Commands::Stats => handle_stats(&service).await?,
        Commands::Clicks { affiliate_id } => list_clicks(&service, &affiliate_id).await?,
        Commands::Conversions { affiliate_id } => {
            list_conversions(&service, &affiliate_id).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

/// Displays click and conversion totals.
async fn handle_stats(service: &PgQueryService) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let (clicks, conversions) = service
        .totals()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count records: {}", e))?;

    println!("  Clicks:      {}", clicks.to_string().bright_green().bold());
    println!(
        "  Conversions: {}",
        conversions.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Lists an affiliate's clicks.
///
/// # Output Format
///
/// ```text
/// 🖱  Clicks for A1
///
///   ID   Click ID                  Campaign         Created
///   ──────────────────────────────────────────────────────────────────────
///   2    X2                        C1               2025-01-15 10:31
///   1    X1                        C1               2025-01-15 10:30
/// ```
async fn list_clicks(service: &PgQueryService, affiliate_id: &str) -> Result<()> {
    println!(
        "{} {}",
        "🖱  Clicks for".bright_blue().bold(),
        affiliate_id.cyan()
    );
    println!();

    let clicks = service
        .list_clicks(affiliate_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list clicks: {}", e))?;

    if clicks.is_empty() {
        println!("{}", "  No clicks found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<25} {:<16} {:<16}",
        "ID".bright_white().bold(),
        "Click ID".bright_white().bold(),
        "Campaign".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for click in &clicks {
        println!(
            "  {:<4} {:<25} {:<16} {}",
            click.id.to_string().bright_black(),
            click.click_id.cyan(),
            click.campaign_id,
            click
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", clicks.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Lists an affiliate's conversions.
async fn list_conversions(service: &PgQueryService, affiliate_id: &str) -> Result<()> {
    println!(
        "{} {}",
        "💰 Conversions for".bright_blue().bold(),
        affiliate_id.cyan()
    );
    println!();

    let conversions = service
        .list_conversions(affiliate_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list conversions: {}", e))?;

    if conversions.is_empty() {
        println!("{}", "  No conversions found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<10} {:>14} {:<8} {:<16}",
        "ID".bright_white().bold(),
        "Click ref".bright_white().bold(),
        "Amount".bright_white().bold(),
        "Currency".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for conversion in &conversions {
        println!(
            "  {:<4} {:<10} {:>14} {:<8} {}",
            conversion.id.to_string().bright_black(),
            conversion.click_ref,
            conversion.amount.to_plain_string().bright_green(),
            conversion.currency,
            conversion
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        conversions.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
