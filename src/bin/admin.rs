//! CLI administration tool for short-url.
//!
//! Inspects and manages the PostgreSQL record store without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- create https://example.com/page
//!
//! # List records with click counts
//! cargo run --bin admin -- list --limit 20
//!
//! # Show the visit history of one record
//! cargo run --bin admin -- show abc12345
//!
//! # Store totals
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use short_url::application::services::{AnalyticsService, ShortUrlService};
use short_url::config::{Config, mask_connection_string};
use short_url::domain::repositories::ShortUrlRepository;
use short_url::infrastructure::persistence::PgShortUrlRepository;

use anyhow::{Context, Result};
use chrono::DateTime;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing short-url.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a short URL
    Create {
        /// Long URL to shorten
        url: String,
    },

    /// List short URLs, newest first
    List {
        /// Maximum number of records to show
        #[arg(short, long, default_value_t = 20)]
        limit: i64,

        /// Number of records to skip
        #[arg(short, long, default_value_t = 0)]
        offset: i64,
    },

    /// Show one short URL and its visit history
    Show {
        /// Short identifier
        short_id: String,
    },

    /// Show store totals
    Stats,

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

    let database_url = Config::load_database_url().context("Database is not configured")?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to {}",
                mask_connection_string(&database_url)
            )
        })?;

    let repository: Arc<dyn ShortUrlRepository> =
        Arc::new(PgShortUrlRepository::new(Arc::new(pool.clone())));

    match cli.command {
        Commands::Create { url } => create(ShortUrlService::new(repository), url).await?,
        Commands::List { limit, offset } => {
            list(AnalyticsService::new(repository), limit, offset).await?
        }
        Commands::Show { short_id } => show(AnalyticsService::new(repository), &short_id).await?,
        Commands::Stats => stats(AnalyticsService::new(repository)).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn create(service: ShortUrlService, url: String) -> Result<()> {
    let record = service
        .shorten(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create short URL: {}", e))?;

    println!("{}", "✅ Short URL created".green().bold());
    println!("  Short id: {}", record.short_id.bright_white().bold());
    println!("  Target:   {}", record.redirect_url.cyan());

    Ok(())
}

async fn list(service: AnalyticsService, limit: i64, offset: i64) -> Result<()> {
    let records = service
        .list(limit, offset)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list short URLs: {}", e))?;

    if records.is_empty() {
        println!("{}", "No short URLs found".yellow());
        return Ok(());
    }

    println!(
        "  {:<10} {:<8} {:<18} {}",
        "ID".bold(),
        "CLICKS".bold(),
        "CREATED".bold(),
        "TARGET".bold()
    );

    for record in &records {
        println!(
            "  {:<10} {:<8} {:<18} {}",
            record.short_id.bright_white(),
            record.total_clicks.to_string().bright_green(),
            record
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            record.redirect_url.cyan()
        );
    }

    println!();
    println!("  Shown: {}", records.len().to_string().bright_white().bold());

    Ok(())
}

async fn show(service: AnalyticsService, short_id: &str) -> Result<()> {
    let analytics = service
        .analytics(short_id)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", short_id, e))?;

    println!("  Short id: {}", analytics.short_id.bright_white().bold());
    println!("  Target:   {}", analytics.redirect_url.cyan());
    println!(
        "  Clicks:   {}",
        analytics.total_clicks.to_string().bright_green().bold()
    );

    if !analytics.visits.is_empty() {
        println!();
        for visit in &analytics.visits {
            let when = DateTime::from_timestamp_millis(visit.timestamp)
                .map(|t| t.format("%Y-%m-%d %H:%M:%S%.3f UTC").to_string())
                .unwrap_or_else(|| visit.timestamp.to_string());
            println!("  {:<8} {}", visit.id.to_string().bright_black(), when);
        }
    }

    Ok(())
}

async fn stats(service: AnalyticsService) -> Result<()> {
    let summary = service
        .summary()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read statistics: {}", e))?;

    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();
    println!(
        "  Short URLs: {}",
        summary.total_urls.to_string().bright_green().bold()
    );
    println!(
        "  Visits:     {}",
        summary.total_visits.to_string().bright_green().bold()
    );

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
        }
    }

    Ok(())
}
