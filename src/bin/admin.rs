//! CLI administration tool for projects-api.
//!
//! Provides maintenance commands that the HTTP API deliberately does not
//! expose: inspecting and restoring soft-deleted projects, purging them for
//! good, and quick database diagnostics.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Row counts
//! cargo run --bin admin -- stats
//!
//! # Soft-deleted projects
//! cargo run --bin admin -- project trashed
//! cargo run --bin admin -- project restore 42
//! cargo run --bin admin -- project purge
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use projects_api::application::services::ProjectService;
use projects_api::config::{Config, mask_connection_string};
use projects_api::infrastructure::persistence::{PgCustomerRepository, PgProjectRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing projects-api.
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
    /// Manage soft-deleted projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Show row counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Project maintenance subcommands.
#[derive(Subcommand)]
enum ProjectAction {
    /// List soft-deleted projects
    Trashed,

    /// Restore a soft-deleted project
    Restore {
        /// Project ID
        id: i64,
    },

    /// Permanently delete all soft-deleted projects
    Purge {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

    match cli.command {
        Commands::Project { action } => handle_project_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches project maintenance commands.
async fn handle_project_action(action: ProjectAction, pool: &PgPool) -> Result<()> {
    let pool = Arc::new(pool.clone());
    let service = ProjectService::new(
        Arc::new(PgProjectRepository::new(pool.clone())),
        Arc::new(PgCustomerRepository::new(pool)),
    );

    match action {
        ProjectAction::Trashed => list_trashed(&service).await,
        ProjectAction::Restore { id } => restore(&service, id).await,
        ProjectAction::Purge { yes } => purge(&service, yes).await,
    }
}

/// Lists soft-deleted projects, most recently deleted first.
///
/// ```text
/// 🗑  Deleted projects
///
///   ID    Name                           Deleted
///   ───────────────────────────────────────────────────────────
///   12    Apollo                         2026-01-15 10:30
/// ```
async fn list_trashed(service: &ProjectService) -> Result<()> {
    println!("{}", "🗑  Deleted projects".bright_blue().bold());
    println!();

    let projects = service
        .trashed_projects()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list projects: {}", e))?;

    if projects.is_empty() {
        println!("{}", "  No deleted projects".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<30} {:<20}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Deleted".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for project in &projects {
        let deleted = project
            .deleted_at
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();

        println!(
            "  {:<5} {:<30} {}",
            project.id.to_string().bright_black(),
            project.name.cyan(),
            deleted.bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        projects.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Clears `deleted_at` on one project.
async fn restore(service: &ProjectService, id: i64) -> Result<()> {
    let project = service
        .restore_project(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to restore project {}: {}", id, e))?;

    println!(
        "{} {}",
        "✅ Restored".green().bold(),
        project.name.cyan()
    );

    Ok(())
}

/// Hard-deletes every soft-deleted project after confirmation.
///
/// Names of purged projects become available again.
async fn purge(service: &ProjectService, skip_confirm: bool) -> Result<()> {
    let trashed = service
        .trashed_projects()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list projects: {}", e))?;

    if trashed.is_empty() {
        println!("{}", "  Nothing to purge".yellow());
        return Ok(());
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Permanently delete {} project(s)?",
                trashed.len()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let purged = service
        .purge_trashed()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to purge projects: {}", e))?;

    println!(
        "{} {}",
        "✅ Purged projects:".green().bold(),
        purged.to_string().bright_white().bold()
    );

    Ok(())
}

/// Displays row counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let customers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(pool)
        .await?;

    let projects: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE deleted_at IS NULL")
            .fetch_one(pool)
            .await?;

    let deleted: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE deleted_at IS NOT NULL")
            .fetch_one(pool)
            .await?;

    println!(
        "  Customers:        {}",
        customers.to_string().bright_green().bold()
    );
    println!(
        "  Projects:         {}",
        projects.to_string().bright_green().bold()
    );
    println!(
        "  Deleted projects: {}",
        deleted.to_string().bright_yellow().bold()
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

            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
