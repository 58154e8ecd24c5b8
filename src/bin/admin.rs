//! CLI administration tool for the job board.
//!
//! Provides commands for bootstrapping accounts, managing companies, viewing
//! statistics, and performing database operations without HTTP API access.
//! The HTTP API never creates administrators, so the first one is made here.
//!
//! # Usage
//!
//! ```bash
//! # Create the first administrator
//! cargo run --bin admin -- user create --admin
//!
//! # Grant or revoke admin rights
//! cargo run --bin admin -- user promote alice
//! cargo run --bin admin -- user promote alice --revoke
//!
//! # List users
//! cargo run --bin admin -- user list
//!
//! # Print an Argon2id hash for a password
//! cargo run --bin admin -- hash-password
//!
//! # Companies
//! cargo run --bin admin -- company add "Acme"
//! cargo run --bin admin -- company list
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or the `POSTGRES_*` components: PostgreSQL connection

use job_board::application::services::CompanyService;
use job_board::config::Config;
use job_board::domain::entities::NewUser;
use job_board::domain::repositories::UserRepository;
use job_board::infrastructure::persistence::{PgCompanyRepository, PgUserRepository};
use job_board::utils::password::hash_password;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the job board.
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
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage companies
    Company {
        #[command(subcommand)]
        action: CompanyAction,
    },

    /// Prompt for a password and print its Argon2id hash
    HashPassword,

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a user account
    Create {
        /// Username (prompted if omitted)
        #[arg(short, long)]
        username: Option<String>,

        /// Grant admin rights
        #[arg(long)]
        admin: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Grant (or revoke) admin rights
    Promote {
        username: String,

        /// Revoke admin rights instead of granting them
        #[arg(long)]
        revoke: bool,
    },

    /// List all users
    List,
}

#[derive(Subcommand)]
enum CompanyAction {
    /// Add a company
    Add { name: String },

    /// List all companies
    List,
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

    // Hashing needs no database
    if let Commands::HashPassword = cli.command {
        return print_password_hash();
    }

    let database_url = Config::load_database_url();

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Company { action } => handle_company_action(action, &pool).await?,
        Commands::HashPassword => {}
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Create {
            username,
            admin,
            yes,
        } => create_user(repo, username, admin, yes).await?,
        UserAction::Promote { username, revoke } => promote_user(repo, username, !revoke).await?,
        UserAction::List => list_users(repo).await?,
    }

    Ok(())
}

/// Creates a user with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for username (or use provided)
/// 2. Prompt for password twice
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Hash with Argon2id and store
async fn create_user(
    repo: Arc<PgUserRepository>,
    username: Option<String>,
    is_admin: bool,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password = prompt_password()?;

    println!();
    println!("  Username: {}", username.cyan());
    println!(
        "  Role:     {}",
        if is_admin {
            "admin".bright_yellow()
        } else {
            "user".normal()
        }
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let password_hash = hash_password(&password).map_err(|e| anyhow::anyhow!("{}", e))?;

    let user = repo
        .create(NewUser {
            username,
            password_hash,
            is_admin,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "✅ User created successfully!".green().bold(),
        user.id.to_string().bright_white()
    );
    println!();

    Ok(())
}

async fn promote_user(repo: Arc<PgUserRepository>, username: String, is_admin: bool) -> Result<()> {
    let updated = repo
        .set_admin(&username, is_admin)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    if !updated {
        anyhow::bail!("User '{}' not found", username);
    }

    let verb = if is_admin { "granted to" } else { "revoked from" };
    println!(
        "{}",
        format!("✅ Admin rights {} {}", verb, username).green().bold()
    );

    Ok(())
}

/// Lists all users.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID  Username                       Role
///   ──────────────────────────────────────────────
///   1   admin                          ADMIN
///   2   alice                          user
/// ```
async fn list_users(repo: Arc<PgUserRepository>) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create --admin",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<30} {:<10}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Role".bright_white().bold()
    );
    println!("  {}", "─".repeat(46).bright_black());

    for user in &users {
        let role = if user.is_admin {
            "ADMIN".bright_yellow()
        } else {
            "user".normal()
        };

        println!(
            "  {:<3} {:<30} {}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            role
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Dispatches company commands.
async fn handle_company_action(action: CompanyAction, pool: &PgPool) -> Result<()> {
    let service = CompanyService::new(Arc::new(PgCompanyRepository::new(Arc::new(
        pool.clone(),
    ))));

    match action {
        CompanyAction::Add { name } => {
            let company = service
                .create_company(&name)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create company: {}", e))?;

            println!(
                "{} {} (id {})",
                "✅ Company created:".green().bold(),
                company.name.cyan(),
                company.id.to_string().bright_white()
            );
        }
        CompanyAction::List => {
            println!("{}", "🏢 Companies".bright_blue().bold());
            println!();

            let companies = service
                .list_companies()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list companies: {}", e))?;

            if companies.is_empty() {
                println!("{}", "  No companies found".yellow());
            }

            for company in &companies {
                println!(
                    "  {:<5} {}",
                    company.id.to_string().bright_black(),
                    company.name.cyan()
                );
            }
            println!();
        }
    }

    Ok(())
}

/// Displays row counts and the per-company salary aggregate.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let service = CompanyService::new(Arc::new(PgCompanyRepository::new(Arc::new(
        pool.clone(),
    ))));
    let companies_count = service
        .company_count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count companies: {}", e))?;

    let jobs_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM job")
        .fetch_one(pool)
        .await?;

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    println!(
        "  Companies: {}",
        companies_count.to_string().bright_green().bold()
    );
    println!("  Jobs:      {}", jobs_count.to_string().bright_green().bold());
    println!("  Users:     {}", users_count.to_string().bright_green().bold());
    println!();

    let stats = service
        .salary_stats()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to compute salary stats: {}", e))?;

    if !stats.is_empty() {
        println!(
            "  {:<30} {:>12} {:>8}",
            "Company".bright_white().bold(),
            "Avg salary".bright_white().bold(),
            "> 100k".bright_white().bold()
        );
        println!("  {}", "─".repeat(52).bright_black());

        for stat in &stats {
            println!(
                "  {:<30} {:>12} {:>8}",
                stat.company.cyan(),
                stat.avg_salary,
                stat.high_salary
            );
        }
        println!();
    }

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

            let migrations: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM _sqlx_migrations WHERE success",
            )
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

fn prompt_password() -> Result<String> {
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    if password.is_empty() {
        anyhow::bail!("Password must not be empty");
    }

    Ok(password)
}

fn print_password_hash() -> Result<()> {
    let password = prompt_password()?;
    let hash = hash_password(&password).map_err(|e| anyhow::anyhow!("{}", e))?;

    println!();
    println!("{}", hash.bright_yellow());

    Ok(())
}
