// src/bin/create_user.rs
//! Provision an account from the command line.
//!
//! ```text
//! create_user <username> [--superuser] [--password <password>]
//! ```
//!
//! Without `--password` the password is read from `CREATE_USER_PASSWORD`.
use anyhow::{Context, Result};
use blog_core::application::{
    commands::users::CreateUserCommand,
    ports::time::Clock,
    services::ApplicationServices,
};
use blog_core::config::AppConfig;
use blog_core::infrastructure::{
    database,
    repositories::postgres_repositories,
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use clap::Parser;
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "create_user", about = "Provision a blog account")]
struct Args {
    /// Login name, at least 3 characters.
    username: String,
    /// Grant moderation rights; superuser comments skip the queue.
    #[arg(long)]
    superuser: bool,
    #[arg(long, env = "CREATE_USER_PASSWORD", hide_env_values = true)]
    password: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .init();

    let args = Args::parse();
    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), 2)
        .await
        .context("connecting to the database")?;
    database::run_migrations(&pool).await?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let services = ApplicationServices::new(
        postgres_repositories(&pool),
        Arc::new(Argon2PasswordHasher),
        Arc::new(BiscuitTokenManager::new(
            config.biscuit_private_key(),
            config.token_ttl(),
            Arc::clone(&clock),
        )?),
        clock,
        Arc::new(DefaultSlugGenerator),
        config.service_settings(),
    );

    let user = services
        .user_commands
        .create_user(CreateUserCommand {
            username: args.username,
            password: args.password,
            is_superuser: args.superuser,
        })
        .await?;

    println!(
        "created {} '{}' (id {})",
        if user.is_superuser { "superuser" } else { "user" },
        user.username,
        user.id
    );
    pool.close().await;
    Ok(())
}
