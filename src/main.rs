use actix_web::{
  App, HttpServer,
  middleware::{Logger, NormalizePath, TrailingSlash},
};
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gradtrack::{
  adapters::http::{RequestIdMiddleware, configure_api},
  application::account::{EnsureAdminCommand, EnsureAdminUseCase},
  domain::account::services::AccountService,
  domain::admissions::services::AdmissionsService,
  infrastructure::{
    config::Config,
    persistence::postgres::{
      PostgresApplicationRepository, PostgresCatalogRepository, PostgresUserRepository,
    },
    security::{Argon2PasswordHasher, JwtTokenIssuer},
  },
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "gradtrack=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting gradtrack");

  let config = Config::load().context("Failed to load configuration")?;
  tracing::info!("Configuration loaded successfully");

  // Set up database connection pool with timeout
  tracing::info!(
    max_connections = config.database.max_connections,
    "Connecting to database"
  );

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    anyhow::anyhow!(
      "Database connection timed out after {} seconds",
      config.database.connect_timeout_seconds
    )
  })?
  .context("Failed to connect to database")?;

  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .context("Failed to run database migrations")?;
  tracing::info!("Database migrations completed");

  // Repositories and security adapters
  let user_repo = Arc::new(PostgresUserRepository::new(db_pool.clone()));
  let application_repo = Arc::new(PostgresApplicationRepository::new(db_pool.clone()));
  let catalog_repo = Arc::new(PostgresCatalogRepository::new(db_pool.clone()));
  let password_hasher = Arc::new(Argon2PasswordHasher::new()?);
  let token_issuer = Arc::new(JwtTokenIssuer::new(
    config.security.jwt_secret.as_bytes(),
    i64::try_from(config.security.token_ttl_seconds).context("token_ttl_seconds is too large")?,
  ));

  // Domain services
  let account_service = Arc::new(AccountService::new(
    user_repo,
    catalog_repo.clone(),
    password_hasher,
    token_issuer,
  ));
  let admissions_service = Arc::new(AdmissionsService::new(application_repo, catalog_repo));

  if let Some(admin) = config.admin.clone() {
    let admin = EnsureAdminUseCase::new(account_service.clone())
      .execute(EnsureAdminCommand {
        first_name: admin.first_name,
        last_name: admin.last_name,
        email: admin.email,
        password: admin.password,
      })
      .await
      .context("Failed to bootstrap admin account")?;
    tracing::info!(user_id = %admin.id, "Admin account ready");
  }

  let server_host = config.server.host.clone();
  let server_port = config.server.port;
  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    let accounts = account_service.clone();
    let admissions = admissions_service.clone();

    App::new()
      .wrap(NormalizePath::new(TrailingSlash::Trim))
      .wrap(Logger::default())
      .wrap(RequestIdMiddleware::new())
      .configure(|cfg| configure_api(cfg, accounts, admissions))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await?;

  Ok(())
}
