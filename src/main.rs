use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod db;
mod employees;
mod error;
mod health;
mod state;
mod web;

use crate::{config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let db = db::connect(&config.database).await?;
    tracing::info!(
        "database: {}@{}:{}",
        config.database.name,
        config.database.host,
        config.database.port
    );

    if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
        tracing::warn!(error = %e, "schema migration failed; continuing");
    }

    let app = app::build_app(AppState::postgres(db.clone()));
    app::serve(app, config.port).await?;

    // Waits for connections still checked out by finished requests.
    db.close().await;
    tracing::info!("database pool closed");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("employee_records=debug,axum=info,tower_http=info,sqlx=warn")
    });
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}
