use anyhow::{Context, Result};
use clap::Parser;
use migration::{Migrator, MigratorTrait};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use infrastructure::ServerConfig;
use infrastructure::database;
use tracking_server::{api, setup_app_state};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to config directory (optional files `default.*` and `{RUN_MODE}.*`)
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// Override listen address, e.g. 127.0.0.1:8000
    #[arg(long)]
    bind: Option<String>,

    /// Override media directory for uploaded photos
    #[arg(long)]
    media_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                "info,tracking_server=debug,application=debug,tower_http=debug".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    info!("📦 Tracking Server Starting...");

    // 0. Load Configuration
    let mut config = ServerConfig::load(&args.config_dir).context("Failed to load configuration")?;
    if let Some(bind) = args.bind {
        config.bind_address = bind;
    }
    if let Some(media_dir) = args.media_dir {
        config.media_dir = media_dir;
    }
    info!(media_dir = %config.media_dir, api_prefix = %config.api_prefix, "✅ Configuration loaded");

    // 1. Connect to Database
    info!(host = %config.db_host, database = %config.db_name, "Connecting to database...");
    let db = database::connect(&config.database_url())
        .await
        .context("Failed to connect to database")?;

    // 1.1 Run Migrations
    info!("Running database migrations...");
    Migrator::up(&db, None).await?;
    info!("✅ Migrations applied successfully");

    // 2. Start API Server
    let state = setup_app_state(db, &config);
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    info!("🚀 API Listening on http://{}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
