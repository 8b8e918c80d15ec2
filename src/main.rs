//! Roster - employee records data-access layer

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster::{
    config::Args,
    db::{Collections, MongoClient},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing/logging
    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("roster={},info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Validate configuration
    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    info!("MongoDB: {}", args.mongodb_uri);
    info!("Database: {}", args.mongodb_db);

    // Connect and publish the collection handles
    let mongo = MongoClient::new(&args.mongodb_uri, &args.mongodb_db).await?;
    let collections = Collections::init(&mongo).await?;

    let employee_count = collections.employees().inner().estimated_document_count().await?;
    info!("Employee collection ready ({} records)", employee_count);

    Ok(())
}
