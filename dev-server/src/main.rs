//! Development server for the hotel admin UI
//!
//! Runs the in-memory mock backend with a seeded dataset so the UI can be
//! developed without the real API.
//!
//! Usage: cargo run -p dev-server
//!
//! Reads `IP_ADDRESS`, `PORT` and `ALLOWED_ORIGINS` from the environment
//! (or a `.env` file).

use anyhow::Result;
use test_helpers::{Config, TestApp, mock::DevDataset, store::Store, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = telemetry::get_subscriber("info".into());
    telemetry::init_subscriber(subscriber)?;

    info!("🚀 Starting hotel admin development server");

    let mut config = Config::from_env()?;
    let server = test_helpers::build(&mut config, Store::default())?;
    let server_handle = tokio::spawn(server);

    let address = format!("http://{}:{}/api", config.ip, config.port);
    info!("✅ Mock API running on {address}");

    let app = TestApp {
        port: config.port,
        client: payloads::APIClient::new(address.clone()),
    };

    info!("📊 Setting up development data...");
    match DevDataset::create(&app).await {
        Ok(dataset) => dataset.print_summary(),
        Err(e) => telemetry::log_error(e),
    }

    info!("🎯 Development server ready!");
    info!("   UI:  cd ui && BACKEND_URL={address} trunk serve");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::select! {
        result = tokio::signal::ctrl_c() => result?,
        result = server_handle => result??,
    }
    info!("🛑 Shutting down development server");
    Ok(())
}
