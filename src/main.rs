//! BETBOOK — 2D/3D lottery entry book
//!
//! Entry point. Loads configuration, initialises structured logging,
//! seeds the in-memory ledger and serves the JSON API until Ctrl+C.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use betbook::api::{self, ApiState};
use betbook::config;
use betbook::ledger::MockLedger;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let cfg = config::AppConfig::load_default()?;

    init_logging();

    let ledger = MockLedger::seeded();
    info!(
        app = %cfg.app.name,
        currency = %cfg.app.currency,
        stations = cfg.entry.stations.len(),
        bets = ledger.bet_count(),
        "BETBOOK starting up"
    );

    let addr = cfg.bind_addr()?;
    let state = Arc::new(ApiState::new(ledger, cfg.entry.stations.clone()));
    api::serve(state, addr).await?;

    info!("BETBOOK shut down cleanly.");
    Ok(())
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("betbook=info"));

    let json_logging = std::env::var("BETBOOK_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }
}
