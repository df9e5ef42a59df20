// ██████╗  █████╗ ██████╗ ██╗     ██╗ █████╗ ███╗   ███╗███████╗███╗   ██╗████████╗
// ██╔══██╗██╔══██╗██╔══██╗██║     ██║██╔══██╗████╗ ████║██╔════╝████╗  ██║╚══██╔══╝
// ██████╔╝███████║██████╔╝██║     ██║███████║██╔████╔██║█████╗  ██╔██╗ ██║   ██║
// ██╔═══╝ ██╔══██║██╔══██╗██║     ██║██╔══██║██║╚██╔╝██║██╔══╝  ██║╚██╗██║   ██║
// ██║     ██║  ██║██║  ██║███████╗██║██║  ██║██║ ╚═╝ ██║███████╗██║ ╚████║   ██║
// ╚═╝     ╚═╝  ╚═╝╚═╝  ╚═╝╚══════╝╚═╝╚═╝  ╚═╝╚═╝     ╚═╝╚══════╝╚═╝  ╚═══╝   ╚═╝
//
// P U L S E   E N G I N E
//
// The public record of the Parliament of Ghana, scraped from tables and
// served as JSON. Agendas, votes & proceedings, leadership, bills.
// If the site is up, you get the site. If it isn't, you get our curated
// samples and an honest `origin: fallback` label.

mod classify;
mod config;
mod dates;
mod extract;
mod models;
mod routes;
mod scrapers;
mod selectors;
mod urls;

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use crate::routes::AppState;

fn print_banner() {
    let banner = r#"

    ╔══════════════════════════════════════════════════════════════════╗
    ║                                                                  ║
    ║              PARLIAMENT PULSE ENGINE                             ║
    ║                                                                  ║
    ║   Sources:  parliament.gh — AG | VP | LD | Bills                 ║
    ║   Output:   JSON, camelCase, origin-labelled                     ║
    ║   Policy:   availability over accuracy — fallback, never 500     ║
    ║                                                                  ║
    ║   "The House sits. We refresh."                                  ║
    ║                                                                  ║
    ╚══════════════════════════════════════════════════════════════════╝

    "#;
    println!("{}", banner);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_ansi(true)
        .init();

    print_banner();

    info!("🏛️ PARLIAMENT PULSE ENGINE initializing...");

    // Load configuration
    let config = Arc::new(Config::from_env());
    info!("✅ Configuration loaded: base_url={}", config.base_url);

    // One HTTP client for the life of the process. Immutable, cheap to
    // clone, and carries the timeout the upstream host has earned.
    let client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    info!(
        "✅ HTTP client ready (timeout: {}s)",
        config.request_timeout.as_secs()
    );

    let state = AppState {
        config: config.clone(),
        client,
    };
    let app = routes::router(state);

    let addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = TcpListener::bind(&addr).await?;

    info!("═══════════════════════════════════════════════════════");
    info!("  🟢 PARLIAMENT PULSE ENGINE ACTIVE");
    info!("  📡 Mirroring {}", config.base_url);
    info!("  📤 Serving JSON at http://{}/api/parliament/*", addr);
    info!("  ⚡ Press Ctrl+C for graceful shutdown");
    info!("═══════════════════════════════════════════════════════");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("🏛️ PARLIAMENT PULSE ENGINE: OFFLINE");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => warn!("🛑 Shutdown signal received!"),
        Err(err) => warn!("❌ Signal listener error: {} — shutting down anyway", err),
    }
}
