//! # LNURL Relay
//!
//! Server-side relay for LNURL-pay: Lightning Address resolution and
//! invoice requests.
//!
//! ## Usage
//!
//! ```bash
//! # Optional environment variables
//! export HOST=0.0.0.0
//! export PORT=8080
//! export LNURL_HTTP_TIMEOUT_SECS=30
//!
//! # Run the server
//! lnurl-relay
//! ```

use lnurl_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Print banner
    print_banner();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🚀 LNURL relay starting on http://{}", addr);

    if !is_prod {
        info!("📝 Health: http://{}/health", addr);
        info!("⚡ Resolve: POST http://{}/api/v1/lnurlp", addr);
        info!("🧾 Invoice: POST http://{}/api/v1/callback", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  ⚡ LNURL Relay RS ⚡
  ━━━━━━━━━━━━━━━━━━━━━
  Lightning Address relay
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
