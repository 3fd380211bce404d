//! Binary entrypoint for the contacts HTTP server.
//!
//! Configuration comes from environment variables; see
//! [`contacts_server::config`]. Log filtering follows `RUST_LOG`
//! (default: "info").

use std::process;

use tracing_subscriber::EnvFilter;

use contacts_server::config::ServerConfig;
use contacts_server::router::build_router;
use contacts_server::state::AppState;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{}", err);
            process::exit(2);
        }
    };

    let state = AppState::new(&config);
    let app = build_router(state);

    let addr = config.addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind {}: {}", addr, err);
            process::exit(1);
        }
    };
    tracing::info!(
        "contacts server starting on {} (delete delay {:?})",
        addr,
        config.delete_delay
    );

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("server error: {}", err);
        process::exit(1);
    }
}
