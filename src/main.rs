//! albumd - Album catalog REST microservice entry point
//!
//! Opens (creating if needed) the SQLite database, builds the router, and
//! serves until interrupted.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use albumd::db::{self, AlbumStore};
use albumd::{build_router, AppState, RouterConfig};

/// Command-line arguments for albumd
#[derive(Parser, Debug)]
#[command(name = "albumd")]
#[command(about = "Album catalog REST microservice")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8000", env = "ALBUMD_PORT")]
    port: u16,

    /// Path to the SQLite database file (created on first run)
    #[arg(short, long, default_value = "albums.db", env = "ALBUMD_DATABASE")]
    database: PathBuf,

    /// Disable the permissive CORS layer
    #[arg(long)]
    no_cors: bool,

    /// Do not expose PUT /album/{id}
    #[arg(long)]
    no_update_route: bool,

    /// Serve a static client directory at /
    #[arg(long, env = "ALBUMD_STATIC_DIR")]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "albumd=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("Starting albumd v{}", env!("CARGO_PKG_VERSION"));
    info!("Database path: {}", args.database.display());

    // Startup failures here are fatal; nothing can be served without a store
    let pool = db::init_database(&args.database)
        .await
        .context("Failed to initialize database")?;

    let state = AppState::new(AlbumStore::new(pool));
    let config = RouterConfig {
        cors: !args.no_cors,
        update_route: !args.no_update_route,
        static_dir: args.static_dir,
    };
    let app = build_router(state, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("albumd listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
