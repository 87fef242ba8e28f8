mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use axum::Router;
use clap::Parser;
use haru_core::store::EventStore;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "haru-server")]
#[command(about = "HTTP event store for haru clients")]
struct Args {
    /// Port to listen on
    #[arg(long, default_value_t = 4080)]
    port: u16,

    /// Path to the events database file (defaults to the platform data dir)
    #[arg(long)]
    db: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let args = Args::parse();
    let store = match args.db {
        Some(path) => EventStore::new(path),
        None => EventStore::open_default(),
    };
    tracing::info!("using event database at {}", store.path().display());

    let state = AppState::new(store);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::events::router())
        .with_state(state)
        .layer(cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("haru-server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
