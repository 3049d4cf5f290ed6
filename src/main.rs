use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod db;
mod dispatch;
mod envelope;
mod error;
mod handlers;
mod models;
mod seed;

use crate::config::Config;
use crate::db::{Database, DocumentStore, JsonFileStore, MemoryStore};

/// `DB_PATH` value that keeps the document in memory only.
const MEMORY_DB_PATH: &str = ":memory:";

/// Shared application state, cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    /// Working copy of the document; every mutation is persisted through `store`.
    pub db: Arc<Mutex<Database>>,
    pub store: Arc<dyn DocumentStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn DocumentStore>, db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
            store,
            config: Arc::new(config),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,menu_mock_server=debug".into()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let seed_count = config.seed_menu_count;
    let (store, db): (Arc<dyn DocumentStore>, Database) = if config.db_path == MEMORY_DB_PATH {
        info!("Using in-memory store (nothing is written to disk)");
        let store = MemoryStore::new(seed::seed_database(seed_count));
        let db = store.load()?;
        (Arc::new(store), db)
    } else {
        let store = JsonFileStore::new(&config.db_path);
        info!(path = %store.path().display(), "Opening store document...");
        let db = store.load_or_seed(|| seed::seed_database(seed_count))?;
        (Arc::new(store), db)
    };
    info!(
        menus = db.menus.len(),
        cart = db.cart.len(),
        orders = db.orders.len(),
        "Store ready."
    );

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(config, store, db);
    let app = build_router(state);

    info!("Listening on http://{}", addr);
    info!("Quick-start: GET http://{}/menus?page=1&limit=8  →  POST http://{}/cart/items", addr, addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Cart, menus, orders and pass-through ────────────────────────────
        .fallback(dispatch::dispatch)

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
