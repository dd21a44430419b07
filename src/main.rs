use axum::{
    routing::{delete, get, post},
    Router,
};
use clap::Parser;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use masterclass_api::config::config;
use masterclass_api::database::catalog::CatalogStore;
use masterclass_api::database::manager::DatabaseManager;
use masterclass_api::database::schema;
use masterclass_api::database::users::UserStore;
use masterclass_api::handlers::{self, AppState};

#[derive(Debug, Parser)]
#[command(name = "masterclass-api", about = "Masterclass catalog API server")]
struct Args {
    /// Port to listen on; falls back to MC_API_PORT / PORT, then 3000
    #[arg(long)]
    port: Option<u16>,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("masterclass_api=debug,tower_http=debug")),
        )
        .init();

    let config = config();
    tracing::info!("Starting masterclass-api in {:?} mode", config.environment);

    let catalog_primary = DatabaseManager::catalog_pool().await?;
    let catalog_replica = DatabaseManager::catalog_replica_pool().await?;
    let users_primary = DatabaseManager::users_pool().await?;

    schema::ensure_schema(&catalog_primary, &users_primary).await?;

    let state = AppState {
        catalog: CatalogStore::new(catalog_primary, catalog_replica),
        users: UserStore::new(users_primary),
    };

    // Allow tests or deployments to override port via env
    let port = args
        .port
        .or_else(|| std::env::var("MC_API_PORT").ok().and_then(|s| s.parse().ok()))
        .or_else(|| std::env::var("PORT").ok().and_then(|s| s.parse().ok()))
        .unwrap_or(3000);

    let bind_addr = format!("{}:{}", args.bind, port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("masterclass-api listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(handlers::ping::ping))
        .route("/mcadd", post(handlers::mc::mc_add))
        .route("/mcaddbulk", post(handlers::mc::mc_add_bulk))
        .route("/mclist", get(handlers::mc::mc_list))
        .route("/mcdelete", delete(handlers::mc::mc_delete))
        .route("/useradd", post(handlers::user::user_add))
        .route("/userdelete", delete(handlers::user::user_delete))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
