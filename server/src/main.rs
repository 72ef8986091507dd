use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use campus_events_server::config::Config;
use campus_events_server::db::{seed_sample_data, SqliteStore};
use campus_events_server::routes::create_routes;
use campus_events_server::state::AppState;

const DEFAULT_LOG_FILTER: &str = "campus_events_server=info,tower_http=info";

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env();

    let store = SqliteStore::connect(&config.database_url)
        .await
        .expect("Failed to open database");

    tracing::info!("Database ready at {}", config.database_url);

    if config.seed_sample_data {
        seed_sample_data(store.pool())
            .await
            .expect("Failed to load sample data");
    }

    let app = create_routes(AppState::new(Arc::new(store)), &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server running at http://{}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
