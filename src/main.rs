mod config;
mod db;
mod layout;
mod prompt;
mod routes;
mod state;

use std::sync::Arc;

use layout::labels::CategoryLabels;
use prompt::store::PgPromptStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    config::load_dotenv();

    let config = config::AppConfig::from_env().expect("invalid configuration");

    let labels = CategoryLabels::load(config.category_labels_path.as_deref()).expect("category labels failed to load");
    tracing::info!(count = labels.len(), "category labels loaded");

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");
    tracing::info!("database connected");

    let store = PgPromptStore::new(pool, config.random_min_structure_len);
    let state = state::AppState::new(Arc::new(store), labels);

    let app = routes::app(state);
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "prompt-flow listening");
    axum::serve(listener, app).await.expect("server failed");
}
