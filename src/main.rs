use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use task_store::shared::infrastructure::task_store::in_memory::InMemoryTaskStore;
use task_store::shell::config::Config;
use task_store::shell::http::router;
use task_store::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let tasks = Arc::new(InMemoryTaskStore::with_sample_tasks());
    let state = AppState { tasks };

    let app = router(state).layer(TraceLayer::new_for_http());

    tracing::info!("Task API: http://{}/tasks", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
