use std::sync::Arc;

use crate::shared::infrastructure::task_store::TaskRepository;

#[derive(Clone)]
pub struct AppState {
    pub tasks: Arc<dyn TaskRepository + Send + Sync>,
}
