use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::modules::tasks::core::model::Task;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ListTasksResponse {
    pub tasks: Vec<Task>,
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.tasks.list().await {
        Ok(tasks) => (StatusCode::OK, Json(ListTasksResponse { tasks })).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
