use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::shared::infrastructure::task_store::TaskStoreError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct DeleteTaskResponse {
    pub result: bool,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> impl IntoResponse {
    // A non-integer segment is a routing non-match, not an application error.
    let Path(id) = match id {
        Ok(p) => p,
        Err(_) => return StatusCode::NOT_FOUND.into_response(),
    };

    match state.tasks.delete(id).await {
        Ok(()) => (StatusCode::OK, Json(DeleteTaskResponse { result: true })).into_response(),
        Err(TaskStoreError::NotFound { .. }) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Task not found",
            }),
        )
            .into_response(),
    }
}
