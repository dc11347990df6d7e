use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::tasks::core::model::{Task, TaskPatch};
use crate::shared::infrastructure::task_store::TaskStoreError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateTaskBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub done: Option<bool>,
}

#[derive(Serialize)]
pub struct UpdateTaskResponse {
    pub task: Task,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

pub async fn handle(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> impl IntoResponse {
    // A non-integer segment is a routing non-match, not an application error.
    let Path(id) = match id {
        Ok(p) => p,
        Err(_) => return StatusCode::NOT_FOUND.into_response(),
    };

    // Existence decides the status before the body is validated: an unknown id
    // wins over a bad payload.
    if state.tasks.get(id).await.is_err() {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Task not found",
            }),
        )
            .into_response();
    }

    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No data provided",
                }),
            )
                .into_response();
        }
    };

    let patch = TaskPatch {
        title: body.title,
        description: body.description,
        done: body.done,
    };

    match state.tasks.update(id, patch).await {
        Ok(task) => (StatusCode::OK, Json(UpdateTaskResponse { task })).into_response(),
        Err(TaskStoreError::NotFound { .. }) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Task not found",
            }),
        )
            .into_response(),
    }
}
