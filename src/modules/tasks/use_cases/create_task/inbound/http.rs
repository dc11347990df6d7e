use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::tasks::core::model::{NewTask, Task};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateTaskBody {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Serialize)]
pub struct CreateTaskResponse {
    pub task: Task,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateTaskBody>, JsonRejection>,
) -> impl IntoResponse {
    // Unparseable bodies and bodies without a title share one fixed message.
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Title is required",
                }),
            )
                .into_response();
        }
    };

    let new_task = NewTask {
        title: body.title,
        description: body.description.unwrap_or_default(),
    };

    match state.tasks.create(new_task).await {
        Ok(task) => (StatusCode::CREATED, Json(CreateTaskResponse { task })).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
