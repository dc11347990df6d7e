// End to end run of the task flow over the real router, backed by the
// in memory store with its startup seed.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use task_store::shared::infrastructure::task_store::in_memory::InMemoryTaskStore;
use task_store::shell::http::router;
use task_store::shell::state::AppState;

fn seeded_app() -> Router {
    router(AppState {
        tasks: Arc::new(InMemoryTaskStore::with_sample_tasks()),
    })
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn creates_updates_and_deletes_tasks_through_the_http_surface() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(
            Request::post("/tasks")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"title":"Task 3"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(
        created,
        serde_json::json!({
            "task": {"id": 3, "title": "Task 3", "description": "", "done": false}
        })
    );

    let response = app
        .clone()
        .oneshot(Request::get("/tasks").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = json_body(response).await;
    let ids: Vec<_> = listed["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|task| task["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);

    // The created task round-trips through get.
    let response = app
        .clone()
        .oneshot(Request::get("/tasks/3").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, created);

    let response = app
        .clone()
        .oneshot(
            Request::put("/tasks/1")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"done":true}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["task"]["done"], true);
    assert_eq!(updated["task"]["title"], "Task 1");

    let response = app
        .clone()
        .oneshot(Request::delete("/tasks/2").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, serde_json::json!({"result": true}));

    let response = app
        .clone()
        .oneshot(Request::get("/tasks/2").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response).await,
        serde_json::json!({"error": "Task not found"})
    );

    let response = app
        .oneshot(Request::get("/tasks").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let listed = json_body(response).await;
    let ids: Vec<_> = listed["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|task| task["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn keeps_assigning_fresh_ids_after_deleting_the_newest_task() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(
            Request::post("/tasks")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"title":"Task 3"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(json_body(response).await["task"]["id"], 3);

    let response = app
        .clone()
        .oneshot(Request::delete("/tasks/3").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::post("/tasks")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"title":"Task 4"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await["task"]["id"], 4);
}
