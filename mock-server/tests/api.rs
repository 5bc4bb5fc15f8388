use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Todo};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let app = app();
    let resp = app.oneshot(get_request("/todos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert!(todos.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_201() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/todos", r#"{"title":"Buy milk"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.title, "Buy milk");
    assert!(!todo.completed);
}

#[tokio::test]
async fn create_todo_assigns_sequential_ids() {
    let app = app();
    for expected_id in 1..=3u64 {
        let resp = app
            .clone()
            .oneshot(json_request("POST", "/todos", r#"{"title":"Next"}"#))
            .await
            .unwrap();
        let todo: Todo = body_json(resp).await;
        assert_eq!(todo.id, expected_id);
    }
}

#[tokio::test]
async fn create_todo_with_completed_true() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/todos",
            r#"{"title":"Already done","completed":true}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: Todo = body_json(resp).await;
    assert!(todo.completed);
}

#[tokio::test]
async fn create_todo_malformed_json_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/todos", r#"{"not_title":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- update ---

#[tokio::test]
async fn update_todo_applies_full_object_body() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/todos", r#"{"title":"Original"}"#))
        .await
        .unwrap();
    let created: Todo = body_json(resp).await;

    let resp = app
        .oneshot(json_request(
            "PATCH",
            &format!("/todos/{}", created.id),
            &format!(
                r#"{{"id":{},"title":"Renamed","completed":true}}"#,
                created.id
            ),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Todo = body_json(resp).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Renamed");
    assert!(updated.completed);
}

#[tokio::test]
async fn update_todo_merges_partial_fields() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/todos", r#"{"title":"Keep me"}"#))
        .await
        .unwrap();
    let created: Todo = body_json(resp).await;

    let resp = app
        .oneshot(json_request(
            "PATCH",
            &format!("/todos/{}", created.id),
            r#"{"completed":true}"#,
        ))
        .await
        .unwrap();

    let updated: Todo = body_json(resp).await;
    assert_eq!(updated.title, "Keep me");
    assert!(updated.completed);
}

#[tokio::test]
async fn update_todo_not_found() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "PATCH",
            "/todos/999",
            r#"{"title":"Ghost","completed":false}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_todo_bad_id_returns_400() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "PATCH",
            "/todos/not-a-number",
            r#"{"title":"x"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- delete ---

#[tokio::test]
async fn delete_todo_returns_204_with_empty_body() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/todos", r#"{"title":"Doomed"}"#))
        .await
        .unwrap();
    let created: Todo = body_json(resp).await;

    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/todos/{}", created.id))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn delete_todo_not_found() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/todos/999")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
