// tests/submissions_tests.rs

use axum::{Json, Router, http::StatusCode, routing::get};
use examdesk::client::BackendClient;
use examdesk::config::Config;
use examdesk::routes;
use examdesk::state::AppState;
use serde_json::{Value, json};

/// Binds a router on a random loopback port and serves it in the
/// background. Returns the base URL.
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let address = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    address
}

async fn spawn_app(backend_url: &str) -> String {
    let config = Config {
        backend_url: backend_url.parse().expect("backend url"),
        listen_port: 0,
        rust_log: "error".to_string(),
    };
    let state = AppState {
        backend: BackendClient::new(reqwest::Client::new(), config.backend_url.clone()),
        config,
    };
    spawn(routes::create_router(state)).await
}

/// A stub backend serving one fixed submission detail payload.
fn detail_stub(payload: Value) -> Router {
    Router::new().route(
        "/submission/{filename}",
        get(move || {
            let payload = payload.clone();
            async move { Json(payload) }
        }),
    )
}

#[tokio::test]
async fn list_rows_carry_rendered_filter_summary() {
    let stub = Router::new().route(
        "/user_submissions/{user_id}",
        get(|| async {
            Json(json!([{
                "filename": "sub_1.json",
                "submitted_at": "2024-05-01T10:00:00Z",
                "correct": 4,
                "total": 5,
                "filters": [{ "subject": "Physics", "grade": 10, "difficulty": "hard" }]
            }]))
        }),
    );
    let backend = spawn(stub).await;
    let address = spawn_app(&backend).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/user_submissions/testuser", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let rows: Value = response.json().await.unwrap();
    assert_eq!(rows[0]["filename"], "sub_1.json");
    assert_eq!(rows[0]["subject_summary"], "Physics (G10, hard)");
    assert_eq!(rows[0]["correct"], 4);
    assert_eq!(rows[0]["total"], 5);
    assert!(
        rows[0]["submitted_at"]
            .as_str()
            .is_some_and(|ts| ts.starts_with("2024-05-01T10:00:00")),
        "timestamp should round-trip: {}",
        rows[0]["submitted_at"]
    );
}

#[tokio::test]
async fn list_failure_surfaces_fixed_message() {
    let stub = Router::new().route(
        "/user_submissions/{user_id}",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let backend = spawn(stub).await;
    let address = spawn_app(&backend).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/user_submissions/testuser", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to load previous tests.");
}

#[tokio::test]
async fn detail_builds_review_and_performance() {
    let backend = spawn(detail_stub(json!({
        "submitted_at": "2024-05-01T10:00:00Z",
        "correct": 1,
        "total": 2,
        "score": 0.5,
        "filters": [{ "subject": "Math", "grade": "11", "difficulty": "easy" }],
        "questions": [
            { "id": 1, "subject": "Math", "topic": "Algebra", "answer": "4", "question": "2+2?" },
            { "id": 2, "subject": "Math", "topic": "Geometry", "correct_answer": "90" }
        ],
        "answers": { "1": "4", "2": "45" }
    })))
    .await;
    let address = spawn_app(&backend).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/submission/sub_1.json", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let review: Value = response.json().await.unwrap();

    assert_eq!(review["subject_summary"], "Math (G11, easy)");
    assert_eq!(review["score"], 0.5);

    let questions = review["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0]["identity"], "1");
    assert_eq!(questions[0]["question"], "2+2?");
    assert_eq!(questions[0]["is_correct"], true);
    assert_eq!(questions[1]["user_answer"], "45");
    assert_eq!(questions[1]["correct_answer"], "90");
    assert_eq!(questions[1]["is_correct"], false);

    let subjects = &review["performance"]["subjects"];
    assert_eq!(subjects["labels"], json!(["Math"]));
    assert_eq!(subjects["correct"], json!([1]));
    assert_eq!(subjects["incorrect"], json!([1]));

    let topics = &review["performance"]["topics"];
    assert_eq!(topics["labels"], json!(["Algebra", "Geometry"]));
    assert_eq!(topics["correct"], json!([1, 0]));
    assert_eq!(topics["incorrect"], json!([0, 1]));
}

#[tokio::test]
async fn prejoined_rows_replace_join_but_not_charts() {
    let backend = spawn(detail_stub(json!({
        "correct": 1,
        "total": 2,
        "questions_with_answers": [
            {
                "question": "Capital of France?",
                "user_answer": "  Paris ",
                "correct_answer": "paris",
                "subject": "Geography",
                "topic": "Europe"
            },
            { "question": "Capital of Spain?", "correct_answer": "Madrid" }
        ]
    })))
    .await;
    let address = spawn_app(&backend).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/submission/legacy.json", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let review: Value = response.json().await.unwrap();

    let questions = review["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0]["is_correct"], true);
    assert_eq!(questions[0]["subject"], "Geography");
    assert_eq!(questions[1]["is_correct"], false);
    assert_eq!(questions[1]["user_answer"], Value::Null);

    // The legacy rows never fed the charts.
    assert_eq!(review["performance"]["subjects"]["labels"], json!([]));
    assert_eq!(review["performance"]["topics"]["labels"], json!([]));
}

#[tokio::test]
async fn malformed_timestamp_degrades_to_null() {
    let backend = spawn(detail_stub(json!({
        "submitted_at": "yesterday",
        "questions": [],
        "answers": {}
    })))
    .await;
    let address = spawn_app(&backend).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/submission/odd.json", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let review: Value = response.json().await.unwrap();
    assert_eq!(review["submitted_at"], Value::Null);
}

#[tokio::test]
async fn detail_failure_surfaces_fixed_message() {
    let stub = Router::new().route(
        "/submission/{filename}",
        get(|| async { StatusCode::NOT_FOUND }),
    );
    let backend = spawn(stub).await;
    let address = spawn_app(&backend).await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/submission/missing.json", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to load test details.");
}
