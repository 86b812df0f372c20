// src/routes.rs

use axum::{
    Json, Router,
    http::Method,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{proxy, submissions},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Review routes (submission list and detail) run the normalizer and
///   aggregator over fetched snapshots.
/// * Exam routes are a verbatim relay to the scoring backend.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(root))
        .route(
            "/user_submissions/{user_id}",
            get(submissions::list_submissions),
        )
        .route("/submission/{filename}", get(submissions::get_submission))
        .route("/generate_exam", post(proxy::generate_exam))
        .route("/generate_mcqs", post(proxy::generate_mcqs))
        .route("/submit_answers", post(proxy::submit_answers))
        .route("/feedback", post(proxy::feedback))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "examdesk companion service is running."
    }))
}
