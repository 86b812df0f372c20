// src/handlers/proxy.rs

use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::client::{BackendClient, ProxiedResponse};

/// POST /generate_exam — forwarded to the backend verbatim.
pub async fn generate_exam(
    State(backend): State<BackendClient>,
    Json(body): Json<Value>,
) -> Response {
    forward(&backend, "generate_exam", body).await
}

/// POST /generate_mcqs — forwarded to the backend verbatim.
pub async fn generate_mcqs(
    State(backend): State<BackendClient>,
    Json(body): Json<Value>,
) -> Response {
    forward(&backend, "generate_mcqs", body).await
}

/// POST /submit_answers — forwarded to the backend verbatim.
pub async fn submit_answers(
    State(backend): State<BackendClient>,
    Json(body): Json<Value>,
) -> Response {
    forward(&backend, "submit_answers", body).await
}

/// POST /feedback — forwarded to the backend verbatim.
pub async fn feedback(State(backend): State<BackendClient>, Json(body): Json<Value>) -> Response {
    forward(&backend, "feedback", body).await
}

/// Relays one POST, passing the upstream status and body through
/// unchanged whether it succeeded or not. A transport failure (no
/// upstream response at all) becomes a 500 with the error message as the
/// body.
async fn forward(backend: &BackendClient, path: &str, body: Value) -> Response {
    match backend.forward(path, &body).await {
        Ok(upstream) => relay(upstream),
        Err(err) => err.into_response(),
    }
}

fn relay(upstream: ProxiedResponse) -> Response {
    let mut response = (upstream.status, upstream.body).into_response();
    if let Some(content_type) = upstream
        .content_type
        .as_deref()
        .and_then(|value| header::HeaderValue::from_str(value).ok())
    {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    response
}
