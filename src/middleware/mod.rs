use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request},
    http::{header, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::info;

/// Outermost layer; never short-circuits. Runs the rest of the chain, then
/// logs the status code observed on the returned response, so rejections
/// from inner layers and handler outcomes are both captured.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let remote = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ci| ci.0.to_string())
        .unwrap_or_else(|| "-".to_string());

    let start = Instant::now();
    let response = next.run(req).await;
    let elapsed = start.elapsed();

    info!(
        %method,
        %path,
        %remote,
        status = response.status().as_u16(),
        elapsed_ms = elapsed.as_millis(),
        "request"
    );

    response
}

/// Rejects create requests whose body is not declared as JSON. Requests
/// without a body bypass the check.
pub async fn require_json_content_type(req: Request, next: Next) -> Response {
    if req.method() == Method::POST && has_body(&req) && !declares_json(&req) {
        return reject(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Content-Type must be application/json",
        );
    }
    next.run(req).await
}

/// Rejects create requests lacking a non-empty `Owner` header.
pub async fn require_owner_header(req: Request, next: Next) -> Response {
    if req.method() == Method::POST {
        let owner = req
            .headers()
            .get("Owner")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        if owner.is_empty() {
            return reject(StatusCode::BAD_REQUEST, "Owner header is required");
        }
    }
    next.run(req).await
}

fn has_body(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .is_some_and(|len| len > 0)
        || req.headers().contains_key(header::TRANSFER_ENCODING)
}

fn declares_json(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.split(';').next().unwrap_or("").trim() == "application/json")
        .unwrap_or(false)
}

fn reject(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
