use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{CreateFruitRequest, Fruit},
    AppState,
};

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_fruit(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateFruitRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Fruit>)> {
    // Middleware already enforces this; checked again so the handler is
    // safe to call outside the chain.
    let owner = headers
        .get("Owner")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if owner.is_empty() {
        return Err(AppError::BadRequest("Owner header is required".to_string()));
    }

    let Json(req) = payload
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e.body_text())))?;

    let fruit = state
        .service
        .create_fruit(req.name, req.quantity, req.price, owner.to_string())
        .await?;

    Ok((StatusCode::CREATED, Json(fruit)))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_fruit_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<Fruit>)> {
    let fruit = state.service.get_fruit_by_id(&id).await?;
    Ok((StatusCode::OK, Json(fruit)))
}
