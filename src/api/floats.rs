//! Float endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::context::Context;
use crate::di::FromRef;
use crate::error::AppError;
use crate::models::{Float, FloatStatus, NewFloat};
use crate::repositories::FloatRepository;

use super::json_body;

/// Body for `PATCH /floats/:floatId/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: FloatStatus,
}

pub(super) async fn list(State(ctx): State<Context>) -> Json<Vec<Float>> {
    Json(FloatRepository::from_ref(&ctx).list().await)
}

pub(super) async fn get(
    State(ctx): State<Context>,
    Path(float_id): Path<String>,
) -> Result<Json<Float>, AppError> {
    FloatRepository::from_ref(&ctx)
        .find_by_float_id(&float_id)
        .await
        .map(Json)
        .ok_or(AppError::FloatNotFound(float_id))
}

pub(super) async fn create(
    State(ctx): State<Context>,
    body: Result<Json<NewFloat>, JsonRejection>,
) -> Result<(StatusCode, Json<Float>), AppError> {
    let input = json_body(body)?;
    let float = FloatRepository::from_ref(&ctx).create(input).await?;
    tracing::info!(float_id = %float.float_id, "Created float");
    Ok((StatusCode::CREATED, Json(float)))
}

pub(super) async fn update_status(
    State(ctx): State<Context>,
    Path(float_id): Path<String>,
    body: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<Float>, AppError> {
    let request = json_body(body)?;
    FloatRepository::from_ref(&ctx)
        .update_status(&float_id, request.status)
        .await
        .map(Json)
        .ok_or(AppError::FloatNotFound(float_id))
}
