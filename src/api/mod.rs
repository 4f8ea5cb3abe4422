//! HTTP API.
//!
//! Thin axum handlers that resolve repositories and services from the
//! [`Context`] and map [`AppError`]s to status codes.
//!
//! Endpoints (all under `/api`):
//! - GET   /floats                        - List floats
//! - POST  /floats                        - Create a float
//! - GET   /floats/:floatId               - Get a float by code
//! - PATCH /floats/:floatId/status        - Update a float's status
//! - GET   /measurements?floatId&minDepth&maxDepth - List measurements
//! - POST  /measurements                  - Record a measurement
//! - GET   /measurements/:floatId/profile - Depth profile of a float
//! - POST  /chat/query                    - Run a query
//! - GET   /chat/history?limit            - Recent queries
//! - GET   /export/csv?floatId&type       - Delimited-text export
//! - GET   /health                        - Liveness

mod chat;
mod export;
mod floats;
mod measurements;

use std::fmt::Display;
use std::str::FromStr;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::http::{header, Method};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde::{Deserialize, Deserializer};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::context::Context;
use crate::error::AppError;

pub use chat::{ChatQueryRequest, ChatQueryResponse};
pub use floats::UpdateStatusRequest;

/// Build the API router over a context.
pub fn router(ctx: Context) -> Router {
    let enable_cors = ctx.config.server.enable_cors;

    let api_routes = Router::new()
        .route("/floats", get(floats::list).post(floats::create))
        .route("/floats/:float_id", get(floats::get))
        .route("/floats/:float_id/status", patch(floats::update_status))
        .route(
            "/measurements",
            get(measurements::list).post(measurements::create),
        )
        .route("/measurements/:float_id/profile", get(measurements::profile))
        .route("/chat/query", post(chat::query))
        .route("/chat/history", get(chat::history))
        .route("/export/csv", get(export::csv))
        .route("/health", get(health))
        .with_state(ctx);

    let router = Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .allow_origin(Any);
        router.layer(cors)
    } else {
        router
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "FloatChat API",
    }))
}

/// Unwrap a JSON body, turning extractor rejections into `BadRequest`.
fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Unwrap query parameters, turning extractor rejections into `BadRequest`.
fn query_params<T>(params: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    params
        .map(|Query(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Query-string field where an empty value (`?floatId=`) counts as absent.
///
/// Use with `#[serde(default, deserialize_with = "blank_as_none")]`.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
