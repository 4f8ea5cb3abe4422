//! Chat query endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::di::FromRef;
use crate::error::AppError;
use crate::models::{ChatQuery, QueryIntent};
use crate::repositories::HistoryRepository;
use crate::services::QueryService;

use super::{json_body, query_params};

/// Body for `POST /chat/query`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatQueryRequest {
    #[serde(default)]
    pub user_query: Option<String>,
}

/// Answer returned to chat clients.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatQueryResponse {
    pub response: String,
    pub query_type: QueryIntent,
    pub result_data: Option<serde_json::Value>,
    pub timestamp: DateTime<Utc>,
}

impl From<ChatQuery> for ChatQueryResponse {
    fn from(query: ChatQuery) -> Self {
        Self {
            response: query.response,
            query_type: query.query_type,
            result_data: query.result_data,
            timestamp: query.created_at,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct HistoryParams {
    limit: Option<usize>,
}

pub(super) async fn query(
    State(ctx): State<Context>,
    body: Result<Json<ChatQueryRequest>, JsonRejection>,
) -> Result<Json<ChatQueryResponse>, AppError> {
    let user_query = json_body(body)?
        .user_query
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("userQuery is required".to_string()))?;

    let saved = QueryService::from_ref(&ctx).execute(&user_query).await;
    tracing::info!(query_type = %saved.query_type, "Answered chat query");
    Ok(Json(saved.into()))
}

pub(super) async fn history(
    State(ctx): State<Context>,
    params: Result<Query<HistoryParams>, QueryRejection>,
) -> Result<Json<Vec<ChatQuery>>, AppError> {
    let limit = query_params(params)?
        .limit
        .unwrap_or(ctx.config.chat.history_limit);
    Ok(Json(HistoryRepository::from_ref(&ctx).list(limit).await))
}
