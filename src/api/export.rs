//! Export endpoint.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, HeaderValue};
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::context::Context;
use crate::di::FromRef;
use crate::error::AppError;
use crate::services::{ExportKind, ExportService};

use super::{blank_as_none, query_params};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ExportParams {
    #[serde(default, deserialize_with = "blank_as_none")]
    float_id: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "blank_as_none")]
    kind: Option<String>,
}

/// The float code ends up inside a quoted `Content-Disposition` filename.
fn check_float_id(float_id: &str) -> Result<(), AppError> {
    if float_id
        .chars()
        .all(|c| c.is_ascii_graphic() && c != '"' && c != '\\')
    {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "floatId contains characters not allowed in a filename: {float_id:?}"
        )))
    }
}

pub(super) async fn csv(
    State(ctx): State<Context>,
    params: Result<Query<ExportParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = query_params(params)?;
    let kind = match params.kind.as_deref() {
        Some(kind) => kind.parse::<ExportKind>().map_err(AppError::BadRequest)?,
        None => ExportKind::default(),
    };
    if let Some(float_id) = params.float_id.as_deref() {
        check_float_id(float_id)?;
    }

    let export = ExportService::from_ref(&ctx)
        .export(kind, params.float_id.as_deref())
        .await;

    let disposition =
        HeaderValue::from_str(&format!("attachment; filename=\"{}\"", export.filename))
            .map_err(|err| AppError::BadRequest(format!("invalid export filename: {err}")))?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/csv; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.content,
    ))
}
