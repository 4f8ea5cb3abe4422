//! Measurement endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::context::Context;
use crate::di::FromRef;
use crate::error::AppError;
use crate::models::{Measurement, NewMeasurement, ProfilePoint};
use crate::repositories::MeasurementRepository;

use super::{blank_as_none, json_body, query_params};

/// Filters for `GET /measurements`. Empty values count as absent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ListParams {
    #[serde(default, deserialize_with = "blank_as_none")]
    float_id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    min_depth: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    max_depth: Option<f64>,
}

impl ListParams {
    fn check_bounds(&self) -> Result<(), AppError> {
        for (name, bound) in [("minDepth", self.min_depth), ("maxDepth", self.max_depth)] {
            if bound.is_some_and(|value| !value.is_finite()) {
                return Err(AppError::BadRequest(format!("{name} must be a finite number")));
            }
        }
        Ok(())
    }
}

/// A depth bound turns on the range filter, with the missing bound open;
/// otherwise a float filter returns that float's depth-sorted profile.
pub(super) async fn list(
    State(ctx): State<Context>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Measurement>>, AppError> {
    let params = query_params(params)?;
    params.check_bounds()?;
    let repo = MeasurementRepository::from_ref(&ctx);

    let measurements = match (params.min_depth, params.max_depth, params.float_id) {
        (None, None, Some(float_id)) => repo.list_by_float(&float_id).await,
        (None, None, None) => repo.list(None).await,
        (min, max, float_id) => {
            let mut in_range = repo
                .list_by_depth_range(
                    min.unwrap_or(f64::NEG_INFINITY),
                    max.unwrap_or(f64::INFINITY),
                )
                .await;
            if let Some(float_id) = float_id {
                in_range.retain(|m| m.float_id == float_id);
            }
            in_range
        }
    };

    Ok(Json(measurements))
}

pub(super) async fn create(
    State(ctx): State<Context>,
    body: Result<Json<NewMeasurement>, JsonRejection>,
) -> Result<(StatusCode, Json<Measurement>), AppError> {
    let input = json_body(body)?;
    let measurement = MeasurementRepository::from_ref(&ctx).create(input).await?;
    Ok((StatusCode::CREATED, Json(measurement)))
}

pub(super) async fn profile(
    State(ctx): State<Context>,
    Path(float_id): Path<String>,
) -> Result<Json<Vec<ProfilePoint>>, AppError> {
    let measurements = MeasurementRepository::from_ref(&ctx)
        .list_by_float(&float_id)
        .await;

    if measurements.is_empty() {
        return Err(AppError::ProfileNotFound(float_id));
    }

    Ok(Json(measurements.iter().map(ProfilePoint::from).collect()))
}
