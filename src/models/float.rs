//! Argo float model.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Operational status of a float.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloatStatus {
    #[default]
    Active,
    Inactive,
}

impl FloatStatus {
    /// Lowercase name used on the wire and in exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            FloatStatus::Active => "active",
            FloatStatus::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for FloatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FloatStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" | "Active" => Ok(FloatStatus::Active),
            "inactive" | "Inactive" => Ok(FloatStatus::Inactive),
            _ => Err(format!(
                "Invalid status '{}'. Valid values: active, inactive",
                s
            )),
        }
    }
}

/// An autonomous profiling float.
///
/// `id` is generated by the store; `float_id` is the external code
/// (e.g. "ARGO001") and is unique across the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Float {
    /// Internal identifier (ULID).
    pub id: String,
    /// External float code.
    pub float_id: String,
    /// Latitude in degrees, within [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, within [-180, 180].
    pub longitude: f64,
    pub status: FloatStatus,
    /// Ocean region label, e.g. "Indian Ocean".
    pub region: Option<String>,
    pub deployment_date: DateTime<Utc>,
    pub last_update: DateTime<Utc>,
}

/// Input for creating a float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFloat {
    pub float_id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Defaults to active when omitted.
    #[serde(default)]
    pub status: Option<FloatStatus>,
    #[serde(default)]
    pub region: Option<String>,
}

impl NewFloat {
    /// Creates input for an active float with no region.
    pub fn new(float_id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            float_id: float_id.into(),
            latitude,
            longitude,
            status: None,
            region: None,
        }
    }

    pub fn with_status(mut self, status: FloatStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Checks the code is present and the position is a real coordinate.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.float_id.trim().is_empty() {
            return Err(AppError::Validation("floatId must not be empty".to_string()));
        }
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(AppError::Validation(format!(
                "latitude {} is outside [-90, 90]",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(AppError::Validation(format!(
                "longitude {} is outside [-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }

    /// Builds the stored record, stamping both timestamps with `now`.
    pub(crate) fn into_float(self, id: String, now: DateTime<Utc>) -> Float {
        Float {
            id,
            float_id: self.float_id,
            latitude: self.latitude,
            longitude: self.longitude,
            status: self.status.unwrap_or_default(),
            region: self.region,
            deployment_date: now,
            last_update: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&FloatStatus::Inactive).unwrap();
        assert_eq!(json, "\"inactive\"");
        assert_eq!("active".parse::<FloatStatus>(), Ok(FloatStatus::Active));
        assert!("retired".parse::<FloatStatus>().is_err());
    }

    #[test]
    fn test_new_float_deserializes_camel_case_with_defaults() {
        let input: NewFloat =
            serde_json::from_str(r#"{"floatId":"ARGO009","latitude":-5.0,"longitude":70.0}"#)
                .unwrap();
        assert_eq!(input.float_id, "ARGO009");
        assert_eq!(input.status, None);
        assert_eq!(input.region, None);
    }

    #[test]
    fn test_validate_rejects_out_of_range_coordinates() {
        assert!(NewFloat::new("A", 90.0, -180.0).validate().is_ok());
        assert!(NewFloat::new("A", 90.5, 0.0).validate().is_err());
        assert!(NewFloat::new("A", 0.0, 180.1).validate().is_err());
        assert!(NewFloat::new("A", f64::NAN, 0.0).validate().is_err());
        assert!(NewFloat::new("  ", 0.0, 0.0).validate().is_err());
    }

    #[test]
    fn test_into_float_defaults_to_active() {
        let now = Utc::now();
        let float = NewFloat::new("ARGO001", -10.5, 75.2).into_float("id-1".to_string(), now);
        assert_eq!(float.status, FloatStatus::Active);
        assert_eq!(float.deployment_date, now);
        assert_eq!(float.last_update, now);

        let json = serde_json::to_value(&float).unwrap();
        assert_eq!(json["floatId"], "ARGO001");
        assert!(json.get("deploymentDate").is_some());
    }
}
