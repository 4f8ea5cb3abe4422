//! Depth-tagged readings taken by a float.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One reading from a float at a given depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// Internal identifier (ULID).
    pub id: String,
    /// External code of the owning float.
    pub float_id: String,
    /// Depth in meters.
    pub depth: f64,
    /// Temperature in °C.
    pub temperature: f64,
    /// Salinity in PSU.
    pub salinity: f64,
    /// Pressure in dbar.
    pub pressure: Option<f64>,
    pub cycle_number: Option<u32>,
    pub recorded_at: DateTime<Utc>,
}

/// Input for recording a measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMeasurement {
    pub float_id: String,
    pub depth: f64,
    pub temperature: f64,
    pub salinity: f64,
    #[serde(default)]
    pub pressure: Option<f64>,
    #[serde(default)]
    pub cycle_number: Option<u32>,
}

impl NewMeasurement {
    pub fn new(float_id: impl Into<String>, depth: f64, temperature: f64, salinity: f64) -> Self {
        Self {
            float_id: float_id.into(),
            depth,
            temperature,
            salinity,
            pressure: None,
            cycle_number: None,
        }
    }

    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = Some(pressure);
        self
    }

    pub fn with_cycle(mut self, cycle_number: u32) -> Self {
        self.cycle_number = Some(cycle_number);
        self
    }

    /// Checks field ranges. Whether the float exists is checked by the repository.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.float_id.trim().is_empty() {
            return Err(AppError::Validation("floatId must not be empty".to_string()));
        }
        if !self.depth.is_finite() || self.depth < 0.0 {
            return Err(AppError::Validation(format!(
                "depth {} must be a non-negative number",
                self.depth
            )));
        }
        if !self.temperature.is_finite() {
            return Err(AppError::Validation("temperature must be finite".to_string()));
        }
        if !self.salinity.is_finite() {
            return Err(AppError::Validation("salinity must be finite".to_string()));
        }
        if let Some(pressure) = self.pressure {
            if !pressure.is_finite() || pressure < 0.0 {
                return Err(AppError::Validation(format!(
                    "pressure {} must be a non-negative number",
                    pressure
                )));
            }
        }
        if self.cycle_number == Some(0) {
            return Err(AppError::Validation(
                "cycleNumber must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn into_measurement(self, id: String, now: DateTime<Utc>) -> Measurement {
        Measurement {
            id,
            float_id: self.float_id,
            depth: self.depth,
            temperature: self.temperature,
            salinity: self.salinity,
            pressure: self.pressure,
            cycle_number: self.cycle_number,
            recorded_at: now,
        }
    }
}

/// A single point of a vertical profile, as served to chart clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfilePoint {
    pub depth: f64,
    pub temperature: f64,
    pub salinity: f64,
    pub pressure: Option<f64>,
}

impl From<&Measurement> for ProfilePoint {
    fn from(m: &Measurement) -> Self {
        Self {
            depth: m.depth,
            temperature: m.temperature,
            salinity: m.salinity,
            pressure: m.pressure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ranges() {
        assert!(NewMeasurement::new("ARGO001", 0.0, 28.5, 34.7).validate().is_ok());
        assert!(NewMeasurement::new("ARGO001", -1.0, 28.5, 34.7).validate().is_err());
        assert!(NewMeasurement::new("ARGO001", 10.0, f64::INFINITY, 34.7)
            .validate()
            .is_err());
        assert!(NewMeasurement::new("ARGO001", 10.0, 20.0, 35.0)
            .with_cycle(0)
            .validate()
            .is_err());
        assert!(NewMeasurement::new("ARGO001", 10.0, 20.0, 35.0)
            .with_pressure(-3.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_new_measurement_optional_fields_default() {
        let input: NewMeasurement = serde_json::from_str(
            r#"{"floatId":"ARGO001","depth":50,"temperature":27.8,"salinity":34.8}"#,
        )
        .unwrap();
        assert_eq!(input.pressure, None);
        assert_eq!(input.cycle_number, None);
    }

    #[test]
    fn test_cycle_number_rejects_negative_json() {
        let result: Result<NewMeasurement, _> = serde_json::from_str(
            r#"{"floatId":"ARGO001","depth":50,"temperature":27.8,"salinity":34.8,"cycleNumber":-2}"#,
        );
        assert!(result.is_err());
    }
}
