//! Measurement repository.

use chrono::Utc;

use crate::context::{AppStore, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::{generate_ulid, Measurement, NewMeasurement};

/// Repository for Measurement operations.
#[derive(FromContext, Clone)]
pub struct MeasurementRepository {
    store: AppStore,
}

impl MeasurementRepository {
    /// List measurements, optionally restricted to one float.
    pub async fn list(&self, float_id: Option<&str>) -> Vec<Measurement> {
        let state = self.store.read().await;
        state
            .measurements
            .iter()
            .filter(|m| float_id.map_or(true, |code| m.float_id == code))
            .cloned()
            .collect()
    }

    /// List a float's measurements sorted by depth, shallowest first.
    ///
    /// Profile charts depend on this order. Equal depths keep insertion order.
    pub async fn list_by_float(&self, float_id: &str) -> Vec<Measurement> {
        let mut measurements = self.list(Some(float_id)).await;
        measurements.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        measurements
    }

    /// List measurements with `min <= depth <= max`, in insertion order.
    pub async fn list_by_depth_range(&self, min: f64, max: f64) -> Vec<Measurement> {
        let state = self.store.read().await;
        state
            .measurements
            .iter()
            .filter(|m| m.depth >= min && m.depth <= max)
            .cloned()
            .collect()
    }

    /// Record a measurement for an existing float.
    pub async fn create(&self, input: NewMeasurement) -> Result<Measurement, AppError> {
        if let Err(err) = input.validate() {
            tracing::warn!(float_id = %input.float_id, error = %err, "Rejected measurement");
            return Err(err);
        }

        let mut state = self.store.write().await;
        if state.float_by_code(&input.float_id).is_none() {
            tracing::warn!(float_id = %input.float_id, "Measurement for unknown float");
            return Err(AppError::UnknownFloatReference(input.float_id));
        }

        let measurement = input.into_measurement(generate_ulid(), Utc::now());
        let measurement = state.measurements.insert(measurement).clone();
        tracing::debug!(
            id = %measurement.id,
            float_id = %measurement.float_id,
            depth = measurement.depth,
            "Recorded measurement"
        );
        Ok(measurement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::di::FromRef;
    use crate::models::NewFloat;
    use crate::repositories::FloatRepository;

    async fn setup() -> MeasurementRepository {
        let ctx = Context::new(Config::default());
        let floats = FloatRepository::from_ref(&ctx);
        floats.create(NewFloat::new("ARGO001", 0.0, 0.0)).await.unwrap();
        floats.create(NewFloat::new("ARGO002", 0.0, 0.0)).await.unwrap();
        MeasurementRepository::from_ref(&ctx)
    }

    fn depths(measurements: &[Measurement]) -> Vec<f64> {
        measurements.iter().map(|m| m.depth).collect()
    }

    #[tokio::test]
    async fn test_list_by_float_sorts_by_depth() {
        let repo = setup().await;
        for depth in [200.0, 0.0, 100.0] {
            repo.create(NewMeasurement::new("ARGO001", depth, 20.0, 35.0))
                .await
                .unwrap();
        }
        repo.create(NewMeasurement::new("ARGO002", 50.0, 20.0, 35.0))
            .await
            .unwrap();

        let profile = repo.list_by_float("ARGO001").await;
        assert_eq!(depths(&profile), vec![0.0, 100.0, 200.0]);
        assert!(profile.iter().all(|m| m.float_id == "ARGO001"));
    }

    #[tokio::test]
    async fn test_list_with_optional_filter() {
        let repo = setup().await;
        repo.create(NewMeasurement::new("ARGO001", 10.0, 20.0, 35.0))
            .await
            .unwrap();
        repo.create(NewMeasurement::new("ARGO002", 5.0, 21.0, 35.1))
            .await
            .unwrap();

        assert_eq!(repo.list(None).await.len(), 2);
        let only = repo.list(Some("ARGO002")).await;
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].temperature, 21.0);
        assert!(repo.list(Some("ARGO404")).await.is_empty());
    }

    #[tokio::test]
    async fn test_depth_range_is_inclusive() {
        let repo = setup().await;
        for depth in [0.0, 50.0, 100.0, 150.0] {
            repo.create(NewMeasurement::new("ARGO001", depth, 20.0, 35.0))
                .await
                .unwrap();
        }

        assert_eq!(
            depths(&repo.list_by_depth_range(50.0, 100.0).await),
            vec![50.0, 100.0]
        );
        assert!(repo.list_by_depth_range(101.0, 149.0).await.is_empty());
        assert!(repo.list_by_depth_range(100.0, 50.0).await.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_float_is_a_reference_error() {
        let repo = setup().await;
        let err = repo
            .create(NewMeasurement::new("ARGO404", 0.0, 20.0, 35.0))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnknownFloatReference(ref code) if code == "ARGO404"));
        assert_eq!(err.kind(), crate::error::ErrorKind::Reference);
        assert!(repo.list(None).await.is_empty());
    }

    #[tokio::test]
    async fn test_create_keeps_optional_fields() {
        let repo = setup().await;
        let m = repo
            .create(
                NewMeasurement::new("ARGO001", 50.0, 27.8, 34.8)
                    .with_pressure(50.0)
                    .with_cycle(1),
            )
            .await
            .unwrap();
        assert_eq!(m.pressure, Some(50.0));
        assert_eq!(m.cycle_number, Some(1));
        assert!(!m.id.is_empty());
    }
}
