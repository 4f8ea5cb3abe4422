//! Bundled sample data: four Indian Ocean floats and two cycle-1 profiles.

use crate::context::Context;
use crate::di::FromRef;
use crate::error::AppError;
use crate::models::{FloatStatus, NewFloat, NewMeasurement};
use crate::repositories::{FloatRepository, MeasurementRepository};

const REGION: &str = "Indian Ocean";

/// What the seeder inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub floats: usize,
    pub measurements: usize,
}

fn sample_floats() -> Vec<NewFloat> {
    [
        ("ARGO001", -10.5, 75.2, FloatStatus::Active),
        ("ARGO002", -8.3, 78.1, FloatStatus::Active),
        ("ARGO003", -12.1, 72.8, FloatStatus::Inactive),
        ("ARGO004", -15.7, 80.5, FloatStatus::Active),
    ]
    .into_iter()
    .map(|(code, lat, lon, status)| {
        NewFloat::new(code, lat, lon)
            .with_status(status)
            .with_region(REGION)
    })
    .collect()
}

/// (float, depth, temperature, salinity); pressure tracks depth.
const SAMPLE_PROFILES: &[(&str, f64, f64, f64)] = &[
    ("ARGO001", 0.0, 28.5, 34.7),
    ("ARGO001", 50.0, 27.8, 34.8),
    ("ARGO001", 100.0, 26.2, 34.9),
    ("ARGO001", 150.0, 24.5, 35.0),
    ("ARGO001", 200.0, 22.8, 35.1),
    ("ARGO002", 0.0, 27.8, 34.9),
    ("ARGO002", 50.0, 27.1, 35.0),
    ("ARGO002", 100.0, 25.8, 35.1),
    ("ARGO002", 150.0, 24.2, 35.2),
    ("ARGO002", 200.0, 22.5, 35.3),
];

/// Insert the sample floats and measurements through the repositories.
///
/// Fails with `DuplicateFloat` if the store already holds a sample float.
pub async fn load_sample_data(ctx: &Context) -> Result<SeedSummary, AppError> {
    let floats = FloatRepository::from_ref(ctx);
    let measurements = MeasurementRepository::from_ref(ctx);

    let mut summary = SeedSummary {
        floats: 0,
        measurements: 0,
    };

    for input in sample_floats() {
        floats.create(input).await?;
        summary.floats += 1;
    }

    for &(code, depth, temperature, salinity) in SAMPLE_PROFILES {
        measurements
            .create(
                NewMeasurement::new(code, depth, temperature, salinity)
                    .with_pressure(depth)
                    .with_cycle(1),
            )
            .await?;
        summary.measurements += 1;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn test_load_sample_data() {
        let ctx = Context::new(Config::default());
        let summary = load_sample_data(&ctx).await.unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                floats: 4,
                measurements: 10
            }
        );

        let floats = FloatRepository::from_ref(&ctx);
        let counts = floats.counts().await;
        assert_eq!((counts.total, counts.active), (4, 3));

        let profile = MeasurementRepository::from_ref(&ctx)
            .list_by_float("ARGO002")
            .await;
        assert_eq!(profile.len(), 5);
        assert_eq!(profile[0].temperature, 27.8);
        assert_eq!(profile[4].pressure, Some(200.0));
    }

    #[tokio::test]
    async fn test_seeding_twice_fails() {
        let ctx = Context::new(Config::default());
        load_sample_data(&ctx).await.unwrap();
        assert!(matches!(
            load_sample_data(&ctx).await,
            Err(AppError::DuplicateFloat(_))
        ));
    }

    #[tokio::test]
    async fn test_bootstrap_respects_config() {
        let mut config = Config::default();
        config.store.seed_sample_data = false;
        let empty = Context::bootstrap(config).await.unwrap();
        assert!(FloatRepository::from_ref(&empty).list().await.is_empty());

        let seeded = Context::bootstrap(Config::default()).await.unwrap();
        assert_eq!(FloatRepository::from_ref(&seeded).list().await.len(), 4);
    }
}
