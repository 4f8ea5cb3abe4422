//! Query execution: classify, aggregate, record.

use serde_json::json;

use crate::context::{AppClassifier, Context};
use crate::di::FromContext;
use crate::models::{ChatQuery, Measurement, NewChatQuery, QueryIntent};
use crate::repositories::{FloatCounts, FloatRepository, HistoryRepository, MeasurementRepository};

const HELP_TEXT: &str = "I can help you explore oceanographic data! Try asking about \
temperature profiles, salinity measurements, float locations, or specific depth ranges.";

/// The answer to a classified query, before it is recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryAnswer {
    pub intent: QueryIntent,
    pub response: String,
    pub result_data: Option<serde_json::Value>,
}

/// Runs free-text queries against the store and records them in history.
///
/// Missing data is an answer, not an error: averages over zero readings
/// produce a "no data" response.
#[derive(FromContext, Clone)]
pub struct QueryService {
    classifier: AppClassifier,
    floats: FloatRepository,
    measurements: MeasurementRepository,
    history: HistoryRepository,
}

impl QueryService {
    /// Classify and answer a query, then append it to the history log.
    pub async fn execute(&self, user_query: &str) -> ChatQuery {
        let intent = self.classifier.classify(user_query);
        tracing::debug!(query = %user_query, intent = %intent, "Classified query");

        let answer = self.answer(intent).await;
        self.history
            .append(NewChatQuery {
                user_query: user_query.to_string(),
                query_type: answer.intent,
                response: answer.response,
                result_data: answer.result_data,
            })
            .await
    }

    /// Compute the answer for an intent without recording it.
    pub async fn answer(&self, intent: QueryIntent) -> QueryAnswer {
        match intent {
            QueryIntent::Temperature => temperature_answer(&self.measurements.list(None).await),
            QueryIntent::Salinity => salinity_answer(&self.measurements.list(None).await),
            QueryIntent::Location => location_answer(self.floats.counts().await),
            QueryIntent::General => QueryAnswer {
                intent,
                response: HELP_TEXT.to_string(),
                result_data: None,
            },
        }
    }
}

/// Arithmetic mean, or `None` for an empty input.
fn mean(values: impl ExactSizeIterator<Item = f64>) -> Option<f64> {
    let count = values.len();
    if count == 0 {
        return None;
    }
    Some(values.sum::<f64>() / count as f64)
}

fn temperature_answer(measurements: &[Measurement]) -> QueryAnswer {
    let intent = QueryIntent::Temperature;
    match mean(measurements.iter().map(|m| m.temperature)) {
        Some(avg) => QueryAnswer {
            intent,
            response: format!(
                "Based on current data, the average temperature across all measurements is \
                 {:.1}°C. I found {} temperature readings.",
                avg,
                measurements.len()
            ),
            result_data: Some(json!({
                "averageTemperature": avg,
                "measurementCount": measurements.len(),
            })),
        },
        None => no_data(intent, "temperature"),
    }
}

fn salinity_answer(measurements: &[Measurement]) -> QueryAnswer {
    let intent = QueryIntent::Salinity;
    match mean(measurements.iter().map(|m| m.salinity)) {
        Some(avg) => QueryAnswer {
            intent,
            response: format!(
                "The average salinity across all measurements is {:.1} PSU, from {} readings.",
                avg,
                measurements.len()
            ),
            result_data: Some(json!({
                "averageSalinity": avg,
                "measurementCount": measurements.len(),
            })),
        },
        None => no_data(intent, "salinity"),
    }
}

fn location_answer(counts: FloatCounts) -> QueryAnswer {
    QueryAnswer {
        intent: QueryIntent::Location,
        response: format!(
            "I found {} total floats, with {} currently active.",
            counts.total, counts.active
        ),
        result_data: Some(json!({
            "totalFloats": counts.total,
            "activeFloats": counts.active,
        })),
    }
}

fn no_data(intent: QueryIntent, quantity: &str) -> QueryAnswer {
    QueryAnswer {
        intent,
        response: format!(
            "No {} measurements are available yet, so there is no average to report.",
            quantity
        ),
        result_data: Some(json!({ "measurementCount": 0 })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::di::FromRef;
    use crate::models::{FloatStatus, NewFloat, NewMeasurement};

    async fn example_context() -> Context {
        let ctx = Context::new(Config::default());
        let floats = FloatRepository::from_ref(&ctx);
        floats.create(NewFloat::new("ARGO001", -10.5, 75.2)).await.unwrap();
        floats
            .create(NewFloat::new("ARGO002", -8.3, 78.1).with_status(FloatStatus::Inactive))
            .await
            .unwrap();

        let measurements = MeasurementRepository::from_ref(&ctx);
        measurements
            .create(NewMeasurement::new("ARGO001", 0.0, 28.5, 34.7))
            .await
            .unwrap();
        measurements
            .create(NewMeasurement::new("ARGO001", 100.0, 26.0, 35.0))
            .await
            .unwrap();
        ctx
    }

    #[tokio::test]
    async fn test_temperature_mean() {
        let ctx = example_context().await;
        let service = QueryService::from_ref(&ctx);

        let saved = service.execute("average temperature").await;
        assert_eq!(saved.query_type, QueryIntent::Temperature);
        let data = saved.result_data.unwrap();
        assert_eq!(data["averageTemperature"], 27.25);
        assert_eq!(data["measurementCount"], 2);
        assert!(saved.response.contains("27.2") || saved.response.contains("27.3"));
    }

    #[tokio::test]
    async fn test_salinity_mean() {
        let ctx = example_context().await;
        let answer = QueryService::from_ref(&ctx).answer(QueryIntent::Salinity).await;
        let avg = answer.result_data.unwrap()["averageSalinity"].as_f64().unwrap();
        assert!((avg - 34.85).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_location_counts() {
        let ctx = example_context().await;
        let saved = QueryService::from_ref(&ctx)
            .execute("where is each float?")
            .await;
        assert_eq!(saved.query_type, QueryIntent::Location);
        assert_eq!(
            saved.result_data,
            Some(json!({ "totalFloats": 2, "activeFloats": 1 }))
        );
    }

    #[tokio::test]
    async fn test_empty_store_answers_without_nan() {
        let ctx = Context::new(Config::default());
        let service = QueryService::from_ref(&ctx);

        for (text, intent) in [
            ("temperature please", QueryIntent::Temperature),
            ("salinity please", QueryIntent::Salinity),
        ] {
            let saved = service.execute(text).await;
            assert_eq!(saved.query_type, intent);
            assert!(saved.response.starts_with("No "));
            assert!(!saved.response.contains("NaN"));
            assert_eq!(saved.result_data, Some(json!({ "measurementCount": 0 })));
        }
    }

    #[tokio::test]
    async fn test_general_is_help_text_and_recorded() {
        let ctx = Context::new(Config::default());
        let service = QueryService::from_ref(&ctx);

        let saved = service.execute("hi").await;
        assert_eq!(saved.query_type, QueryIntent::General);
        assert_eq!(saved.response, HELP_TEXT);
        assert_eq!(saved.result_data, None);

        let history = HistoryRepository::from_ref(&ctx).list(10).await;
        assert_eq!(history, vec![saved]);
    }

    #[tokio::test]
    async fn test_custom_classifier_is_used() {
        struct AlwaysLocation;
        impl crate::services::QueryClassifier for AlwaysLocation {
            fn classify(&self, _query: &str) -> QueryIntent {
                QueryIntent::Location
            }
        }

        let ctx = Context::new(Config::default()).with_classifier(AlwaysLocation);
        let saved = QueryService::from_ref(&ctx).execute("temperature").await;
        assert_eq!(saved.query_type, QueryIntent::Location);
    }

    #[test]
    fn test_mean_of_empty_is_none() {
        assert_eq!(mean(Vec::<f64>::new().into_iter()), None);
        assert_eq!(mean(vec![1.0, 2.0, 6.0].into_iter()), Some(3.0));
    }
}
