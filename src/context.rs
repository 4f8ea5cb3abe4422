//! Application context providing dependency injection root.

use std::sync::Arc;

use crate::config::Config;
use crate::di::Context as ContextDerive;
use crate::error::AppError;
use crate::services::{KeywordClassifier, QueryClassifier};
use crate::store::MemoryStore;

/// Shared handle to the in-memory store.
pub type AppStore = Arc<MemoryStore>;

/// Shared query classification strategy.
pub type AppClassifier = Arc<dyn QueryClassifier>;

/// Root application context for dependency injection.
///
/// Built once at process start and cloned into request handlers. Each test
/// builds its own, so no state leaks between them.
#[derive(ContextDerive, Clone)]
pub struct Context {
    /// Float, measurement, and history storage.
    pub store: AppStore,
    /// Application configuration.
    pub config: Arc<Config>,
    /// Query intent classifier.
    pub classifier: AppClassifier,
}

impl Context {
    /// Creates a context with an empty store and the keyword classifier.
    pub fn new(config: Config) -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
            config: Arc::new(config),
            classifier: Arc::new(KeywordClassifier),
        }
    }

    /// Replaces the classification strategy.
    pub fn with_classifier(mut self, classifier: impl QueryClassifier + 'static) -> Self {
        self.classifier = Arc::new(classifier);
        self
    }

    /// Creates a context and loads sample data if the config asks for it.
    pub async fn bootstrap(config: Config) -> Result<Self, AppError> {
        let ctx = Self::new(config);
        if ctx.config.store.seed_sample_data {
            let summary = crate::seed::load_sample_data(&ctx).await?;
            tracing::info!(
                floats = summary.floats,
                measurements = summary.measurements,
                "Loaded sample data"
            );
        }
        Ok(ctx)
    }
}
