//! Float repository.

use chrono::Utc;

use crate::context::{AppStore, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::{generate_ulid, Float, FloatStatus, NewFloat};

/// Totals used by location queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatCounts {
    pub total: usize,
    pub active: usize,
}

/// Repository for Float operations.
#[derive(FromContext, Clone)]
pub struct FloatRepository {
    store: AppStore,
}

impl FloatRepository {
    /// List all floats in insertion order.
    pub async fn list(&self) -> Vec<Float> {
        self.store.read().await.floats.iter().cloned().collect()
    }

    /// Find a float by internal ID.
    pub async fn find_by_id(&self, id: &str) -> Option<Float> {
        self.store.read().await.floats.get(id).cloned()
    }

    /// Find a float by its external code (e.g. "ARGO001").
    pub async fn find_by_float_id(&self, float_id: &str) -> Option<Float> {
        self.store.read().await.float_by_code(float_id).cloned()
    }

    /// Create a float.
    ///
    /// Fails if the input is invalid or the float code is already taken; the
    /// store is left unchanged in both cases.
    pub async fn create(&self, input: NewFloat) -> Result<Float, AppError> {
        if let Err(err) = input.validate() {
            tracing::warn!(float_id = %input.float_id, error = %err, "Rejected float");
            return Err(err);
        }

        let mut state = self.store.write().await;
        if state.float_codes.contains_key(&input.float_id) {
            tracing::warn!(float_id = %input.float_id, "Duplicate float code");
            return Err(AppError::DuplicateFloat(input.float_id));
        }

        let float = input.into_float(generate_ulid(), Utc::now());
        let float = state.insert_float(float).clone();
        tracing::debug!(id = %float.id, float_id = %float.float_id, "Created float");
        Ok(float)
    }

    /// Set a float's status and refresh its last-update time.
    ///
    /// Returns `None` if no float has this code.
    pub async fn update_status(&self, float_id: &str, status: FloatStatus) -> Option<Float> {
        let mut state = self.store.write().await;
        let float = state.float_by_code_mut(float_id)?;
        float.status = status;
        float.last_update = Utc::now();
        tracing::debug!(float_id = %float_id, status = %status, "Updated float status");
        Some(float.clone())
    }

    /// Count all floats and the active ones.
    pub async fn counts(&self) -> FloatCounts {
        let state = self.store.read().await;
        FloatCounts {
            total: state.floats.len(),
            active: state
                .floats
                .iter()
                .filter(|f| f.status == FloatStatus::Active)
                .count(),
        }
    }
}
