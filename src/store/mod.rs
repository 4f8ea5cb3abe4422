//! In-memory storage backend.
//!
//! All collections live in a single [`StoreState`] behind one async
//! read/write lock, so every mutation is serialized and each
//! check-then-insert runs under a single write guard.

mod table;

use std::collections::HashMap;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{ChatQuery, Float, Measurement};

pub use table::{Record, Table};

impl Record for Float {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Measurement {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for ChatQuery {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Every collection owned by the store.
#[derive(Debug, Default)]
pub struct StoreState {
    pub floats: Table<Float>,
    /// Secondary index: external float code → internal id.
    pub float_codes: HashMap<String, String>,
    pub measurements: Table<Measurement>,
    pub chat_queries: Table<ChatQuery>,
}

impl StoreState {
    /// Looks up a float by its external code.
    pub fn float_by_code(&self, float_id: &str) -> Option<&Float> {
        self.float_codes
            .get(float_id)
            .and_then(|id| self.floats.get(id))
    }

    /// Inserts a float and its code index entry together.
    ///
    /// Callers must have checked the code is unused.
    pub fn insert_float(&mut self, float: Float) -> &Float {
        self.float_codes
            .insert(float.float_id.clone(), float.id.clone());
        self.floats.insert(float)
    }

    pub fn float_by_code_mut(&mut self, float_id: &str) -> Option<&mut Float> {
        let id = self.float_codes.get(float_id)?;
        self.floats.get_mut(id)
    }
}

/// Shared in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire shared read access.
    pub async fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().await
    }

    /// Acquire exclusive write access.
    pub async fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::NewFloat;

    #[test]
    fn test_code_index_tracks_inserts() {
        let mut state = StoreState::default();
        let float = NewFloat::new("ARGO001", 0.0, 0.0).into_float("01A".to_string(), Utc::now());
        state.insert_float(float);

        assert_eq!(state.float_by_code("ARGO001").map(|f| f.id.as_str()), Some("01A"));
        assert!(state.float_by_code("ARGO002").is_none());

        if let Some(float) = state.float_by_code_mut("ARGO001") {
            float.region = Some("Arabian Sea".to_string());
        }
        assert_eq!(
            state.floats.get("01A").and_then(|f| f.region.as_deref()),
            Some("Arabian Sea")
        );
    }
}
