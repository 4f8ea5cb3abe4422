//! Append-only chat history log.

use chrono::{DateTime, Utc};

use crate::context::{AppStore, Context};
use crate::di::FromContext;
use crate::models::{generate_ulid, ChatQuery, NewChatQuery};

/// Repository for the chat query history.
#[derive(FromContext, Clone)]
pub struct HistoryRepository {
    store: AppStore,
}

impl HistoryRepository {
    /// Append an entry stamped with the current time.
    pub async fn append(&self, entry: NewChatQuery) -> ChatQuery {
        self.append_at(entry, Utc::now()).await
    }

    pub(crate) async fn append_at(&self, entry: NewChatQuery, created_at: DateTime<Utc>) -> ChatQuery {
        let query = entry.into_chat_query(generate_ulid(), created_at);
        let mut state = self.store.write().await;
        let query = state.chat_queries.insert(query).clone();
        tracing::debug!(id = %query.id, query_type = %query.query_type, "Saved chat query");
        query
    }

    /// Most recent entries first, at most `limit` of them.
    ///
    /// Entries created at the same instant are ordered by insertion, later first.
    pub async fn list(&self, limit: usize) -> Vec<ChatQuery> {
        let state = self.store.read().await;
        let mut entries: Vec<(usize, &ChatQuery)> = state.chat_queries.iter_sequenced().collect();
        entries.sort_by(|(seq_a, a), (seq_b, b)| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| seq_b.cmp(seq_a))
        });
        entries
            .into_iter()
            .take(limit)
            .map(|(_, query)| query.clone())
            .collect()
    }
}
