//! Chat query history records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The category a free-text query was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryIntent {
    Temperature,
    Salinity,
    Location,
    General,
}

impl QueryIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryIntent::Temperature => "temperature",
            QueryIntent::Salinity => "salinity",
            QueryIntent::Location => "location",
            QueryIntent::General => "general",
        }
    }
}

impl std::fmt::Display for QueryIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submitted query together with the answer it produced.
///
/// Records are append-only; the store never mutates or removes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatQuery {
    pub id: String,
    pub user_query: String,
    pub query_type: QueryIntent,
    pub response: String,
    /// Structured result backing the response, if any.
    pub result_data: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// Input for appending to the history log.
#[derive(Debug, Clone, PartialEq)]
pub struct NewChatQuery {
    pub user_query: String,
    pub query_type: QueryIntent,
    pub response: String,
    pub result_data: Option<serde_json::Value>,
}

impl NewChatQuery {
    pub(crate) fn into_chat_query(self, id: String, created_at: DateTime<Utc>) -> ChatQuery {
        ChatQuery {
            id,
            user_query: self.user_query,
            query_type: self.query_type,
            response: self.response,
            result_data: self.result_data,
            created_at,
        }
    }
}
