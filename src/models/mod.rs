//! Domain models for Argo floats, their measurements, and chat history.

mod chat_query;
mod float;
mod measurement;

pub use chat_query::{ChatQuery, NewChatQuery, QueryIntent};
pub use float::{Float, FloatStatus, NewFloat};
pub use measurement::{Measurement, NewMeasurement, ProfilePoint};

use ulid::Ulid;

/// Generates a new ULID string.
pub fn generate_ulid() -> String {
    Ulid::new().to_string()
}
