//! Data access layer over the in-memory store.
//!
//! Repositories hold the store operations for each collection and are
//! built with the `FromContext` derive macro for dependency injection.

mod float;
mod history;
mod measurement;

pub use float::{FloatCounts, FloatRepository};
pub use history::HistoryRepository;
pub use measurement::MeasurementRepository;
