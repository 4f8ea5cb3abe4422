//! Business logic services.
//!
//! Services orchestrate repositories and handle business rules,
//! using the `FromContext` derive macro for dependency injection.

mod classifier;
mod export;
mod query;

pub use classifier::{classify, KeywordClassifier, QueryClassifier};
pub use export::{to_delimited_text, CsvExport, DelimitedRecord, ExportKind, ExportService, DELIMITER};
pub use query::{QueryAnswer, QueryService};
