//! Delimited-text export of floats and measurements.
//!
//! Fields are joined with [`DELIMITER`] and never quoted or escaped, so a
//! value that itself contains a comma (e.g. a region label) will split into
//! extra columns. Consumers that need lossless output must avoid such values.

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::context::Context;
use crate::di::FromContext;
use crate::models::{Float, Measurement};
use crate::repositories::{FloatRepository, MeasurementRepository};

/// Field separator for exported rows.
pub const DELIMITER: char = ',';

/// A row type that can be written as delimited text.
pub trait DelimitedRecord {
    /// Column headers, in field order.
    const HEADER: &'static [&'static str];

    /// Field values, one per header column.
    fn fields(&self) -> Vec<String>;
}

/// ISO 8601 in UTC with millisecond precision, e.g. `2024-03-01T12:00:00.000Z`.
fn timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl DelimitedRecord for Float {
    const HEADER: &'static [&'static str] = &[
        "Float ID",
        "Latitude",
        "Longitude",
        "Status",
        "Region",
        "Deployment Date",
        "Last Update",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.float_id.clone(),
            self.latitude.to_string(),
            self.longitude.to_string(),
            self.status.to_string(),
            optional(self.region.as_deref()),
            timestamp(&self.deployment_date),
            timestamp(&self.last_update),
        ]
    }
}

impl DelimitedRecord for Measurement {
    const HEADER: &'static [&'static str] = &[
        "Float ID",
        "Depth (m)",
        "Temperature (°C)",
        "Salinity (PSU)",
        "Pressure (dbar)",
        "Cycle Number",
        "Recorded At",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.float_id.clone(),
            self.depth.to_string(),
            self.temperature.to_string(),
            self.salinity.to_string(),
            optional(self.pressure),
            optional(self.cycle_number),
            timestamp(&self.recorded_at),
        ]
    }
}

/// Write a header line followed by one line per row, each ending in `\n`.
pub fn to_delimited_text<R: DelimitedRecord>(rows: &[R]) -> String {
    let separator = DELIMITER.to_string();
    let mut out = R::HEADER.join(&separator);
    out.push('\n');
    for row in rows {
        out.push_str(&row.fields().join(&separator));
        out.push('\n');
    }
    out
}

/// Which collection to export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportKind {
    Floats,
    #[default]
    Measurements,
}

impl FromStr for ExportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "floats" => Ok(ExportKind::Floats),
            "measurements" => Ok(ExportKind::Measurements),
            _ => Err(format!(
                "Invalid export type '{}'. Valid values: floats, measurements",
                s
            )),
        }
    }
}

/// A rendered export with its suggested download name.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

/// Reads the store and renders exports.
#[derive(FromContext, Clone)]
pub struct ExportService {
    floats: FloatRepository,
    measurements: MeasurementRepository,
}

impl ExportService {
    /// Export floats, or measurements optionally limited to one float's profile.
    ///
    /// `float_id` is ignored for float exports.
    pub async fn export(&self, kind: ExportKind, float_id: Option<&str>) -> CsvExport {
        let export = match (kind, float_id) {
            (ExportKind::Floats, _) => CsvExport {
                filename: "argo_floats.csv".to_string(),
                content: to_delimited_text(&self.floats.list().await),
            },
            (ExportKind::Measurements, Some(code)) => CsvExport {
                filename: format!("{}_measurements.csv", code),
                content: to_delimited_text(&self.measurements.list_by_float(code).await),
            },
            (ExportKind::Measurements, None) => CsvExport {
                filename: "all_measurements.csv".to_string(),
                content: to_delimited_text(&self.measurements.list(None).await),
            },
        };
        tracing::debug!(filename = %export.filename, bytes = export.content.len(), "Rendered export");
        export
    }
}
